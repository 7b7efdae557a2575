//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンで確認メールを HTML/plaintext 両形式で生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **件名パターン**: `Confirm your trip to {目的地} on {開始日}`
//! - **確認リンク**: `{base_url}/trips/{trip_id}/confirm` をテンプレートに渡す

use chrono::{DateTime, Utc};
use planner_domain::notification::{EmailMessage, NotificationError, TripNotification};
use tera::{Context, Tera};

/// テンプレートレンダラー
///
/// tera テンプレートエンジンをラップし、`TripNotification` から
/// `EmailMessage` を生成する。
pub struct TemplateRenderer {
    engine: Tera,
}

/// 日時を英語の長い日付形式にフォーマットする（例: `January 2, 2024`）
fn format_long_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

impl TemplateRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                (
                    "trip_created.html",
                    include_str!("../../../templates/notifications/trip_created.html"),
                ),
                (
                    "trip_created.txt",
                    include_str!("../../../templates/notifications/trip_created.txt"),
                ),
            ])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// 通知イベントからメールメッセージを生成する
    ///
    /// # 引数
    ///
    /// - `notification`: 旅行通知イベント
    /// - `base_url`: アプリケーションのベース URL（例: `http://localhost:3333`）
    pub fn render(
        &self,
        notification: &TripNotification,
        base_url: &str,
    ) -> Result<EmailMessage, NotificationError> {
        let (template_name, subject, context) = self.build_template_params(notification, base_url);

        let html_body = self
            .engine
            .render(&format!("{template_name}.html"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        let text_body = self
            .engine
            .render(&format!("{template_name}.txt"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(EmailMessage {
            to: notification.recipient_email().to_string(),
            subject,
            html_body,
            text_body,
        })
    }

    /// テンプレート名、件名、コンテキストを構築する
    fn build_template_params(
        &self,
        notification: &TripNotification,
        base_url: &str,
    ) -> (String, String, Context) {
        match notification {
            TripNotification::TripCreated {
                trip_id,
                destination,
                starts_at,
                ends_at,
                owner_name,
                ..
            } => {
                let formatted_start = format_long_date(starts_at);
                let formatted_end = format_long_date(ends_at);
                let confirmation_url = format!("{base_url}/trips/{trip_id}/confirm");

                let mut context = Context::new();
                context.insert("destination", destination.as_str());
                context.insert("starts_at", &formatted_start);
                context.insert("ends_at", &formatted_end);
                context.insert("owner_name", owner_name);
                context.insert("confirmation_url", &confirmation_url);

                let subject = format!(
                    "Confirm your trip to {destination} on {formatted_start}"
                );

                ("trip_created".to_string(), subject, context)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use planner_domain::{
        participant::Email,
        trip::{Destination, TripId},
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_base_url() -> &'static str {
        "http://localhost:3333"
    }

    fn make_notification(trip_id: TripId) -> TripNotification {
        TripNotification::TripCreated {
            trip_id,
            destination: Destination::new("Florianópolis").unwrap(),
            starts_at: Utc.with_ymd_and_hms(2026, 9, 1, 9, 0, 0).unwrap(),
            ends_at: Utc.with_ymd_and_hms(2026, 9, 8, 18, 0, 0).unwrap(),
            owner_name: "John Doe".to_string(),
            owner_email: Email::new("john@example.com").unwrap(),
        }
    }

    #[test]
    fn newが正常に初期化される() {
        let renderer = TemplateRenderer::new();
        assert!(renderer.is_ok());
    }

    #[test]
    fn trip_createdのレンダリングが正しい() {
        let renderer = TemplateRenderer::new().unwrap();
        let trip_id = TripId::new();
        let notification = make_notification(trip_id.clone());

        let email = renderer.render(&notification, make_base_url()).unwrap();

        assert_eq!(email.to, "john@example.com");
        assert_eq!(
            email.subject,
            "Confirm your trip to Florianópolis on September 1, 2026"
        );
        assert!(email.html_body.contains("Florianópolis"));
        assert!(email.html_body.contains("September 1, 2026"));
        assert!(email.html_body.contains("September 8, 2026"));
        assert!(email.html_body.contains("John Doe"));
        assert!(email.text_body.contains("Florianópolis"));
        assert!(email.text_body.contains("September 1, 2026"));
    }

    #[test]
    fn htmlとtextに確認リンクが含まれる() {
        let renderer = TemplateRenderer::new().unwrap();
        let trip_id = TripId::new();
        let notification = make_notification(trip_id.clone());

        let email = renderer.render(&notification, make_base_url()).unwrap();

        let confirmation_url = format!("http://localhost:3333/trips/{trip_id}/confirm");
        assert!(email.html_body.contains(&confirmation_url));
        assert!(email.text_body.contains(&confirmation_url));
    }

    #[test]
    fn 日付は英語の長い形式でフォーマットされる() {
        let date = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(format_long_date(&date), "January 2, 2024");

        let date = Utc.with_ymd_and_hms(2026, 12, 25, 23, 59, 59).unwrap();
        assert_eq!(format_long_date(&date), "December 25, 2026");
    }
}

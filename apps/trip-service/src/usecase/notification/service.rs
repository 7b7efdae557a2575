//! # 通知サービス
//!
//! テンプレートレンダリング → メール送信 → ログ記録を統合するサービス。
//!
//! ## 設計方針
//!
//! - **fire-and-forget**: `notify()` は送信失敗してもエラーを返さない
//! - **ログ記録**: 成功・失敗どちらも `notification_logs` テーブルに記録
//! - **依存性注入**: `NotificationSender` と `NotificationLogRepository` は trait で抽象化

use std::sync::Arc;

use chrono::Utc;
use planner_domain::notification::{NotificationLogId, TripNotification};
use planner_infra::{
    notification::NotificationSender,
    repository::{NotificationLog, NotificationLogRepository},
};
use planner_shared::{event_log::event, log_business_event};

use super::TemplateRenderer;

/// 通知サービス
///
/// 旅行作成に伴うメール通知の全体フローを統合する。
/// `notify()` は fire-and-forget で、送信失敗してもエラーを返さない。
pub struct NotificationService {
    sender: Arc<dyn NotificationSender>,
    template_renderer: TemplateRenderer,
    log_repo: Arc<dyn NotificationLogRepository>,
    base_url: String,
}

impl NotificationService {
    pub fn new(
        sender: Arc<dyn NotificationSender>,
        template_renderer: TemplateRenderer,
        log_repo: Arc<dyn NotificationLogRepository>,
        base_url: String,
    ) -> Self {
        Self {
            sender,
            template_renderer,
            log_repo,
            base_url,
        }
    }

    /// 通知を送信する（fire-and-forget）
    ///
    /// テンプレートレンダリング → メール送信 → ログ記録を行う。
    /// いずれのステップで失敗してもエラーを返さない（ログ出力のみ）。
    pub async fn notify(&self, notification: TripNotification) {
        let event_type = notification.event_type();
        let event_type_str: &str = event_type.into();
        let trip_id = notification.trip_id().clone();
        let recipient_email = notification.recipient_email().to_string();

        // テンプレートレンダリング
        let email = match self.template_renderer.render(&notification, &self.base_url) {
            Ok(email) => email,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    event_type = event_type_str,
                    "通知テンプレートのレンダリングに失敗"
                );
                return;
            }
        };

        let subject = email.subject.clone();

        // メール送信
        let (status, error_message) = match self.sender.send_email(&email).await {
            Ok(()) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_SENT,
                    event.entity_type = event::entity_type::NOTIFICATION_LOG,
                    event.result = event::result::SUCCESS,
                    notification.event_type = event_type_str,
                    notification.trip_id = %trip_id,
                    notification.recipient = %recipient_email,
                    "通知メール送信成功"
                );
                ("sent".to_string(), None)
            }
            Err(e) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_FAILED,
                    event.entity_type = event::entity_type::NOTIFICATION_LOG,
                    event.result = event::result::FAILURE,
                    notification.event_type = event_type_str,
                    notification.trip_id = %trip_id,
                    notification.recipient = %recipient_email,
                    error = %e,
                    "通知メール送信失敗"
                );
                ("failed".to_string(), Some(e.to_string()))
            }
        };

        // 通知ログ記録
        let log = NotificationLog {
            id: NotificationLogId::new(),
            event_type: event_type_str.to_string(),
            trip_id,
            recipient_email,
            subject,
            status,
            error_message,
            sent_at: Utc::now(),
        };

        if let Err(e) = self.log_repo.insert(&log).await {
            tracing::error!(
                error = %e,
                "通知ログの記録に失敗"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use planner_domain::{
        participant::Email,
        trip::{Destination, TripId},
    };
    use planner_infra::mock::{MockNotificationLogRepository, MockNotificationSender};
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_service(
        sender: MockNotificationSender,
        log_repo: MockNotificationLogRepository,
    ) -> NotificationService {
        let template_renderer = TemplateRenderer::new().unwrap();
        NotificationService::new(
            Arc::new(sender),
            template_renderer,
            Arc::new(log_repo),
            "http://localhost:3333".to_string(),
        )
    }

    fn make_notification() -> TripNotification {
        let now = Utc::now();
        TripNotification::TripCreated {
            trip_id:     TripId::new(),
            destination: Destination::new("Florianópolis").unwrap(),
            starts_at:   now + Duration::days(7),
            ends_at:     now + Duration::days(14),
            owner_name:  "John Doe".to_string(),
            owner_email: Email::new("john@example.com").unwrap(),
        }
    }

    #[tokio::test]
    async fn 送信成功時にlog_repoにstatus_sentで記録する() {
        let sender = MockNotificationSender::new();
        let log_repo = MockNotificationLogRepository::new();
        let service = make_service(sender.clone(), log_repo.clone());

        service.notify(make_notification()).await;

        let logs = log_repo.logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].status, "sent");
        assert!(logs[0].error_message.is_none());
        assert_eq!(logs[0].event_type, "trip_created");
        assert_eq!(logs[0].recipient_email, "john@example.com");
    }

    #[tokio::test]
    async fn 送信失敗時にlog_repoにstatus_failedで記録しエラーを返さない() {
        let sender = MockNotificationSender::failing();
        let log_repo = MockNotificationLogRepository::new();
        let service = make_service(sender.clone(), log_repo.clone());

        // notify() は () を返す（送信失敗を伝播しない）
        service.notify(make_notification()).await;

        assert!(sender.sent_emails().is_empty());

        let logs = log_repo.logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].status, "failed");
        assert!(logs[0].error_message.is_some());
    }

    #[tokio::test]
    async fn mock_notification_senderが送信メッセージを記録する() {
        let sender = MockNotificationSender::new();
        let log_repo = MockNotificationLogRepository::new();
        let service = make_service(sender.clone(), log_repo);

        service.notify(make_notification()).await;

        let sent = sender.sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "john@example.com");
        assert!(sent[0].subject.starts_with("Confirm your trip to Florianópolis on"));
    }
}

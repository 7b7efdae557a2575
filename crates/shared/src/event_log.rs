//! # ビジネスイベントログの構造化ヘルパー
//!
//! 運用調査で `jq` によるフィルタが効くよう、ログフィールドの命名規約と
//! ヘルパーマクロを提供する。
//!
//! ## ビジネスイベント
//!
//! [`log_business_event!`] マクロで出力する。`event.kind = "business_event"`
//! マーカーが自動付与され、
//! `jq 'select(.["event.kind"] == "business_event")'` でフィルタできる。
//!
//! ## フィールド命名規約
//!
//! ドット記法（`event.category`、`event.action`）を使用。tracing の
//! `$($field:ident).+` パターンでサポートされ、JSON 出力でフラットなキーになる。

/// ビジネスイベントを構造化ログとして出力する。
///
/// `event.kind = "business_event"` マーカーを自動付与し、
/// `tracing::info!` レベルで出力する。
///
/// ## 必須フィールド（慣例）
///
/// - `event.category`: イベントカテゴリ（[`event::category`] の定数を使用）
/// - `event.action`: アクション名（[`event::action`] の定数を使用）
/// - `event.result`: 結果（[`event::result`] の定数を使用）
///
/// ## 推奨フィールド
///
/// - `event.entity_type`: エンティティ種別（[`event::entity_type`] の定数を使用）
/// - `event.entity_id`: エンティティ ID
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    /// イベントカテゴリ
    pub mod category {
        pub const TRIP: &str = "trip";
        pub const NOTIFICATION: &str = "notification";
    }

    /// イベントアクション
    pub mod action {
        // 旅行
        pub const TRIP_CREATED: &str = "trip.created";

        // 通知
        pub const NOTIFICATION_SENT: &str = "notification.sent";
        pub const NOTIFICATION_FAILED: &str = "notification.failed";
    }

    /// エンティティ種別
    pub mod entity_type {
        pub const TRIP: &str = "trip";
        pub const PARTICIPANT: &str = "participant";
        pub const NOTIFICATION_LOG: &str = "notification_log";
    }

    /// イベント結果
    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
    }
}

#[cfg(test)]
mod tests {
    use super::event;

    #[test]
    fn 定数がドット記法の命名規約に従っている() {
        assert_eq!(event::action::TRIP_CREATED, "trip.created");
        assert_eq!(event::action::NOTIFICATION_SENT, "notification.sent");
        assert_eq!(event::action::NOTIFICATION_FAILED, "notification.failed");
    }

    #[test]
    fn log_business_eventマクロがコンパイルできる() {
        crate::log_business_event!(
            event.category = event::category::TRIP,
            event.action = event::action::TRIP_CREATED,
            event.result = event::result::SUCCESS,
            "テストイベント"
        );
    }
}

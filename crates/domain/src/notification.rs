//! # 通知
//!
//! メール通知に関するドメインモデルを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`TripNotification`] | 旅行通知イベント | 旅行作成時のオーナー宛確認メール |
//! | [`NotificationEventType`] | 通知イベント種別 | 現時点では trip_created のみ |
//!
//! ## 設計方針
//!
//! - **enum による通知イベント**: 各バリアントが通知イベントに対応する。
//!   参加者向け確認メールはスコープ外のため、現在は 1 種類のみ
//! - **fire-and-forget**: 通知送信の失敗は旅行作成を失敗させない
//! - **テンプレート分離**: 通知イベントとメール生成は分離
//!   （TemplateRenderer は trip-service 側）

use chrono::{DateTime, Utc};
use strum::IntoStaticStr;
use thiserror::Error;

use crate::{
    participant::Email,
    trip::{Destination, TripId},
};

define_uuid_id! {
    /// 通知ログ ID（一意識別子）
    ///
    /// notification_logs テーブルの主キー。UUID v7 を使用。
    pub struct NotificationLogId;
}

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),

    /// 通知ログの記録に失敗
    #[error("通知ログの記録に失敗: {0}")]
    LogFailed(String),
}

/// 通知イベント種別
///
/// notification_logs テーブルの `event_type` カラムに格納される値。
/// snake_case でシリアライズされる。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationEventType {
    /// 旅行作成: 作成直後にオーナーへ確認メールを送信
    TripCreated,
}

/// メールメッセージ
///
/// テンプレートレンダリングの出力。NotificationSender に渡される。
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// 送信先メールアドレス
    pub to:        String,
    /// 件名
    pub subject:   String,
    /// HTML 本文
    pub html_body: String,
    /// プレーンテキスト本文
    pub text_body: String,
}

/// 旅行通知イベント
///
/// 通知の生成に必要な情報を運ぶ。永続化済みエンティティへの参照ではなく
/// 値のスナップショットを持つため、送信時点のデータで確実にレンダリングできる。
#[derive(Debug, Clone)]
pub enum TripNotification {
    /// 旅行作成: 作成直後にオーナーへ確認メールを送信
    TripCreated {
        trip_id:     TripId,
        destination: Destination,
        starts_at:   DateTime<Utc>,
        ends_at:     DateTime<Utc>,
        owner_name:  String,
        owner_email: Email,
    },
}

impl TripNotification {
    /// 通知イベント種別を返す
    pub fn event_type(&self) -> NotificationEventType {
        match self {
            Self::TripCreated { .. } => NotificationEventType::TripCreated,
        }
    }

    /// 受信者のメールアドレスを返す
    pub fn recipient_email(&self) -> &Email {
        match self {
            Self::TripCreated { owner_email, .. } => owner_email,
        }
    }

    /// 対象の旅行 ID を返す
    pub fn trip_id(&self) -> &TripId {
        match self {
            Self::TripCreated { trip_id, .. } => trip_id,
        }
    }
}

//! # テスト用モック実装
//!
//! ユースケーステストで使用するインメモリモック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! planner-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! リポジトリとメール送信の両方に障害注入モード（`failing()`）を用意し、
//! 「永続化失敗で旅行が残らない」「送信失敗でもリクエストは成功する」
//! といった性質をユースケース層でテストできるようにしている。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use planner_domain::{
    notification::{EmailMessage, NotificationError},
    participant::Participant,
    trip::{Trip, TripId},
};

use crate::{
    db::{TransactionManager, TxContext},
    error::InfraError,
    notification::NotificationSender,
    repository::{NotificationLog, NotificationLogRepository, TripRepository},
};

// ===== MockTripRepository =====

/// インメモリの TripRepository
///
/// `failing()` で作成すると `insert` が常に失敗し、
/// ストレージ障害をシミュレートできる。
#[derive(Clone, Default)]
pub struct MockTripRepository {
    trips:   Arc<Mutex<Vec<(Trip, Vec<Participant>)>>>,
    failing: bool,
}

impl MockTripRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// insert が常に失敗するリポジトリを作成する
    pub fn failing() -> Self {
        Self {
            trips:   Arc::new(Mutex::new(Vec::new())),
            failing: true,
        }
    }

    /// 保存済みの旅行数を返す
    pub fn trip_count(&self) -> usize {
        self.trips.lock().unwrap().len()
    }
}

#[async_trait]
impl TripRepository for MockTripRepository {
    async fn insert(
        &self,
        _tx: &mut TxContext,
        trip: &Trip,
        participants: &[Participant],
    ) -> Result<(), InfraError> {
        if self.failing {
            return Err(InfraError::unexpected("ストレージ障害（モック）"));
        }
        self.trips
            .lock()
            .unwrap()
            .push((trip.clone(), participants.to_vec()));
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &TripId,
    ) -> Result<Option<(Trip, Vec<Participant>)>, InfraError> {
        Ok(self
            .trips
            .lock()
            .unwrap()
            .iter()
            .find(|(trip, _)| trip.id() == id)
            .cloned())
    }
}

// ===== MockTransactionManager =====

/// モックのトランザクションマネージャ
///
/// インメモリリポジトリは実トランザクションを必要としないため、
/// `TxContext::mock()` を返すだけの実装。
pub struct MockTransactionManager;

#[async_trait]
impl TransactionManager for MockTransactionManager {
    async fn begin(&self) -> Result<TxContext, InfraError> {
        Ok(TxContext::mock())
    }
}

// ===== MockNotificationSender =====

/// 送信されたメールを記録するモック送信実装
///
/// `failing()` で作成すると `send_email` が常に失敗し、
/// 配信障害をシミュレートできる。
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    sent:    Arc<Mutex<Vec<EmailMessage>>>,
    failing: bool,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// send_email が常に失敗する送信実装を作成する
    pub fn failing() -> Self {
        Self {
            sent:    Arc::new(Mutex::new(Vec::new())),
            failing: true,
        }
    }

    /// 送信済みメールの一覧を返す
    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        if self.failing {
            return Err(NotificationError::SendFailed(
                "SMTP 接続失敗（モック）".to_string(),
            ));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

// ===== MockNotificationLogRepository =====

/// 通知ログを記録するインメモリリポジトリ
#[derive(Clone, Default)]
pub struct MockNotificationLogRepository {
    logs: Arc<Mutex<Vec<NotificationLog>>>,
}

impl MockNotificationLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録済みの通知ログ一覧を返す
    pub fn logs(&self) -> Vec<NotificationLog> {
        self.logs.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationLogRepository for MockNotificationLogRepository {
    async fn insert(&self, log: &NotificationLog) -> Result<(), InfraError> {
        self.logs.lock().unwrap().push(log.clone());
        Ok(())
    }
}

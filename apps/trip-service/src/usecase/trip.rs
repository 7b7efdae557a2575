//! # 旅行作成ユースケース
//!
//! 旅行作成ワークフローのオーケストレーションを実装する。
//!
//! ## 処理フロー
//!
//! 1. 招待メールアドレスの重複排除
//! 2. 注入された時計を基準に `Trip::new` で日付を検証
//! 3. 旅行と参加者を単一トランザクションで永続化
//! 4. オーナーへ確認メールを送信（fire-and-forget）

use std::sync::Arc;

use chrono::{DateTime, Utc};
use planner_domain::{
    clock::Clock,
    notification::TripNotification,
    participant::{Email, Participant},
    trip::{Destination, NewTrip, Trip, TripId},
};
use planner_infra::{db::TransactionManager, repository::TripRepository};
use planner_shared::{event_log::event, log_business_event};

use crate::{error::TripServiceError, usecase::NotificationService};

/// 旅行作成入力
#[derive(Debug, Clone)]
pub struct CreateTripInput {
    /// 目的地
    pub destination:    Destination,
    /// 開始日時
    pub starts_at:      DateTime<Utc>,
    /// 終了日時
    pub ends_at:        DateTime<Utc>,
    /// 主催者の表示名
    pub owner_name:     String,
    /// 主催者のメールアドレス
    pub owner_email:    Email,
    /// 招待するメールアドレスのリスト
    pub invitee_emails: Vec<Email>,
}

/// 旅行ユースケース実装
///
/// 旅行の作成に関するビジネスロジックを実装する。
pub struct TripUseCaseImpl {
    trip_repo: Arc<dyn TripRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    clock: Arc<dyn Clock>,
    notification_service: Arc<NotificationService>,
}

impl TripUseCaseImpl {
    /// 新しい旅行ユースケースを作成
    pub fn new(
        trip_repo: Arc<dyn TripRepository>,
        tx_manager: Arc<dyn TransactionManager>,
        clock: Arc<dyn Clock>,
        notification_service: Arc<NotificationService>,
    ) -> Self {
        Self {
            trip_repo,
            tx_manager,
            clock,
            notification_service,
        }
    }

    /// 旅行を作成する
    ///
    /// ## 処理フロー
    ///
    /// 1. 招待リストの重複とオーナー自身のアドレスを除外
    /// 2. 時計から取得した基準時刻で日付を検証し Trip を作成
    /// 3. 旅行 + 参加者（オーナー + 招待者）を単一トランザクションで保存
    /// 4. オーナーへ確認メールを送信（失敗してもエラーにしない）
    ///
    /// ## エラー
    ///
    /// - 開始日が基準時刻より過去の場合
    /// - 終了日が開始日より前の場合
    /// - データベースエラー
    pub async fn create_trip(&self, input: CreateTripInput) -> Result<Trip, TripServiceError> {
        // 1. 招待リストを正規化（オーナー自身と重複を除外、順序は保持）
        let invitee_emails = dedup_invitees(&input.owner_email, input.invitee_emails);

        // 2. 日付を検証して Trip を作成
        let now = self.clock.now();
        let trip = Trip::new(NewTrip {
            id: TripId::new(),
            destination: input.destination,
            starts_at: input.starts_at,
            ends_at: input.ends_at,
            now,
        })?;

        // 3. 参加者を構築（オーナーは確認済み、招待者は未確認）
        let mut participants = vec![Participant::owner(
            trip.id().clone(),
            input.owner_name.clone(),
            input.owner_email.clone(),
        )];
        participants.extend(
            invitee_emails
                .into_iter()
                .map(|email| Participant::invitee(trip.id().clone(), email)),
        );

        // 4. 単一トランザクションで保存
        let mut tx = self.tx_manager.begin().await?;
        self.trip_repo.insert(&mut tx, &trip, &participants).await?;
        tx.commit().await?;

        log_business_event!(
            event.category = event::category::TRIP,
            event.action = event::action::TRIP_CREATED,
            event.entity_type = event::entity_type::TRIP,
            event.entity_id = %trip.id(),
            event.result = event::result::SUCCESS,
            trip.participant_count = participants.len(),
            "旅行作成"
        );

        // 5. オーナーへ確認メールを送信（fire-and-forget）
        self.notification_service
            .notify(TripNotification::TripCreated {
                trip_id:     trip.id().clone(),
                destination: trip.destination().clone(),
                starts_at:   trip.starts_at(),
                ends_at:     trip.ends_at(),
                owner_name:  input.owner_name,
                owner_email: input.owner_email,
            })
            .await;

        Ok(trip)
    }
}

/// 招待リストからオーナー自身のアドレスと重複を除外する（順序は保持）
fn dedup_invitees(owner_email: &Email, invitee_emails: Vec<Email>) -> Vec<Email> {
    let mut result: Vec<Email> = Vec::with_capacity(invitee_emails.len());
    for email in invitee_emails {
        if &email == owner_email || result.contains(&email) {
            continue;
        }
        result.push(email);
    }
    result
}

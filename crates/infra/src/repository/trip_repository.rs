//! # TripRepository
//!
//! 旅行と参加者の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **原子的な複数行書き込み**: 旅行 1 行 + 参加者 N 行は同一の
//!   [`TxContext`] 上で INSERT する。コミットはユースケース層が行い、
//!   途中で失敗した場合はドロップ時のロールバックにより
//!   部分的な書き込みが観測されることはない
//! - **リトライなし**: ストレージ障害はそのまま [`InfraError`] として
//!   呼び出し元に伝播する

use async_trait::async_trait;
use planner_domain::{
    participant::{Email, Participant, ParticipantId, ParticipantRecord},
    trip::{Destination, Trip, TripId, TripRecord},
};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::{db::TxContext, error::InfraError};

/// 旅行リポジトリトレイト
///
/// 旅行と参加者の永続化操作を定義する。
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// 旅行と参加者を同一トランザクションで挿入する
    ///
    /// # 引数
    ///
    /// - `tx`: トランザクションコンテキスト（コミットは呼び出し元の責務）
    /// - `trip`: 旅行エンティティ
    /// - `participants`: 参加者（空スライスも許容する。参加者なしの
    ///   縮退モードは同一のコードパスで扱う）
    async fn insert(
        &self,
        tx: &mut TxContext,
        trip: &Trip,
        participants: &[Participant],
    ) -> Result<(), InfraError>;

    /// ID で旅行と参加者一覧を取得する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some((trip, participants)))`: 旅行が見つかった場合
    /// - `Ok(None)`: 旅行が見つからない場合
    /// - `Err(_)`: データベースエラー
    async fn find_by_id(
        &self,
        id: &TripId,
    ) -> Result<Option<(Trip, Vec<Participant>)>, InfraError>;
}

/// PostgreSQL 実装の TripRepository
#[derive(Debug, Clone)]
pub struct PostgresTripRepository {
    pool: PgPool,
}

impl PostgresTripRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TripRepository for PostgresTripRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(trip_id = %trip.id()))]
    async fn insert(
        &self,
        tx: &mut TxContext,
        trip: &Trip,
        participants: &[Participant],
    ) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            INSERT INTO trips (id, destination, starts_at, ends_at, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(trip.id().as_uuid())
        .bind(trip.destination().as_str())
        .bind(trip.starts_at())
        .bind(trip.ends_at())
        .bind(trip.created_at())
        .execute(&mut *tx.conn())
        .await?;

        for participant in participants {
            sqlx::query(
                r#"
                INSERT INTO participants (id, trip_id, name, email, is_owner, is_confirmed)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(participant.id().as_uuid())
            .bind(participant.trip_id().as_uuid())
            .bind(participant.name())
            .bind(participant.email().as_str())
            .bind(participant.is_owner())
            .bind(participant.is_confirmed())
            .execute(&mut *tx.conn())
            .await?;
        }

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(trip_id = %id))]
    async fn find_by_id(
        &self,
        id: &TripId,
    ) -> Result<Option<(Trip, Vec<Participant>)>, InfraError> {
        let Some(trip_row) = sqlx::query(
            r#"
            SELECT id, destination, starts_at, ends_at, created_at
            FROM trips
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };

        let destination = Destination::new(trip_row.try_get::<String, _>("destination")?)
            .map_err(|e| InfraError::unexpected(format!("不正な目的地が保存されている: {e}")))?;
        let trip = Trip::from_db(TripRecord {
            id: TripId::from_uuid(trip_row.try_get::<Uuid, _>("id")?),
            destination,
            starts_at: trip_row.try_get("starts_at")?,
            ends_at: trip_row.try_get("ends_at")?,
            created_at: trip_row.try_get("created_at")?,
        });

        // UUID v7 は時間順のため、id 順 = 挿入順（オーナーが先頭）
        let participant_rows = sqlx::query(
            r#"
            SELECT id, trip_id, name, email, is_owner, is_confirmed
            FROM participants
            WHERE trip_id = $1
            ORDER BY id
            "#,
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        let mut participants = Vec::with_capacity(participant_rows.len());
        for row in participant_rows {
            let email = Email::new(row.try_get::<String, _>("email")?).map_err(|e| {
                InfraError::unexpected(format!("不正なメールアドレスが保存されている: {e}"))
            })?;
            participants.push(Participant::from_db(ParticipantRecord {
                id: ParticipantId::from_uuid(row.try_get::<Uuid, _>("id")?),
                trip_id: TripId::from_uuid(row.try_get::<Uuid, _>("trip_id")?),
                name: row.try_get("name")?,
                email,
                is_owner: row.try_get("is_owner")?,
                is_confirmed: row.try_get("is_confirmed")?,
            }));
        }

        Ok(Some((trip, participants)))
    }
}

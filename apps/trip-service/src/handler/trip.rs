//! # 旅行 API ハンドラ
//!
//! 旅行作成エンドポイントを実装する。

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use planner_domain::{
    participant::Email,
    trip::{Destination, TripId},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::TripServiceError,
    usecase::{CreateTripInput, TripUseCaseImpl},
};

/// 旅行作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateTripRequest {
    /// 目的地
    pub destination:      String,
    /// 開始日時
    pub starts_at:        DateTime<Utc>,
    /// 終了日時
    pub ends_at:          DateTime<Utc>,
    /// 主催者の表示名
    pub owner_name:       String,
    /// 主催者のメールアドレス
    pub owner_email:      String,
    /// 招待するメールアドレスのリスト
    #[serde(default)]
    pub emails_to_invite: Vec<String>,
}

/// 旅行作成レスポンス
#[derive(Debug, Serialize)]
pub struct CreateTripResponse {
    #[serde(rename = "tripId")]
    pub trip_id: TripId,
}

/// 旅行ハンドラーの State
pub struct TripState {
    pub usecase: TripUseCaseImpl,
}

/// 旅行を作成する
///
/// ## エンドポイント
/// POST /trips
///
/// ## 処理フロー
/// 1. リクエストの値オブジェクトを構築（バリデーション）
/// 2. ユースケースを呼び出し
/// 3. 作成された旅行の ID を返す
pub async fn create_trip(
    State(state): State<Arc<TripState>>,
    Json(req): Json<CreateTripRequest>,
) -> Result<Response, TripServiceError> {
    // 値オブジェクトを構築
    let destination = Destination::new(&req.destination)?;
    let owner_email = Email::new(&req.owner_email)?;
    let invitee_emails = req
        .emails_to_invite
        .iter()
        .map(|e| Email::new(e))
        .collect::<Result<Vec<_>, _>>()?;

    // ユースケースを呼び出し
    let input = CreateTripInput {
        destination,
        starts_at: req.starts_at,
        ends_at: req.ends_at,
        owner_name: req.owner_name,
        owner_email,
        invitee_emails,
    };

    let trip = state.usecase.create_trip(input).await?;

    // レスポンスを返す
    let response = CreateTripResponse {
        trip_id: trip.id().clone(),
    };

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use planner_domain::clock::FixedClock;
    use planner_infra::mock::{
        MockNotificationLogRepository,
        MockNotificationSender,
        MockTransactionManager,
        MockTripRepository,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::usecase::notification::{NotificationService, TemplateRenderer};

    fn make_state(now: chrono::DateTime<Utc>) -> Arc<TripState> {
        let notification_service = Arc::new(NotificationService::new(
            Arc::new(MockNotificationSender::new()),
            TemplateRenderer::new().unwrap(),
            Arc::new(MockNotificationLogRepository::new()),
            "http://localhost:3333".to_string(),
        ));

        let usecase = TripUseCaseImpl::new(
            Arc::new(MockTripRepository::new()),
            Arc::new(MockTransactionManager),
            Arc::new(FixedClock::new(now)),
            notification_service,
        );

        Arc::new(TripState { usecase })
    }

    #[tokio::test]
    async fn 旅行作成ハンドラは201を返す() {
        let now = Utc::now();
        let state = make_state(now);

        let req = CreateTripRequest {
            destination:      "Florianópolis".to_string(),
            starts_at:        now + Duration::days(7),
            ends_at:          now + Duration::days(14),
            owner_name:       "John Doe".to_string(),
            owner_email:      "john@example.com".to_string(),
            emails_to_invite: vec!["mary@example.com".to_string()],
        };

        let response = create_trip(State(state), Json(req)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn 不正なメールアドレスはバリデーションエラーになる() {
        let now = Utc::now();
        let state = make_state(now);

        let req = CreateTripRequest {
            destination:      "Florianópolis".to_string(),
            starts_at:        now + Duration::days(7),
            ends_at:          now + Duration::days(14),
            owner_name:       "John Doe".to_string(),
            owner_email:      "not-an-email".to_string(),
            emails_to_invite: vec![],
        };

        let result = create_trip(State(state), Json(req)).await;
        assert!(matches!(result, Err(TripServiceError::Domain(_))));
    }

    #[test]
    fn レスポンスはキャメルケースのtrip_idを持つ() {
        let response = CreateTripResponse {
            trip_id: TripId::new(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("tripId").is_some());
    }

    #[test]
    fn リクエストは招待リスト省略を許容する() {
        let json = serde_json::json!({
            "destination": "Florianópolis",
            "starts_at": "2026-09-01T09:00:00Z",
            "ends_at": "2026-09-08T18:00:00Z",
            "owner_name": "John Doe",
            "owner_email": "john@example.com",
        });
        let req: CreateTripRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.emails_to_invite, Vec::<String>::new());
    }
}

//! # Trip Service エラー定義
//!
//! Trip Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## 伝播ポリシー
//!
//! - バリデーション・永続化エラー: リクエスト失敗としてクライアントへ伝播
//! - 配信エラー（メール送信失敗）: ここには現れない。通知は
//!   fire-and-forget であり、ユースケース層でログに吸収される

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use planner_domain::DomainError;
use planner_infra::InfraError;
use serde::Serialize;
use thiserror::Error;

/// エラーレスポンス（RFC 7807 Problem Details）
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title:      String,
    pub status:     u16,
    pub detail:     String,
}

/// Trip Service で発生するエラー
#[derive(Debug, Error)]
pub enum TripServiceError {
    /// ドメイン層のエラー（バリデーション・日付検証）
    ///
    /// すべて 400 Bad Request にマッピングされる。
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),

    /// 内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl IntoResponse for TripServiceError {
    fn into_response(self) -> Response {
        let (status, error_type, title, detail) = match &self {
            TripServiceError::Domain(e) => (
                StatusCode::BAD_REQUEST,
                "https://planner.example.com/errors/bad-request",
                "Bad Request",
                e.to_string(),
            ),
            TripServiceError::Database(e) => {
                tracing::error!("データベースエラー: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "https://planner.example.com/errors/internal-error",
                    "Internal Server Error",
                    "内部エラーが発生しました".to_string(),
                )
            }
            TripServiceError::Internal(msg) => {
                tracing::error!("内部エラー: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "https://planner.example.com/errors/internal-error",
                    "Internal Server Error",
                    "内部エラーが発生しました".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                error_type: error_type.to_string(),
                title: title.to_string(),
                status: status.as_u16(),
                detail,
            }),
        )
            .into_response()
    }
}

//! # Planner ドメイン層
//!
//! 旅行作成ワークフローのビジネスルールを表現するドメイン層。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: プリミティブ型をラップし、不正な値の存在を
//!   型レベルで排除する（`Destination`、`Email`）
//! - **エンティティ**: 生成時に不変条件を検証する（`Trip`、`Participant`）
//! - **時刻の注入**: `Utc::now()` の直接呼び出しを避け、[`clock::Clock`]
//!   経由で現在時刻を受け取る
//!
//! ## 依存関係の方向
//!
//! ```text
//! trip-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、メール送信）には一切依存しない。
//! これにより、ビジネスロジックの純粋性が保たれる。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 現在時刻の注入用抽象化
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`notification`] - メール通知のドメインモデル
//! - [`participant`] - 参加者エンティティとメールアドレス値オブジェクト
//! - [`trip`] - 旅行エンティティと日付検証

#[macro_use]
mod macros;

pub mod clock;
pub mod error;
pub mod notification;
pub mod participant;
pub mod trip;

pub use error::DomainError;

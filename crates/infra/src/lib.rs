//! # Planner インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはリポジトリトレイトと通知トレイトの具体的な実装を提供する。
//! 外部システムの詳細をカプセル化し、ドメイン層をインフラの変更から保護する。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理とトランザクション
//! - **リポジトリ実装**: 旅行 + 参加者の原子的な永続化
//! - **メール送信**: SMTP / Noop の通知バックエンド
//!
//! ## 依存関係
//!
//! ```text
//! trip-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL 接続管理とトランザクションコンテキスト
//! - [`error`] - インフラ層エラー定義
//! - [`notification`] - メール送信実装
//! - [`repository`] - リポジトリ実装

pub mod db;
pub mod error;
pub mod notification;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::InfraError;

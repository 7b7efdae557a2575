//! # ユースケース層
//!
//! Trip Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリ・時計・通知を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約
//!
//! ## モジュール構成
//!
//! - `trip`: 旅行作成ユースケース
//! - `notification`: メール通知（レンダリング・送信・ログ記録）

pub mod notification;
pub mod trip;

pub use notification::{NotificationService, TemplateRenderer};
pub use trip::{CreateTripInput, TripUseCaseImpl};

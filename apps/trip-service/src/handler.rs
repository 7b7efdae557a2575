//! # HTTP ハンドラ
//!
//! Trip Service の HTTP エンドポイントを定義する。

pub mod health;
pub mod trip;

pub use health::health_check;
pub use trip::{CreateTripRequest, CreateTripResponse, TripState, create_trip};

//! # Trip Service サーバー
//!
//! 旅行作成ワークフローを提供する HTTP サービス。
//!
//! ## 役割
//!
//! - **旅行作成**: 日付検証 → 旅行 + 参加者の原子的な永続化
//! - **確認メール**: 作成直後にオーナーへ確認メールを送信（fire-and-forget）
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TRIP_SERVICE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `TRIP_SERVICE_PORT` | No | ポート番号（デフォルト: `3333`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `NOTIFICATION_BACKEND` | No | `smtp` または `noop`（デフォルト: `noop`） |
//! | `SMTP_HOST` | No | SMTP ホスト（デフォルト: `localhost`） |
//! | `SMTP_PORT` | No | SMTP ポート（デフォルト: `1025`、Mailpit） |
//! | `NOTIFICATION_FROM_ADDRESS` | No | 送信元メールアドレス |
//! | `NOTIFICATION_BASE_URL` | No | 確認リンクのベース URL |
//!
//! ## 起動方法
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo run -p planner-trip-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use planner_domain::clock::SystemClock;
use planner_infra::{
    db::{self, PgTransactionManager},
    notification::{NoopNotificationSender, NotificationSender, SmtpNotificationSender},
    repository::{PostgresNotificationLogRepository, PostgresTripRepository},
};
use planner_trip_service::{
    config::TripServiceConfig,
    handler::{TripState, create_trip, health_check},
    usecase::{NotificationService, TemplateRenderer, TripUseCaseImpl},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Trip Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,planner=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 設定読み込み
    let config = TripServiceConfig::from_env().expect("設定の読み込みに失敗しました");

    tracing::info!(
        "Trip Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("データベース接続に失敗しました");
    tracing::info!("データベースに接続しました");

    // マイグレーションを適用
    db::run_migrations(&pool)
        .await
        .expect("マイグレーションの適用に失敗しました");

    // 通知バックエンドを構築
    let sender: Arc<dyn NotificationSender> = match config.notification.backend.as_str() {
        "smtp" => Arc::new(SmtpNotificationSender::new(
            &config.notification.smtp_host,
            config.notification.smtp_port,
            config.notification.from_address.clone(),
        )),
        "noop" => Arc::new(NoopNotificationSender),
        other => {
            tracing::warn!(
                backend = other,
                "未知の通知バックエンドが指定されたため noop にフォールバックします"
            );
            Arc::new(NoopNotificationSender)
        }
    };

    let template_renderer =
        TemplateRenderer::new().expect("通知テンプレートの初期化に失敗しました");
    let notification_service = Arc::new(NotificationService::new(
        sender,
        template_renderer,
        Arc::new(PostgresNotificationLogRepository::new(pool.clone())),
        config.notification.base_url.clone(),
    ));

    // 依存コンポーネントを初期化
    let usecase = TripUseCaseImpl::new(
        Arc::new(PostgresTripRepository::new(pool.clone())),
        Arc::new(PgTransactionManager::new(pool.clone())),
        Arc::new(SystemClock),
        notification_service,
    );
    let trip_state = Arc::new(TripState { usecase });

    // ルーター構築
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/trips", post(create_trip))
        .with_state(trip_state)
        .layer(TraceLayer::new_for_http());

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Trip Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

//! # 카테고리 API 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 데이터베이스 연결 풀 생성
//! 4. 데이터베이스 마이그레이션 실행
//! 5. API 라우터 설정
//! 6. HTTP 서버 시작

mod app;
mod config;
mod db;
mod error;
mod middleware;
mod models;
mod routes;
mod services;

use std::str::FromStr;

use anyhow::Result;
use config::Config;
use routes::AppState;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 이 크레이트와 tower_http, axum을 debug 레벨로 출력합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "category_api=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env()?;
    tracing::info!("Starting category API server on {}:{}", config.host, config.port);

    // ── 4단계: SQLite 연결 풀 생성 ──
    // 데이터베이스 파일이 들어갈 디렉토리가 없으면 먼저 만듭니다.
    // (인메모리 DB는 부모 디렉토리가 비어 있으므로 건너뜁니다)
    let connect_options = SqliteConnectOptions::from_str(&config.database_url)?;
    if let Some(parent) = connect_options.get_filename().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
            tracing::info!("Created database directory: {}", parent.display());
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(connect_options)
        .await?;

    // ── 5단계: 데이터베이스 마이그레이션 실행 ──
    // ./migrations 폴더의 SQL 파일은 컴파일 타임에 바이너리에 포함됩니다.
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    // ── 6단계: 라우터 설정 ──
    let state = AppState {
        pool,
        api_key: config.api_key.clone(),
    };
    let app = app::build_app(state);

    // ── 7단계: 서버 시작 ──
    // 요청마다 별도의 tokio 태스크에서 핸들러가 실행됩니다.
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

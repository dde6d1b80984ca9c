//! # Recipedex 웹 서버 진입점
//!
//! 이 파일은 조회 API 서버의 **시작점(entry point)**입니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 데이터베이스 연결 풀 생성
//! 4. 데이터베이스 마이그레이션 실행 (recipes 테이블 준비, 멱등)
//! 5. 라우터 조립 및 HTTP 서버 시작
//!
//! 데이터 적재는 이 서버가 하지 않습니다.
//! 서버를 띄우기 전에 `load_recipes` 바이너리를 먼저 실행하세요.

use std::str::FromStr;

use anyhow::Result;
use recipedex::{config::Config, db, AppState};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .ok()는 Result를 Option으로 변환하여, .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG 환경변수가 없으면 기본값으로 이 크레이트와
    // tower_http, axum 모듈을 debug 레벨로 설정합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipedex=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env();
    tracing::info!("Starting Recipedex server on {}:{}", config.host, config.port);

    // ── 4단계: SQLite 연결 풀 생성 ──
    // 연결 풀: 매 요청마다 새 연결을 만드는 대신, 풀에서 빌려 쓰고 반납합니다.
    // create_if_missing(true): DB 파일이 없으면 빈 파일을 만듭니다
    // (적재 전에 서버를 먼저 띄워도 빈 목록으로 동작하도록).
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // ── 5단계: 데이터베이스 마이그레이션 실행 ──
    // 아직 실행되지 않은 마이그레이션만 순서대로 실행합니다.
    tracing::info!("Running database migrations...");
    db::MIGRATOR.run(&pool).await?;

    // ── 6단계: 애플리케이션 상태(State) 및 라우터 조립 ──
    let state = AppState {
        pool,
        static_dir: config.static_dir.clone(),
    };
    let app = recipedex::app(state);

    // ── 7단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // 이 줄에서 서버가 영원히 실행됩니다 (Ctrl+C로 종료할 때까지).
    axum::serve(listener, app).await?;

    Ok(())
}

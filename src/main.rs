//! # Trivia 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩 (일반/테스트 데이터베이스 선택)
//! 4. SQLite 연결 풀 생성
//! 5. 테이블 생성 (마이그레이션)
//! 6. API 라우터 설정 후 HTTP 서버 시작

use anyhow::{Context, Result};
use trivia::{
    config::Config,
    db,
    routes::{self, AppState},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // RUST_LOG가 없으면 trivia, tower_http 모듈을 debug 레벨로 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trivia=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 데이터베이스 URL이 없으면 여기서 종료합니다.
    let config = Config::from_env()?;
    tracing::info!(
        testing = config.testing,
        "Starting Trivia server on {}:{}",
        config.host,
        config.port
    );

    let pool = db::connect(&config.database_url, 5)
        .await
        .with_context(|| format!("failed to connect to {}", config.database_url))?;

    tracing::info!("Creating tables if absent...");
    db::migrate(&pool).await?;

    let app = routes::router(AppState { pool });

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//!
//! 각 하위 모듈:
//! - `categories`: 카테고리 조회/삽입
//! - `questions`: 문제 조회, 검색, 퀴즈 후보 조회, 삽입/수정/삭제

pub mod categories;
pub mod questions;

pub use categories::*;
pub use questions::*;

use sqlx::{
    migrate::MigrateError,
    sqlite::{SqlitePool, SqlitePoolOptions},
};

/// SQLite 연결 풀을 생성합니다.
///
/// sqlx는 SQLite 연결마다 `PRAGMA foreign_keys = ON`을 기본으로 켜므로
/// 존재하지 않는 카테고리를 가리키는 문제는 INSERT 단계에서 거부됩니다.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// `migrations/`의 스키마를 적용합니다. 테이블이 이미 있으면 건드리지 않습니다.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

//! # 카테고리 데이터베이스 쿼리 모듈
//!
//! `categories` 테이블 조회와 삽입 함수들입니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

/// 모든 카테고리를 ID 오름차순으로 조회합니다.
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<Category>, AppError> {
    let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(categories)
}

/// ID로 카테고리 하나를 조회합니다.
///
/// `fetch_optional`: 0행이면 None → 라우트 핸들러에서 404로 변환합니다.
pub async fn get_category(pool: &SqlitePool, id: i64) -> Result<Option<Category>, AppError> {
    let category = sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(category)
}

/// 새 카테고리를 저장하고 부여된 ID를 반환합니다.
///
/// API로는 노출되지 않으며 초기 데이터 적재(seed)에 사용합니다.
pub async fn insert_category(pool: &SqlitePool, kind: &str) -> Result<i64, AppError> {
    let result = sqlx::query("INSERT INTO categories (type) VALUES (?)")
        .bind(kind)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

//! # 카테고리 API 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET /categories`                → `{ success, categories: {id: type} }`
//! - `GET /categories/{id}/questions` → 해당 카테고리의 문제 전체

use crate::{
    db,
    error::AppError,
    middleware::IdPath,
    models::category_map,
    routes::AppState,
};
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// 전체 카테고리를 `{id: type}` 매핑으로 반환합니다.
///
/// 카테고리가 하나도 없으면 404.
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let categories = category_map(db::list_categories(&state.pool).await?);
    if categories.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "categories": categories,
    })))
}

/// 카테고리 하나에 속한 문제를 모두 반환합니다.
///
/// `current_category`에는 카테고리의 표시 이름(type)이 들어갑니다.
pub async fn list_category_questions(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Value>, AppError> {
    // 카테고리가 없으면 404
    let category = db::get_category(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let questions = db::list_questions_by_category(&state.pool, id).await?;

    Ok(Json(json!({
        "success": true,
        "total_questions": questions.len(),
        "questions": questions,
        "current_category": category.kind,
    })))
}

#[cfg(test)]
mod tests {
    use crate::db::test_support::{memory_pool, CATEGORIES};
    use crate::routes::{router, test_support::*, AppState};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn lists_all_categories_keyed_by_id() {
        let (app, _) = seeded_app().await;
        let (status, body) = send(&app, "GET", "/categories", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["categories"].as_object().unwrap().len(), CATEGORIES.len());
        assert_eq!(body["categories"]["1"], "Science");
        assert_eq!(body["categories"]["6"], "Sports");
    }

    #[tokio::test]
    async fn empty_category_table_is_not_found() {
        let app = router(AppState { pool: memory_pool().await });
        let (status, body) = send(&app, "GET", "/categories", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn questions_by_category() {
        let (app, _) = seeded_app().await;
        let (status, body) = send(&app, "GET", "/categories/1/questions", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["current_category"], "Science");
        assert_eq!(body["total_questions"], 3);

        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q["category"] == json!(1)));
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let (app, _) = seeded_app().await;

        let (status, body) = send(&app, "GET", "/categories/9999/questions", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], 404);

        let (status, _) = send(&app, "GET", "/categories/science/questions", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

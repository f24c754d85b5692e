//! # 문제(Question) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET    /questions?page=N`  → 10개 단위 페이지 조회
//! - `POST   /questions`         → 본문에 `searchTerm`이 있으면 검색, 없으면 생성
//! - `POST   /questions/search`  → 위와 같은 핸들러
//! - `DELETE /questions/{id}`    → 문제 삭제

// ── 의존성 가져오기 ──
use crate::{
    db,                                       // 데이터베이스 쿼리 모듈
    error::AppError,                          // HTTP 에러 응답으로 변환되는 에러 타입
    middleware::{IdPath, JsonObject},         // 정수 경로 ID, JSON 객체 본문 추출자
    models::{category_map, NewQuestion},
    routes::AppState,                         // DB 풀을 담은 공유 상태
    services::{self, coerce, QUESTIONS_PER_PAGE},
};
use axum::{
    extract::{Query, State}, // 쿼리스트링, 앱 상태 추출
    http::StatusCode,        // 201 Created 응답용
    Json,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};

/// `?page=N` 쿼리 파라미터
///
/// 정수가 아닌 값도 거부하지 않도록 문자열로 받은 뒤 직접 해석합니다.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// `GET /questions?page=N`: ID 순으로 정렬된 문제의 N번째 페이지를 반환합니다.
///
/// 응답에는 전체 문제 수와 전체 카테고리 매핑이 함께 담깁니다.
/// 해당 페이지에 문제가 하나도 없으면 404.
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, AppError> {
    // 1 미만 페이지는 offset을 만들 수 없으므로 바로 404
    let page = services::parse_page(query.page.as_deref());
    let offset = services::page_offset(page).ok_or(AppError::NotFound)?;

    let questions = db::list_questions_page(&state.pool, QUESTIONS_PER_PAGE, offset).await?;
    if questions.is_empty() {
        return Err(AppError::NotFound);
    }

    // 페이지와 별개로 전체 개수와 카테고리 매핑을 함께 내려줍니다
    let total_questions = db::count_questions(&state.pool).await?;
    let categories = category_map(db::list_categories(&state.pool).await?);

    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": total_questions,
        "categories": categories,
        "current_category": null,
    })))
}

/// `POST /questions`: 검색 또는 생성
///
/// - 본문에 `searchTerm` 키가 있으면: 문제 본문 부분 일치 검색 (200)
/// - 없으면: 새 문제 생성 (201 `{ success, created: id }`)
pub async fn create_or_search_questions(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<(StatusCode, Json<Value>), AppError> {
    // ── 검색 모드 ──
    // 값이 null이어도 키가 있으면 검색입니다
    if let Some(term) = body.get("searchTerm") {
        // 검색어가 문자열이 아니어도 거부하지 않고 표시 문자열로 바꿔 검색합니다.
        let term = coerce::to_search_text(term);
        let questions = db::search_questions(&state.pool, &term).await?;

        return Ok((
            StatusCode::OK,
            Json(json!({
                "success": true,
                "total_questions": questions.len(),
                "questions": questions,
                "current_category": null,
            })),
        ));
    }

    // ── 생성 모드 ──
    let new_question = parse_new_question(&body)?; // 필드 누락 → 400, 변환 실패 → 422
    let id = db::insert_question(&state.pool, &new_question)
        .await
        // 외래키 위반 등 저장 실패는 이미 롤백된 상태로 돌아옵니다
        .map_err(|e| AppError::Unprocessable(format!("insert failed: {e}")))?;
    tracing::info!(id, category = new_question.category, "Created question");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "created": id,
        })),
    ))
}

/// 값이 있고 `accept`를 만족할 때만 꺼냅니다.
fn field<'a>(
    body: &'a Map<String, Value>,
    key: &str,
    accept: fn(&Value) -> bool,
) -> Option<&'a Value> {
    body.get(key).filter(|value| accept(value))
}

fn is_present(value: &Value) -> bool {
    !value.is_null()
}

/// 생성 요청 본문을 검증하여 `NewQuestion`으로 변환합니다.
///
/// - `question`, `answer`: 없거나 거짓(빈 문자열, 0 등)이면 400
/// - `category`, `difficulty`: 없거나 null이면 400
/// - 값은 있지만 정수/문자열로 바꿀 수 없으면 422
fn parse_new_question(body: &Map<String, Value>) -> Result<NewQuestion, AppError> {
    let (Some(question), Some(answer), Some(category), Some(difficulty)) = (
        field(body, "question", coerce::is_truthy),
        field(body, "answer", coerce::is_truthy),
        field(body, "category", is_present),
        field(body, "difficulty", is_present),
    ) else {
        return Err(AppError::BadRequest(
            "question, answer, category and difficulty are required".to_string(),
        ));
    };

    // 값은 있지만 정수/문자열로 바꿀 수 없는 경우의 에러
    let invalid = |name: &str| AppError::Unprocessable(format!("invalid {name}"));

    Ok(NewQuestion {
        question: coerce::to_text(question).ok_or_else(|| invalid("question"))?,
        answer: coerce::to_text(answer).ok_or_else(|| invalid("answer"))?,
        category: coerce::to_int(category).ok_or_else(|| invalid("category"))?,
        difficulty: coerce::to_int(difficulty).ok_or_else(|| invalid("difficulty"))?,
    })
}

/// `DELETE /questions/{id}`: 문제를 삭제합니다.
///
/// 없는 ID면 404, 삭제 쿼리 자체가 실패하면 롤백 후 422.
pub async fn delete_question(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Value>, AppError> {
    // 먼저 존재 여부를 확인해서, 없는 ID는 422가 아닌 404로 응답합니다
    db::get_question(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let deleted = db::delete_question(&state.pool, id)
        .await
        // 삭제 쿼리 실패(트리거, 잠금 등)는 롤백된 뒤 422
        .map_err(|e| AppError::Unprocessable(format!("delete failed: {e}")))?;
    // 조회와 삭제 사이에 다른 요청이 먼저 지운 경우
    if !deleted {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "deleted": id,
    })))
}

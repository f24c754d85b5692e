//! # 퀴즈 API 라우트 핸들러
//!
//! `POST /quizzes` + `{ "previous_questions": [..], "quiz_category": { "id": .. } }`
//! → 아직 출제되지 않은 문제 하나 (`question: null`이면 남은 문제 없음)

use crate::{
    db,
    error::AppError,
    middleware::JsonObject,
    routes::AppState,
    services::{self, QuizRequest},
};
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// 남은 후보 중 하나를 무작위로 골라 반환합니다.
///
/// 반복 출제를 막는 것은 클라이언트가 보내는 `previous_questions`뿐입니다.
pub async fn play_quiz(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<Json<Value>, AppError> {
    // ── 요청 해석 ── (잘못된 값은 거부하지 않고 "전체"/"제외 없음"으로 해석)
    let request = QuizRequest::from_body(&body);

    // ── 후보 조회 ──
    let candidates =
        db::list_quiz_candidates(&state.pool, request.category, &request.previous_questions)
            .await?;
    tracing::debug!(
        category = ?request.category,
        excluded = request.previous_questions.len(),
        remaining = candidates.len(),
        "Picking quiz question"
    );

    // ── 무작위 선택 ──
    // ThreadRng는 Send가 아니므로 await 지점을 넘기지 않도록 이 문장 안에서만 씁니다.
    let question = services::pick_question(candidates, &mut rand::thread_rng());

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}

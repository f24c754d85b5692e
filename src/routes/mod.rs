//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터 구성을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `categories`: 카테고리 목록, 카테고리별 문제
//! - `questions`: 문제 페이지 조회, 생성/검색, 삭제
//! - `quizzes`: 퀴즈 출제
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | GET | /categories | `list_categories` |
//! | GET | /categories/{id}/questions | `list_category_questions` |
//! | GET | /questions?page=N | `list_questions` |
//! | POST | /questions, /questions/search | `create_or_search_questions` |
//! | DELETE | /questions/{id} | `delete_question` |
//! | POST | /quizzes | `play_quiz` |

pub mod categories;
pub mod questions;
pub mod quizzes;

pub use categories::*;
pub use questions::*;
pub use quizzes::*;

use crate::error::AppError;
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{delete, get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// SqlitePool은 내부적으로 Arc이므로 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// API 라우터를 구성합니다.
///
/// 매칭되는 라우트가 없으면 404 JSON 봉투를 반환합니다.
pub fn router(state: AppState) -> Router {
    // 모든 출처(origin)를 허용하되, 메서드와 헤더는 API가 쓰는 것만 엽니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(list_category_questions))
        .route(
            "/questions",
            get(list_questions).post(create_or_search_questions),
        )
        // 프론트엔드가 검색 전용 경로를 쓰는 경우를 위해 같은 핸들러를 한 번 더 연결합니다.
        .route("/questions/search", post(create_or_search_questions))
        .route("/questions/{id}", delete(delete_question))
        .route("/quizzes", post(play_quiz))
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> AppError {
    AppError::NotFound
}

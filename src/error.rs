//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 고정된 JSON 봉투(envelope)로 변환
//!
//! ```json
//! { "success": false, "error": 404, "message": "resource not found" }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
/// variant에 담긴 문자열은 로그용이며 클라이언트에는 노출되지 않습니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 필수 필드 누락, 잘못된 JSON 등 (HTTP 400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    #[error("Resource not found")]
    NotFound,

    /// 저장 계층에서 변경 작업이 실패함 (HTTP 422)
    /// 트랜잭션은 이미 롤백된 상태입니다.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// 분류되지 않은 데이터베이스 오류 (HTTP 500)
    /// #[from]: `?` 연산자로 sqlx::Error를 AppError로 자동 변환합니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// 에러 종류에 대응하는 HTTP 상태 코드와 고정 메시지
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad request"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "resource not found"),
            AppError::Unprocessable(_) => (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 내부 에러 내용은 로그에만 남깁니다.
        match &self {
            AppError::Database(e) => tracing::error!("Database error: {}", e),
            AppError::Unprocessable(msg) => tracing::warn!("Unprocessable: {}", msg),
            AppError::BadRequest(msg) => tracing::debug!("Bad request: {}", msg),
            AppError::NotFound => {}
        }

        let (status, message) = self.status_and_message();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        }));

        (status, body).into_response()
    }
}

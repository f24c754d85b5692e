//! # 요청 추출자(Extractor)
//!
//! 핸들러 매개변수로 쓰는 커스텀 추출자입니다.
//! 추출에 실패하면 axum 기본 거부(rejection) 응답 대신
//! `AppError`의 JSON 봉투로 응답합니다.
//!
//! - `JsonObject`: 요청 본문을 JSON 객체로 파싱
//! - `IdPath`: URL 경로의 정수 ID

use crate::error::AppError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde_json::{Map, Value};

/// 요청 본문 JSON 객체
///
/// - 본문이 없거나(Content-Type 없음) `null`이면 빈 객체
/// - 문법이 틀린 JSON, 객체가 아닌 JSON → 400
#[derive(Debug, Clone, Default)]
pub struct JsonObject(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(Value::Object(map))) => Ok(JsonObject(map)),
            Ok(Json(Value::Null)) => Ok(JsonObject::default()),
            Ok(Json(other)) => Err(AppError::BadRequest(format!(
                "expected a JSON object, got {}",
                other
            ))),
            Err(JsonRejection::MissingJsonContentType(_)) => Ok(JsonObject::default()),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// URL 경로의 정수 ID (`/questions/{id}` 등)
///
/// 정수가 아닌 경로는 존재하지 않는 라우트로 보고 404를 반환합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;
        Ok(IdPath(id))
    }
}

//! # 서비스 모듈
//!
//! DB나 HTTP에 의존하지 않는 순수 로직을 모아둔 모듈입니다.
//! - `coerce`: 느슨한 JSON 값을 정수/문자열로 변환
//! - `pagination`: 페이지 번호 해석과 OFFSET 계산
//! - `quiz`: 퀴즈 요청 해석과 무작위 출제

pub mod coerce;
pub mod pagination;
pub mod quiz;

pub use pagination::*;
pub use quiz::*;

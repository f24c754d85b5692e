//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `category`: 카테고리(Category)와 `{id: type}` 매핑
//! - `question`: 문제(Question)와 새 문제 입력(NewQuestion)

pub mod category;
pub mod question;

// `crate::models::Question`처럼 짧게 쓸 수 있도록 재공개합니다.
pub use category::*;
pub use question::*;

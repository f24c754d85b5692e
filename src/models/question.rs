//! # 문제(Question) 모델 정의
//!
//! 트리비아 문제 한 건과, 새 문제를 만들 때 쓰는 입력 구조체를 정의합니다.

use serde::{Deserialize, Serialize};

/// 문제 엔티티: DB의 `questions` 테이블 한 행(row)에 대응합니다.
///
/// API 응답에서도 이 구조체를 그대로 JSON으로 직렬화합니다:
/// `{ "id", "question", "answer", "category", "difficulty" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    /// 자동 증가 정수 ID
    pub id: i64,
    /// 문제 본문
    pub question: String,
    /// 정답
    pub answer: String,
    /// 소속 카테고리 ID (`categories.id` 외래키)
    pub category: i64,
    /// 난이도
    pub difficulty: i64,
}

/// 새 문제 입력: `POST /questions`(생성 모드)의 본문을 검증한 결과입니다.
///
/// ID는 DB가 부여하므로 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

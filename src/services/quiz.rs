//! # 퀴즈 출제 서비스
//!
//! `POST /quizzes` 요청 본문을 해석하고, 남은 후보 중 하나를 무작위로 고릅니다.

use crate::models::Question;
use crate::services::coerce;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{Map, Value};

/// 해석된 퀴즈 요청
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizRequest {
    /// 이미 출제된 문제 ID (제외 대상)
    pub previous_questions: Vec<i64>,
    /// None이면 전체 카테고리
    pub category: Option<i64>,
}

impl QuizRequest {
    /// JSON 본문에서 퀴즈 요청을 만듭니다. 이 변환은 실패하지 않습니다.
    ///
    /// - `previous_questions`: 정수로 바꿀 수 없는 항목은 건너뜀, null/누락은 빈 목록
    /// - `quiz_category.id`: 0, 누락, 변환 불가는 모두 "전체 카테고리"
    pub fn from_body(body: &Map<String, Value>) -> Self {
        let mut previous_questions: Vec<i64> = match body.get("previous_questions") {
            Some(Value::Array(ids)) => ids.iter().filter_map(coerce::to_int).collect(),
            _ => Vec::new(),
        };
        previous_questions.sort_unstable();
        previous_questions.dedup();

        let category = body
            .get("quiz_category")
            .and_then(Value::as_object)
            .and_then(|c| c.get("id"))
            .and_then(coerce::to_int)
            .filter(|id| *id != 0);

        Self {
            previous_questions,
            category,
        }
    }
}

/// 후보 중 하나를 균등한 확률로 고릅니다. 후보가 없으면 None.
pub fn pick_question<R: Rng + ?Sized>(candidates: Vec<Question>, rng: &mut R) -> Option<Question> {
    candidates.choose(rng).cloned()
}

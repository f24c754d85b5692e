//! # 카테고리(Category) 모델 정의

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 카테고리 엔티티: DB의 `categories` 테이블 한 행에 대응합니다.
///
/// `type`은 Rust 예약어라서 필드 이름은 `kind`로 두고,
/// DB 컬럼과 JSON 키는 `rename`으로 `type`에 맞춥니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// 카테고리 ID → 표시 이름 매핑.
///
/// BTreeMap은 키 순서대로 정렬되므로 ID 오름차순이 유지되고,
/// serde_json은 정수 키를 문자열 키(`"1"`)로 직렬화합니다.
pub type CategoryMap = BTreeMap<i64, String>;

/// 카테고리 목록을 `{id: type}` 매핑으로 변환합니다.
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

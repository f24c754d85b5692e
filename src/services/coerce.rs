//! # JSON 값 변환 유틸리티
//!
//! 클라이언트가 보내는 JSON 본문은 타입이 느슨합니다.
//! (`"category": "3"`처럼 숫자를 문자열로 보내는 경우 등)
//! 이 모듈은 그런 값을 정수/문자열로 관대하게 변환하는 함수들을 제공합니다.
//!
//! - `is_truthy()`: 값이 "비어 있지 않은지" 판정
//! - `to_int()`: 정수로 변환
//! - `to_text()`: 문자열로 변환

use serde_json::Value;

/// 값이 참(truthy)인지 판정합니다.
///
/// 거짓으로 보는 값: `null`, `false`, `0`, `0.0`, `""`, `[]`, `{}`
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        // 0과 0.0만 거짓, 나머지 숫자는 모두 참
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// 값을 정수로 변환합니다. 변환할 수 없으면 None.
///
/// - 정수: 그대로
/// - 실수: 소수점 이하 버림 (유한한 값만)
/// - 불리언: `true` → 1, `false` → 0
/// - 문자열: 앞뒤 공백을 제거한 뒤 정수로 파싱 (`"3.5"`는 실패)
pub fn to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            // i64 범위를 넘는 실수, NaN/무한대는 변환 실패
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => s.trim().parse().ok(),
        // null, 배열, 객체
        _ => None,
    }
}

/// 값을 저장할 문자열로 변환합니다.
///
/// 문자열은 그대로, 숫자는 십진수 표기로 변환하고, 나머지는 None.
pub fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 검색어로 쓸 문자열을 만듭니다. 어떤 값이든 문자열이 됩니다.
///
/// | 값 | 결과 |
/// |----|------|
/// | 문자열 | 그대로 |
/// | `null` | `"None"` |
/// | `true` / `false` | `"True"` / `"False"` |
/// | 숫자 | 십진수 표기 |
/// | 배열, 객체 | JSON 텍스트 |
pub fn to_search_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        // 숫자는 십진수, 배열/객체는 직렬화한 JSON 텍스트
        other => other.to_string(),
    }
}

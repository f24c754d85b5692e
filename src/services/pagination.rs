//! # 페이지 나눔(Pagination)

/// 한 페이지에 담는 문제 수
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// `?page=` 쿼리 값을 페이지 번호로 해석합니다.
///
/// 값이 없거나 정수가 아니면 1페이지로 봅니다.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|p| p.trim().parse().ok()).unwrap_or(1)
}

/// 1부터 시작하는 페이지 번호를 SQL `OFFSET` 값으로 바꿉니다.
///
/// 1보다 작거나 계산이 넘치는 페이지는 범위 밖이므로 None.
pub fn page_offset(page: i64) -> Option<i64> {
    if page < 1 {
        return None;
    }
    (page - 1).checked_mul(QUESTIONS_PER_PAGE)
}

//! # 문제 데이터베이스 쿼리 모듈
//!
//! `questions` 테이블의 조회 함수와, 한 행씩 커밋하는 변경 함수들입니다.
//!
//! ## 변경 함수의 트랜잭션
//! `insert_question` / `update_question` / `delete_question`은 각자 트랜잭션을 열고
//! 성공하면 바로 커밋합니다. 실패하면 명시적으로 롤백한 뒤 에러를 돌려주므로
//! 같은 연결을 다음 요청에서도 그대로 쓸 수 있습니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::collections::HashSet;

/// 변경 결과에 따라 트랜잭션을 커밋하거나 롤백합니다.
async fn finish<T>(
    tx: Transaction<'_, Sqlite>,
    result: Result<T, sqlx::Error>,
) -> Result<T, AppError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!("Rollback failed: {}", rollback);
            }
            Err(e.into())
        }
    }
}

/// 전체 문제 수
pub async fn count_questions(pool: &SqlitePool) -> Result<i64, AppError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// ID 순으로 정렬한 문제 중 `offset`번째부터 `limit`개를 조회합니다.
pub async fn list_questions_page(
    pool: &SqlitePool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Question>, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        ORDER BY id
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(questions)
}

/// ID로 문제 하나를 조회합니다.
pub async fn get_question(pool: &SqlitePool, id: i64) -> Result<Option<Question>, AppError> {
    let question = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(question)
}

/// 특정 카테고리에 속한 문제를 ID 순으로 모두 조회합니다.
pub async fn list_questions_by_category(
    pool: &SqlitePool,
    category_id: i64,
) -> Result<Vec<Question>, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE category = ?
        ORDER BY id
        "#,
    )
    .bind(category_id)
    .fetch_all(pool)
    .await?;

    Ok(questions)
}

/// 문제 본문에 `term`이 포함된 문제를 대소문자 구분 없이 찾습니다.
///
/// SQLite의 `LIKE`/`lower()`는 ASCII 범위에서만 대소문자를 접으므로
/// (`É`와 `é`를 다른 글자로 봄) 비교는 Rust의 유니코드 `to_lowercase()`로 합니다.
/// `%`, `_` 같은 글자도 패턴이 아닌 글자 그대로 비교됩니다.
///
/// 결과는 페이지 나눔 없이 ID 순으로 모두 반환합니다.
pub async fn search_questions(pool: &SqlitePool, term: &str) -> Result<Vec<Question>, AppError> {
    let needle = term.to_lowercase();

    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(questions
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect())
}

/// 퀴즈 후보 문제를 조회합니다.
///
/// - `category`: Some이면 해당 카테고리로 제한, None이면 전체
/// - `exclude`: 이미 출제된 문제 ID 목록
///
/// 제외 목록은 클라이언트가 보내는 만큼 길어질 수 있어서 SQL 바인딩 변수로 넘기지 않고
/// (SQLite는 한 쿼리의 `?` 개수에 상한이 있음) 조회한 뒤 `HashSet`으로 걸러냅니다.
pub async fn list_quiz_candidates(
    pool: &SqlitePool,
    category: Option<i64>,
    exclude: &[i64],
) -> Result<Vec<Question>, AppError> {
    let mut sql = String::from(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE 1 = 1",
    );
    if category.is_some() {
        sql.push_str(" AND category = ?");
    }
    sql.push_str(" ORDER BY id");

    let mut query = sqlx::query_as::<_, Question>(&sql);
    if let Some(category) = category {
        query = query.bind(category);
    }
    let questions = query.fetch_all(pool).await?;

    let excluded: HashSet<i64> = exclude.iter().copied().collect();
    Ok(questions
        .into_iter()
        .filter(|q| !excluded.contains(&q.id))
        .collect())
}

/// 새 문제를 저장하고 부여된 ID를 반환합니다.
///
/// 카테고리 외래키 위반 등으로 실패하면 롤백 후 에러를 반환합니다.
pub async fn insert_question(pool: &SqlitePool, new: &NewQuestion) -> Result<i64, AppError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
    )
    .bind(&new.question)
    .bind(&new.answer)
    .bind(new.category)
    .bind(new.difficulty)
    .execute(&mut *tx)
    .await
    .map(|done| done.last_insert_rowid());

    finish(tx, result).await
}

/// 기존 문제의 모든 필드를 덮어씁니다.
///
/// 현재 이 함수를 호출하는 라우트는 없습니다.
///
/// ## 반환값
/// - `true`: 수정됨
/// - `false`: 해당 ID의 문제가 없음
pub async fn update_question(pool: &SqlitePool, question: &Question) -> Result<bool, AppError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE questions
        SET question = ?, answer = ?, category = ?, difficulty = ?
        WHERE id = ?
        "#,
    )
    .bind(&question.question)
    .bind(&question.answer)
    .bind(question.category)
    .bind(question.difficulty)
    .bind(question.id)
    .execute(&mut *tx)
    .await
    .map(|done| done.rows_affected() > 0);

    finish(tx, result).await
}

/// ID로 문제를 삭제합니다.
///
/// ## 반환값
/// - `true`: 삭제 성공
/// - `false`: 해당 ID의 문제가 없어 삭제된 행이 없음
pub async fn delete_question(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM questions WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map(|done| done.rows_affected() > 0);

    finish(tx, result).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{seeded_pool, QUESTIONS};

    fn new_question(category: i64) -> NewQuestion {
        NewQuestion {
            question: "What is 2 + 2?".into(),
            answer: "4".into(),
            category,
            difficulty: 1,
        }
    }

    #[tokio::test]
    async fn pages_follow_id_order() {
        let pool = seeded_pool().await;

        let first = list_questions_page(&pool, 10, 0).await.unwrap();
        let second = list_questions_page(&pool, 10, 10).await.unwrap();

        assert_eq!(first.len(), 10);
        assert_eq!(second.len(), QUESTIONS.len() - 10);
        assert!(first.last().unwrap().id < second[0].id);
        assert_eq!(count_questions(&pool).await.unwrap(), QUESTIONS.len() as i64);
    }

    #[tokio::test]
    async fn insert_then_get() {
        let pool = seeded_pool().await;
        let id = insert_question(&pool, &new_question(1)).await.unwrap();

        let stored = get_question(&pool, id).await.unwrap().unwrap();
        assert_eq!(stored.question, "What is 2 + 2?");
        assert_eq!(stored.category, 1);
    }

    #[tokio::test]
    async fn insert_with_unknown_category_fails_and_leaves_pool_usable() {
        let pool = seeded_pool().await;

        assert!(insert_question(&pool, &new_question(999)).await.is_err());
        // 롤백 후에도 같은 연결로 다음 작업이 가능해야 합니다
        assert_eq!(count_questions(&pool).await.unwrap(), QUESTIONS.len() as i64);
        assert!(insert_question(&pool, &new_question(2)).await.is_ok());
    }

    #[tokio::test]
    async fn update_rewrites_all_fields() {
        let pool = seeded_pool().await;
        let mut question = get_question(&pool, 1).await.unwrap().unwrap();
        question.answer = "U".into();
        question.difficulty = 5;

        assert!(update_question(&pool, &question).await.unwrap());
        assert_eq!(get_question(&pool, 1).await.unwrap(), Some(question.clone()));

        question.id = 10_000;
        assert!(!update_question(&pool, &question).await.unwrap());
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let pool = seeded_pool().await;

        assert!(delete_question(&pool, 3).await.unwrap());
        assert_eq!(get_question(&pool, 3).await.unwrap(), None);
        assert!(!delete_question(&pool, 3).await.unwrap());
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let pool = seeded_pool().await;

        let hits = search_questions(&pool, "CAPITAL").await.unwrap();
        let ids: Vec<i64> = hits.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![3, 11]);

        assert!(search_questions(&pool, "no such words").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_treats_wildcards_literally() {
        let pool = seeded_pool().await;

        assert!(search_questions(&pool, "%").await.unwrap().is_empty());
        assert!(search_questions(&pool, "_").await.unwrap().is_empty());
        assert_eq!(search_questions(&pool, "").await.unwrap().len(), QUESTIONS.len());
    }

    #[tokio::test]
    async fn search_folds_non_ascii_case() {
        let pool = seeded_pool().await;
        let id = insert_question(
            &pool,
            &NewQuestion {
                question: "Où est l'ÉCOLE?".into(),
                answer: "Ici".into(),
                category: 3,
                difficulty: 1,
            },
        )
        .await
        .unwrap();

        for term in ["école", "ÉCOLE", "OÙ EST"] {
            let hits = search_questions(&pool, term).await.unwrap();
            let ids: Vec<i64> = hits.iter().map(|q| q.id).collect();
            assert_eq!(ids, vec![id], "term {term:?}");
        }
    }

    #[tokio::test]
    async fn by_category_returns_only_that_category() {
        let pool = seeded_pool().await;
        let questions = list_questions_by_category(&pool, 3).await.unwrap();

        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.category == 3));
    }

    #[tokio::test]
    async fn quiz_candidates_apply_category_and_exclusions() {
        let pool = seeded_pool().await;

        let all = list_quiz_candidates(&pool, None, &[]).await.unwrap();
        assert_eq!(all.len(), QUESTIONS.len());

        let science = list_quiz_candidates(&pool, Some(1), &[1, 7]).await.unwrap();
        let ids: Vec<i64> = science.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![8]);

        let none_left = list_quiz_candidates(&pool, Some(1), &[1, 7, 8]).await.unwrap();
        assert!(none_left.is_empty());
    }

    #[tokio::test]
    async fn quiz_candidates_accept_more_exclusions_than_sql_variables() {
        let pool = seeded_pool().await;

        // 존재하지 않는 ID가 대부분인 아주 긴 목록 (SQLite 변수 상한 32766 초과)
        let mut exclude: Vec<i64> = (100..40_000).collect();
        exclude.extend([1, 2, 3]);

        let remaining = list_quiz_candidates(&pool, None, &exclude).await.unwrap();
        assert_eq!(remaining.len(), QUESTIONS.len() - 3);
        assert!(remaining.iter().all(|q| q.id > 3));
    }
}

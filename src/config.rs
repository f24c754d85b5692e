//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `TESTING`: `1`/`true`이면 테스트용 데이터베이스를 사용
//! - `DATABASE_URL`: 일반 실행용 SQLite 데이터베이스 URL
//! - `DATABASE_URL_TEST`: 테스트 실행용 SQLite 데이터베이스 URL
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호

use std::env;
use thiserror::Error;

/// 일반 실행 시 읽는 데이터베이스 URL 환경변수
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// 테스트 실행 시 읽는 데이터베이스 URL 환경변수
pub const DATABASE_URL_TEST_VAR: &str = "DATABASE_URL_TEST";

/// 설정 로딩 실패
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 선택된 데이터베이스 URL 환경변수가 비어 있거나 없음
    #[error("No database URL set. Define {0} (DATABASE_URL, and DATABASE_URL_TEST for tests)")]
    MissingDatabaseUrl(&'static str),
}

/// 애플리케이션 전체 설정을 담는 구조체
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 실제로 연결할 데이터베이스 URL (예: "sqlite:data/trivia.db?mode=rwc")
    pub database_url: String,
    /// 테스트 모드 여부 (어떤 URL을 골랐는지 로그에 남길 때 사용)
    pub testing: bool,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 3000)
    pub port: u16,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// 선택된 데이터베이스 URL이 없으면 `ConfigError::MissingDatabaseUrl`.
    /// 나머지 설정은 기본값이 있어 환경변수가 없어도 동작합니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 만듭니다. (테스트에서 환경변수 대신 사용)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let testing = lookup("TESTING")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let url_var = if testing {
            DATABASE_URL_TEST_VAR
        } else {
            DATABASE_URL_VAR
        };
        let database_url = lookup(url_var)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl(url_var))?;

        Ok(Self {
            database_url,
            testing,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            // 파싱 실패 시 기본값 3000 사용
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn uses_database_url_by_default() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite:trivia.db"),
            ("DATABASE_URL_TEST", "sqlite::memory:"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite:trivia.db");
        assert!(!config.testing);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn testing_selects_the_test_database() {
        let config = Config::from_lookup(lookup_from(&[
            ("TESTING", "true"),
            ("DATABASE_URL", "sqlite:trivia.db"),
            ("DATABASE_URL_TEST", "sqlite::memory:"),
            ("PORT", "5000"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert!(config.testing);
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn missing_url_is_an_error() {
        assert_eq!(
            Config::from_lookup(lookup_from(&[])),
            Err(ConfigError::MissingDatabaseUrl("DATABASE_URL"))
        );
        assert_eq!(
            Config::from_lookup(lookup_from(&[("TESTING", "1"), ("DATABASE_URL", "sqlite:x.db")])),
            Err(ConfigError::MissingDatabaseUrl("DATABASE_URL_TEST"))
        );
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite:trivia.db"),
            ("PORT", "not-a-port"),
        ]))
        .unwrap();
        assert_eq!(config.port, 3000);
    }
}

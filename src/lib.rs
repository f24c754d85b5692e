//! # Trivia API
//!
//! 트리비아 문제와 카테고리를 제공하는 REST 백엔드입니다.
//! 실행 파일(`main.rs`)과 테스트가 같은 라우터와 DB 계층을 쓰도록
//! 모듈을 라이브러리로 묶어 둡니다.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

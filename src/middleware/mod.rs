//! # 미들웨어 / 추출자 모듈

pub mod extract;

pub use extract::*;

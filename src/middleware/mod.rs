//! # 미들웨어 모듈
//!
//! - `auth`: `X-API-KEY` 헤더 기반 공유 비밀키(shared secret) 인증

pub mod auth;

//! # 서비스(비즈니스 로직) 계층
//!
//! - `categories`: 검증 + 트랜잭션 + not-found 변환
//! - `validation`: validator 크레이트 어댑터

pub mod categories;
pub mod validation;

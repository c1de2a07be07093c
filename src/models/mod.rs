//! # 데이터 모델 모듈
//!
//! - `category`: 카테고리 엔티티와 요청 본문 구조체
//! - `response`: 모든 응답을 감싸는 `{code, status, data}` 봉투

pub mod category;
pub mod response;

pub use category::*;
pub use response::*;

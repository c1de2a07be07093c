//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과, 핸들러가 공유하는 상태·추출자를 정의합니다.
//!
//! 각 하위 모듈:
//! - `categories`: 카테고리 CRUD 핸들러
//! - `health`: 서버 상태 확인 (헬스체크)

pub mod categories;
pub mod health;

pub use categories::*;
pub use health::*;

use crate::{
    error::{AppError, NotFoundError},
    models::WebResponse,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts,
    },
    http::StatusCode,
};
use sqlx::SqlitePool;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// `SqlitePool`은 내부적으로 Arc이므로 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀 (요청 사이에 공유되는 유일한 자원)
    pub pool: SqlitePool,
    /// `X-API-KEY` 헤더와 비교할 비밀키
    pub api_key: String,
}

/// `axum::Json`과 같지만, 파싱 실패를 `AppError`로 돌려줍니다.
///
/// 기본 `Json` 추출자는 실패 시 일반 텍스트 응답을 보내므로,
/// 봉투 형식을 유지하려고 rejection 타입을 바꿉니다.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path`와 같지만, 파싱 실패(예: `/categories/abc`)를 `AppError`로 돌려줍니다.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Malformed(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Malformed(rejection.body_text())
    }
}

/// 어떤 라우트에도 맞지 않는 요청 → 404 봉투
pub async fn fallback() -> AppError {
    NotFoundError::new("route is not found").into()
}

/// 경로는 있지만 메서드가 맞지 않는 요청 (예: `PATCH /api/categories/1`) → 405 봉투
///
/// axum 기본값은 본문 없는 405이므로, 다른 응답과 같은 봉투 형식으로 바꿉니다.
pub async fn method_not_allowed() -> WebResponse<&'static str> {
    WebResponse::new(StatusCode::METHOD_NOT_ALLOWED, "method is not allowed")
}

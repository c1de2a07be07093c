use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::models::WebResponse;
use crate::routes::AppState;

// 클라이언트는 `X-API-KEY`로 보내도 됩니다. 헤더 이름은 대소문자를 구분하지 않습니다.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    MissingKey,
    InvalidKey,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        // 401 봉투에는 data가 없으므로 null로 내려갑니다.
        WebResponse::new(StatusCode::UNAUTHORIZED, ()).into_response()
    }
}

/// `X-API-KEY` 헤더를 설정된 키와 비교하는 미들웨어.
/// 일치하지 않으면 라우터를 호출하지 않고 바로 401을 반환한다.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    if let Err(e) = check_api_key(request.headers(), &state.api_key) {
        tracing::warn!(
            method = %request.method(),
            uri = %request.uri(),
            "Rejected request: {:?}",
            e
        );
        return Err(e);
    }

    Ok(next.run(request).await)
}

pub fn check_api_key(headers: &HeaderMap, expected: &str) -> Result<(), AuthError> {
    let provided = headers
        .get(API_KEY_HEADER)
        .ok_or(AuthError::MissingKey)?;

    // 상수 시간 비교 (길이가 다르면 바로 false)
    if bool::from(provided.as_bytes().ct_eq(expected.as_bytes())) {
        Ok(())
    } else {
        Err(AuthError::InvalidKey)
    }
}

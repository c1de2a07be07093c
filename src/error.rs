//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러를 하나의 `AppError`로 모으고,
//! 이를 `{code, status, data}` 봉투 응답으로 변환하는 **분류기(classifier)**를 정의합니다.
//!
//! 모든 계층(db → services → routes)은 `Result<T, AppError>`를 반환하고
//! `?` 연산자로 에러를 위로 전파하기만 합니다. 중간 계층은 에러를 잡거나
//! 다시 분류하지 않으며, 분류는 응답 직전 `IntoResponse` 구현에서 딱 한 번 일어납니다.
//!
//! ## 세 가지 분류
//! | 분류 | HTTP | status | data |
//! |------|------|--------|------|
//! | `NotFound` | 404 | `NOT FOUND` | 에러 메시지 |
//! | `Validation` | 400 | `BAD REQUEST` | 검증 에러 설명 문자열 |
//! | `Unclassified` | 500 | `INTERNAL SERVER ERROR` | 에러 내용 |

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::{response::emit, WebResponse};

/// 요청한 엔티티가 존재하지 않음을 나타내는 에러
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct NotFoundError {
    pub message: String,
}

impl NotFoundError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 에러의 분류. 분류기는 이 값만 보고 응답 형태를 결정합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Unclassified,
}

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 각 variant는 실제 원인(source)을 담고, `kind()`로 세 가지 분류 중 하나에 대응됩니다.
///
/// `#[derive(Error)]` (thiserror):
/// - `#[error("...")]`: Display 구현 (응답의 `data`에 들어가는 문자열)
/// - `#[from]`: `From` 구현 생성 → `?`가 원래 에러를 AppError로 자동 변환
#[derive(Debug, Error)]
pub enum AppError {
    /// 조회 대상이 없음 (HTTP 404)
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// 필드 검증 실패 (HTTP 400)
    /// `services::validation`만 이 variant를 만듭니다.
    #[error("{}", render_validation_errors(.0))]
    Validation(#[from] ValidationErrors),

    /// 요청 본문이나 경로 파라미터를 파싱할 수 없음 (HTTP 400)
    #[error("{0}")]
    Malformed(String),

    /// 데이터베이스 오류 (HTTP 500)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 그 밖의 서버 내부 오류 (HTTP 500)
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        // match는 모든 variant를 다뤄야 컴파일됩니다.
        // variant를 추가하면 여기서 분류를 정하도록 컴파일러가 알려 줍니다.
        match self {
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Validation(_) | AppError::Malformed(_) => ErrorKind::Validation,
            AppError::Database(_) | AppError::Internal(_) => ErrorKind::Unclassified,
        }
    }
}

/// 검증 에러를 사람이 읽을 수 있는 문자열로 만듭니다.
///
/// 위반 하나당 한 줄이며, 필드 이름 오름차순으로 정렬됩니다.
/// 예: `Field validation for 'name' failed on the 'required' tag`
pub fn render_validation_errors(errors: &ValidationErrors) -> String {
    // field_errors()는 HashMap이라 순서가 없으므로 이름순으로 정렬
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(field, violations)| {
            violations.iter().map(move |violation| {
                format!(
                    "Field validation for '{}' failed on the '{}' tag",
                    field, violation.code
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl IntoResponse for AppError {
    /// AppError를 봉투 응답으로 변환합니다.
    ///
    /// 분류 순서는 NotFound → Validation → 나머지이며, 처음 일치하는 분류가 적용됩니다.
    /// 응답은 `emit()`을 통해 정확히 한 번 작성됩니다.
    fn into_response(self) -> Response {
        match self.kind() {
            ErrorKind::NotFound => {
                let envelope = WebResponse::new(StatusCode::NOT_FOUND, self.to_string());
                emit(StatusCode::NOT_FOUND, &envelope)
            }
            ErrorKind::Validation => {
                let envelope = WebResponse::new(StatusCode::BAD_REQUEST, self.to_string());
                emit(StatusCode::BAD_REQUEST, &envelope)
            }
            ErrorKind::Unclassified => {
                // 분류되지 않은 에러는 원인을 서버 로그에 남깁니다.
                tracing::error!("Unclassified error: {:?}", self);
                let envelope =
                    WebResponse::new(StatusCode::INTERNAL_SERVER_ERROR, self.to_string());
                emit(StatusCode::INTERNAL_SERVER_ERROR, &envelope)
            }
        }
    }
}

/// `CatchPanicLayer`의 panic 처리기
///
/// 핸들러 안에서 panic이 일어나면 payload를 꺼내 `AppError`로 바꾼 뒤
/// 일반 에러와 같은 분류기로 응답을 만듭니다.
/// - `AppError` payload: 원래 분류를 그대로 유지
/// - `&str` / `String` payload: 메시지를 담은 `Internal`
/// - 그 외: 일반 메시지를 담은 `Internal`
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    // downcast: Box<dyn Any>가 실제로 AppError인지 확인하고 꺼냅니다.
    // 실패하면 원래 Box를 Err로 돌려주므로 다음 타입을 시도할 수 있습니다.
    let error = match payload.downcast::<AppError>() {
        Ok(error) => *error,
        Err(payload) => {
            if let Some(message) = payload.downcast_ref::<&str>() {
                AppError::Internal((*message).to_string())
            } else if let Some(message) = payload.downcast_ref::<String>() {
                AppError::Internal(message.clone())
            } else {
                AppError::Internal("handler panicked".to_string())
            }
        }
    };

    error.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;
    use validator::ValidationError;

    async fn body_json(response: Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn name_required() -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("required"));
        errors
    }

    #[test]
    fn kinds_cover_every_variant() {
        assert_eq!(
            AppError::from(NotFoundError::new("x")).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(AppError::from(name_required()).kind(), ErrorKind::Validation);
        assert_eq!(
            AppError::Malformed("bad json".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            AppError::from(sqlx::Error::RowNotFound).kind(),
            ErrorKind::Unclassified
        );
        assert_eq!(
            AppError::Internal("boom".into()).kind(),
            ErrorKind::Unclassified
        );
    }

    #[tokio::test]
    async fn not_found_becomes_404_envelope() {
        let response = AppError::from(NotFoundError::new("category is not found")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["code"], 404);
        assert_eq!(body["status"], "NOT FOUND");
        assert_eq!(body["data"], "category is not found");
    }

    #[tokio::test]
    async fn validation_becomes_400_envelope() {
        let response = AppError::from(name_required()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["code"], 400);
        assert_eq!(body["status"], "BAD REQUEST");
        assert_eq!(
            body["data"],
            "Field validation for 'name' failed on the 'required' tag"
        );
    }

    #[tokio::test]
    async fn unclassified_becomes_500_envelope() {
        let response = AppError::Internal("connection reset".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["code"], 500);
        assert_eq!(body["status"], "INTERNAL SERVER ERROR");
        assert_eq!(body["data"], "connection reset");
    }

    #[test]
    fn validation_lines_are_sorted_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("required"));
        errors.add("alias", ValidationError::new("length"));

        assert_eq!(
            render_validation_errors(&errors),
            "Field validation for 'alias' failed on the 'length' tag\n\
             Field validation for 'name' failed on the 'required' tag"
        );
    }

    #[tokio::test]
    async fn panic_with_app_error_keeps_its_kind() {
        let payload: Box<dyn Any + Send> =
            Box::new(AppError::from(NotFoundError::new("category is not found")));
        let response = handle_panic(payload);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn panic_with_message_is_unclassified() {
        let response = handle_panic(Box::new("index out of bounds"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["data"], "index out of bounds");

        let response = handle_panic(Box::new(42_u8));
        assert_eq!(body_json(response).await["data"], "handler panicked");
    }
}

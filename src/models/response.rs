//! # 응답 봉투(Envelope) 모델
//!
//! 모든 API 응답은 `{ "code": 200, "status": "OK", "data": ... }` 형태로 감싸집니다.
//! 성공 응답과 에러 응답이 같은 구조를 쓰므로, 클라이언트는 항상
//! `code`와 `status`만 보고 결과를 판단할 수 있습니다.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// HTTP 상태 코드에 대응하는 사람이 읽는 라벨을 반환합니다.
///
/// `code`와 `status`는 항상 이 표에서 쌍으로 결정됩니다.
/// 표에 없는 상태 코드는 `"UNKNOWN"`이 됩니다.
pub fn status_label(status: StatusCode) -> &'static str {
    match status {
        StatusCode::OK => "OK",
        StatusCode::BAD_REQUEST => "BAD REQUEST",
        StatusCode::UNAUTHORIZED => "UNAUTHORIZED",
        StatusCode::NOT_FOUND => "NOT FOUND",
        StatusCode::METHOD_NOT_ALLOWED => "METHOD NOT ALLOWED",
        StatusCode::INTERNAL_SERVER_ERROR => "INTERNAL SERVER ERROR",
        _ => "UNKNOWN",
    }
}

/// 응답 봉투
///
/// `code`와 `status`를 따로 받지 않고 `StatusCode` 하나에서 만들어내므로
/// 두 값이 서로 어긋날 수 없습니다.
#[derive(Debug, Serialize)]
pub struct WebResponse<T> {
    pub code: u16,
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> WebResponse<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self {
            code: status.as_u16(),
            status: status_label(status),
            data,
        }
    }

    /// `200 OK` 봉투
    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, data)
    }
}

impl<T: Serialize> IntoResponse for WebResponse<T> {
    fn into_response(self) -> Response {
        // code 필드에서 상태 코드를 복원합니다. new()를 거쳤다면 항상 유효합니다.
        let status =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        emit(status, &self)
    }
}

/// 봉투를 직렬화하여 응답 한 건을 만듭니다.
///
/// Content-Type 헤더, 상태 코드, JSON 본문을 정확히 한 번씩 설정합니다.
/// 직렬화에 실패하면 조용히 넘어가지 않고 에러 로그를 남긴 뒤
/// 본문 없는 500 응답으로 격상(escalate)합니다.
pub(crate) fn emit<T: Serialize>(status: StatusCode, envelope: &WebResponse<T>) -> Response {
    match serde_json::to_vec(envelope) {
        Ok(body) => (
            status,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize response envelope: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde::ser::Error as _;
    use serde_json::{json, Value};

    #[test]
    fn status_labels_match_fixed_table() {
        assert_eq!(status_label(StatusCode::OK), "OK");
        assert_eq!(status_label(StatusCode::BAD_REQUEST), "BAD REQUEST");
        assert_eq!(status_label(StatusCode::UNAUTHORIZED), "UNAUTHORIZED");
        assert_eq!(status_label(StatusCode::NOT_FOUND), "NOT FOUND");
        assert_eq!(
            status_label(StatusCode::METHOD_NOT_ALLOWED),
            "METHOD NOT ALLOWED"
        );
        assert_eq!(
            status_label(StatusCode::INTERNAL_SERVER_ERROR),
            "INTERNAL SERVER ERROR"
        );
        assert_eq!(status_label(StatusCode::IM_A_TEAPOT), "UNKNOWN");
    }

    #[test]
    fn envelope_pairs_code_with_label() {
        let envelope = WebResponse::new(StatusCode::NOT_FOUND, "missing");
        assert_eq!(envelope.code, 404);
        assert_eq!(envelope.status, "NOT FOUND");
    }

    #[tokio::test]
    async fn ok_envelope_writes_json_body() {
        let response = WebResponse::ok(json!({ "id": 1, "name": "iPhone 13" })).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            json!({ "code": 200, "status": "OK", "data": { "id": 1, "name": "iPhone 13" } })
        );
    }

    #[tokio::test]
    async fn unit_data_serializes_as_null() {
        let response = WebResponse::ok(()).into_response();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["data"], Value::Null);
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refused"))
        }
    }

    #[tokio::test]
    async fn serialization_failure_escalates_to_plain_500() {
        let response = WebResponse::ok(Unserializable).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_ne!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}

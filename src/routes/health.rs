//! # 헬스체크(Health Check) 핸들러
//!
//! ## 엔드포인트
//! - `GET /api/health` → `{ "code": 200, "status": "OK", "data": { "status": "ok" } }`
//!
//! API 키 없이 호출할 수 있습니다. 로드밸런서나 컨테이너 헬스체크용입니다.

use crate::models::WebResponse;
use serde_json::{json, Value};

/// 고정된 JSON만 반환하므로 실패하지 않습니다.
pub async fn health_check() -> WebResponse<Value> {
    WebResponse::ok(json!({ "status": "ok" }))
}

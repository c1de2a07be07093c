//! # 카테고리 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/categories | `list_categories` | 전체 카테고리 목록 (삽입 순서) |
//! | POST | /api/categories | `create_category` | 새 카테고리 생성 |
//! | GET | /api/categories/{id} | `get_category` | 카테고리 하나 조회 |
//! | PUT | /api/categories/{id} | `update_category` | 카테고리 이름 수정 |
//! | DELETE | /api/categories/{id} | `delete_category` | 카테고리 삭제 |
//!
//! 모든 성공 응답은 `200 { "code": 200, "status": "OK", "data": ... }`입니다.
//! 핸들러는 services 함수를 호출하고 결과를 봉투에 담기만 합니다.
//! 에러는 `?`로 그대로 반환하면 `AppError`의 `IntoResponse`가 분류해 줍니다.
//!
//! ## 추출자(Extractor)
//! - `State(state)`: 애플리케이션 공유 상태 (DB 풀, API 키)
//! - `AppPath(id)`: URL의 `{id}` 부분을 `i64`로 파싱 (실패하면 400 봉투)
//! - `AppJson(req)`: 요청 본문 JSON을 구조체로 파싱 (실패하면 400 봉투)

// ── 의존성 가져오기 ──
use crate::{
    error::AppError,                      // 핸들러 에러 타입 (봉투 응답으로 자동 변환)
    models::*,                            // Category, 요청 구조체, WebResponse
    routes::{AppJson, AppPath, AppState}, // 봉투를 유지하는 추출자와 공유 상태
    services::categories,                 // 검증 + 트랜잭션을 담당하는 서비스 함수
};
use axum::extract::State; // Axum 추출자: 앱 상태

/// `GET /api/categories` → `data: [...]`
///
/// 반환 타입이 `Result<WebResponse<_>, AppError>`이므로:
/// - 성공(Ok): `WebResponse`가 200 봉투로 변환됨
/// - 실패(Err): `AppError`가 분류기를 거쳐 404/400/500 봉투로 변환됨
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<WebResponse<Vec<Category>>, AppError> {
    // &state.pool: 풀을 빌려주기만 합니다 (소유권 이동 없음)
    let categories = categories::find_all(&state.pool).await?;
    Ok(WebResponse::ok(categories))
}

/// `POST /api/categories` + `{ "name": "..." }`
///
/// 이름이 비어 있으면 400, 성공하면 id가 채워진 카테고리를 반환합니다.
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(req): AppJson<CategoryCreateRequest>,
) -> Result<WebResponse<Category>, AppError> {
    let category = categories::create(&state.pool, &req).await?;
    Ok(WebResponse::ok(category))
}

/// `GET /api/categories/{id}`
///
/// 예: `/api/categories/3` → id = 3, `/api/categories/abc` → 400
pub async fn get_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<WebResponse<Category>, AppError> {
    let category = categories::find_by_id(&state.pool, id).await?;
    Ok(WebResponse::ok(category))
}

/// `PUT /api/categories/{id}` + `{ "name": "..." }`
///
/// 검증 실패(400)가 존재 여부 확인(404)보다 먼저입니다.
pub async fn update_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<CategoryUpdateRequest>,
) -> Result<WebResponse<Category>, AppError> {
    let category = categories::update(&state.pool, id, &req).await?;
    Ok(WebResponse::ok(category))
}

/// `DELETE /api/categories/{id}` → `data: null`
///
/// REST 관례인 204 대신 다른 엔드포인트와 같은 200 봉투를 반환합니다.
pub async fn delete_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<WebResponse<()>, AppError> {
    categories::delete(&state.pool, id).await?;
    Ok(WebResponse::ok(()))
}

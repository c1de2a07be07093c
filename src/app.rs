//! # 라우터 조립
//!
//! 핸들러, 인증 미들웨어, 공통 tower-http 레이어를 하나의 `Router`로 묶습니다.
//! main.rs의 HTTP 서버와 테스트가 같은 라우터를 사용합니다.
//!
//! ## 레이어 순서 (바깥 → 안쪽)
//! 1. `TraceLayer`: 요청/응답 로깅
//! 2. `CorsLayer`
//! 3. `CatchPanicLayer`: 핸들러 panic → 분류기를 거친 봉투 응답
//! 4. API 키 미들웨어 (`/api/categories*`에만 적용)
//!
//! 라우트에 없는 경로는 404 봉투, 경로는 있지만 메서드가 틀리면 405 봉투로 응답합니다.

use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::handle_panic,
    middleware::auth::require_api_key,
    routes::{self, AppState},
};

/// 전체 애플리케이션 라우터를 만듭니다.
pub fn build_app(state: AppState) -> Router {
    // API 키가 필요한 카테고리 라우트
    // method_not_allowed_fallback을 layer보다 먼저 등록해야 405 응답도
    // 키 검사를 거칩니다. (키가 틀리면 405가 아니라 401)
    let category_routes = Router::new()
        .route(
            "/api/categories",
            get(routes::list_categories).post(routes::create_category),
        )
        .route(
            "/api/categories/{id}",
            get(routes::get_category)
                .put(routes::update_category)
                .delete(routes::delete_category),
        )
        .method_not_allowed_fallback(routes::method_not_allowed)
        // from_fn_with_state: async 함수를 미들웨어로 만들고 AppState를 넘겨줍니다
        // (라우터의 with_state와 별개로 미들웨어도 상태가 필요하므로 clone)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    // merge: 두 라우터의 경로를 하나로 합칩니다
    let router = Router::new()
        .route("/api/health", get(routes::health_check))
        .merge(category_routes)
        // 이미 fallback이 있는 카테고리 라우트는 그대로 두고, /api/health에만 적용됩니다.
        .method_not_allowed_fallback(routes::method_not_allowed)
        .fallback(routes::fallback)
        .with_state(state);

    with_common_layers(router)
}

/// 모든 라우트에 공통 tower-http 레이어를 씌웁니다.
///
/// `.layer()`는 나중에 호출한 것이 바깥쪽이 됩니다.
/// 즉 요청은 Trace → CORS → CatchPanic → 라우터 순서로 지나갑니다.
fn with_common_layers(router: Router) -> Router {
    // CORS: 어떤 출처/메서드/헤더든 허용 (브라우저 클라이언트용)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

use axum::{routing::get, Router};
use crate::shared::services::AppState;

// 각 도메인의 routes import
use crate::domains::auth::routes::create_auth_router;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", create_auth_router())
        .route("/health", get(|| async { "OK" }))
}

/// 상태까지 주입된 애플리케이션 라우터 (main / 통합 테스트 공용)
pub fn create_app(app_state: AppState) -> Router {
    create_router().with_state(app_state)
}

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use crate::shared::services::AppState;
use crate::shared::errors::AuthError;
use crate::domains::auth::models::{TokenKind, User};

/// 인증된 사용자 (access token에서 확인된 요청 범위 정보)
/// Authenticated user, resolved for the current request only
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: u64,
    pub user: User,
}

/// AuthenticatedUser를 Axum Extractor로 구현
/// 역할: 보호된 핸들러 앞의 SessionGuard
///
/// 사용법:
/// ```rust,ignore
/// pub async fn get_me(
///     authenticated_user: AuthenticatedUser,  // <- 핸들러 실행 전에 검증됨
/// ) -> Json<UserResponse> {
///     Json(authenticated_user.user.into())
/// }
/// ```
#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_state = &state.auth_state;

        // 1. access token 쿠키, 없으면 "Bearer <token>" 헤더
        let token = auth_state
            .cookies
            .read(&parts.headers, TokenKind::Access)
            .or_else(|| bearer_token(&parts.headers));

        // 2. 검증 + 사용자 조회
        let user = auth_state
            .session_guard
            .authenticate(token.as_deref())
            .await?;

        Ok(AuthenticatedUser {
            user_id: user.id,
            user,
        })
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

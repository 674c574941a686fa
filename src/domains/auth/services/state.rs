// Auth domain state
// 인증 도메인 상태
use std::sync::Arc;
use crate::shared::config::AuthConfig;
use crate::shared::database::UserStore;
use crate::shared::utils::SessionCookies;
use crate::domains::auth::services::{
    AccountService, PasswordHasher, RefreshFlow, SessionGuard, SessionIssuer, TokenCodec,
};

/// Auth domain state
/// 인증 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AuthState {
    pub session_issuer: SessionIssuer,
    pub refresh_flow: RefreshFlow,
    pub session_guard: SessionGuard,
    pub account_service: AccountService,
    pub cookies: SessionCookies,
}

impl AuthState {
    /// AuthState 생성 (불변 설정 + 저장소 + 해셔 주입)
    pub fn new(
        config: &AuthConfig,
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        let codec = TokenCodec::new(config);
        let account_service = AccountService::new(users.clone(), hasher.clone());

        Self {
            session_issuer: SessionIssuer::new(users, hasher, codec.clone()),
            refresh_flow: RefreshFlow::new(codec.clone()),
            session_guard: SessionGuard::new(codec, account_service.clone()),
            account_service,
            cookies: SessionCookies::new(config.cookies.clone()),
        }
    }
}

use std::sync::Arc;
use crate::shared::config::AuthConfig;
use crate::shared::database::UserStore;
use crate::domains::auth::services::state::AuthState;
use crate::domains::auth::services::{Argon2PasswordHasher, PasswordHasher};

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 요청 간에 공유되는 값은 모두 불변 (설정, 서명 키)이거나
/// 자체 동시성 모델을 가진 저장소뿐이다.
#[derive(Clone)]
pub struct AppState {
    pub auth_state: AuthState,
}

impl AppState {
    /// Create AppState with the default Argon2 hasher
    pub fn new(config: &AuthConfig, users: Arc<dyn UserStore>) -> Self {
        Self::with_hasher(config, users, Arc::new(Argon2PasswordHasher::new()))
    }

    /// 해셔 주입을 위한 생성자
    pub fn with_hasher(
        config: &AuthConfig,
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            auth_state: AuthState::new(config, users, hasher),
        }
    }
}

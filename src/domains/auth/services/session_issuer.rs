use std::sync::Arc;
use crate::shared::database::UserStore;
use crate::shared::errors::AuthError;
use crate::domains::auth::models::{LoginRequest, TokenPair};
use crate::domains::auth::services::account_service::normalize_email;
use crate::domains::auth::services::password::{verify_blocking, PasswordHasher};
use crate::domains::auth::services::TokenCodec;

/// 세션 발급: 자격 증명 검증 → 토큰 쌍 발급
/// Session issuer: credential check, then token pair minting
///
/// 서버 측 세션 저장소는 없다. 쿠키/응답 body 전달은 핸들러가 담당.
#[derive(Clone)]
pub struct SessionIssuer {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    codec: TokenCodec,
}

impl SessionIssuer {
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>, codec: TokenCodec) -> Self {
        Self { users, hasher, codec }
    }

    // 로그인 (비즈니스 로직)
    // Returns: 새 Access + Refresh 토큰 쌍
    pub async fn login(&self, request: LoginRequest) -> Result<TokenPair, AuthError> {
        let email = normalize_email(&request.email);

        // 1. 이메일로 사용자 조회
        let user = self
            .users
            .find_by_email(&email)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {}", e)))?;

        // 이메일 없음 / 비밀번호 불일치는 같은 에러 (계정 열거 방지)
        let user = match user {
            Some(u) => u,
            None => {
                tracing::info!("login rejected: unknown email");
                return Err(AuthError::AuthFailed);
            }
        };

        // 2. 비밀번호 검증 (blocking pool)
        match verify_blocking(self.hasher.clone(), request.password, user.password_hash.clone()).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::info!(user_id = user.id, "login rejected: wrong password");
                return Err(AuthError::AuthFailed);
            }
            Err(e) => {
                tracing::warn!(user_id = user.id, error = %e, "stored password hash is unusable");
                return Err(AuthError::AuthFailed);
            }
        }

        // 3. Access + Refresh 발급 (종류별 다른 비밀키)
        let pair = self.codec.mint_pair(&user.id.to_string())?;

        tracing::info!(user_id = user.id, "login succeeded");
        Ok(pair)
    }
}

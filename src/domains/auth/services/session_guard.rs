use crate::shared::errors::AuthError;
use crate::domains::auth::models::{TokenKind, User};
use crate::domains::auth::services::{AccountService, TokenCodec};

/// 보호된 요청의 게이트: access token 검증 → 사용자 조회
/// Guard for protected requests
///
/// - 토큰 없음 / 검증 실패 → Unauthorized (401)
/// - 토큰은 유효하지만 사용자가 없음 → UserNotFound (404)
#[derive(Clone)]
pub struct SessionGuard {
    codec: TokenCodec,
    accounts: AccountService,
}

impl SessionGuard {
    pub fn new(codec: TokenCodec, accounts: AccountService) -> Self {
        Self { codec, accounts }
    }

    pub async fn authenticate(&self, access_token: Option<&str>) -> Result<User, AuthError> {
        let token = access_token.ok_or(AuthError::Unauthorized)?;

        let subject = self
            .codec
            .verify(TokenKind::Access, token)
            .map_err(AuthError::into_unauthorized)?;

        // 이 서비스가 발급한 subject는 항상 숫자 ID
        let user_id: u64 = subject.parse().map_err(|_| AuthError::Unauthorized)?;

        self.accounts.get_user_info(user_id).await
    }
}

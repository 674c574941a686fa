use crate::shared::errors::AuthError;
use crate::domains::auth::models::{TokenKind, TokenPair};
use crate::domains::auth::services::TokenCodec;

/// Refresh Token으로 새 토큰 쌍 발급 (Rotation)
/// Exchange a valid refresh token for a brand-new pair
///
/// 저장소가 없으므로 이전 refresh token은 회전 후에도 자체 만료 시각까지 유효하다.
/// 무효화가 필요하면 revocation 저장소가 있어야 한다.
#[derive(Clone)]
pub struct RefreshFlow {
    codec: TokenCodec,
}

impl RefreshFlow {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        // 1. refresh 비밀키로 검증 (Invalid/Expired → Unauthorized)
        let subject = self
            .codec
            .verify(TokenKind::Refresh, refresh_token)
            .map_err(|e| {
                tracing::debug!(error = %e, "refresh token rejected");
                e.into_unauthorized()
            })?;

        // 2. subject 그대로 신뢰 (사용자 재조회 없음), 3. 새 쌍 발급
        let pair = self.codec.mint_pair(&subject)?;

        tracing::info!(subject = %subject, "session refreshed");
        Ok(pair)
    }
}

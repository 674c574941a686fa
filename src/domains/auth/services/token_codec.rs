// src/domains/auth/services/token_codec.rs
use crate::shared::config::AuthConfig;
use crate::shared::errors::AuthError;
use crate::domains::auth::models::jwt::{Claims, IssuedToken, TokenKind, TokenPair};
use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// 토큰 종류 하나에 대응하는 서명 키
/// HMAC key material for one token kind
#[derive(Clone)]
pub struct TokenKey {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenKey {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// 토큰 코덱: 서명된 만료 토큰 생성/검증
/// Token codec: mints and verifies signed, expiring tokens
///
/// 순수 함수: 저장소도 부수효과도 없음. 종류별로 다른 비밀키를 사용하므로
/// refresh 키로 access token을 검증하면 (또는 그 반대) 항상 실패한다.
#[derive(Clone)]
pub struct TokenCodec {
    access_key: TokenKey,
    refresh_key: TokenKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenCodec {
    /// TokenCodec 생성
    /// Create codec from config (one secret per kind)
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            access_key: TokenKey::from_secret(&config.access_secret),
            refresh_key: TokenKey::from_secret(&config.refresh_secret),
            access_ttl: config.access_ttl,
            refresh_ttl: config.refresh_ttl,
        }
    }

    pub fn ttl(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }

    fn key(&self, kind: TokenKind) -> &TokenKey {
        match kind {
            TokenKind::Access => &self.access_key,
            TokenKind::Refresh => &self.refresh_key,
        }
    }

    /// 토큰 발급: 만료 시간 = now + ttl, HS256 서명
    /// Mint a token signed with `key`; expiry = now + ttl
    pub fn mint_with(
        key: &TokenKey,
        kind: TokenKind,
        subject: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        let claims = Claims::new(subject, now, ttl);
        let expires_at = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .ok_or_else(|| AuthError::Internal(format!("expiry out of range: {}", claims.exp)))?;

        let token = encode(&Header::new(Algorithm::HS256), &claims, &key.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to generate {} token: {}", kind.as_str(), e)))?;

        Ok(IssuedToken {
            kind,
            token,
            subject: claims.sub,
            expires_at,
            ttl,
        })
    }

    /// 토큰 검증: 서명 먼저, 그 다음 만료
    /// Verify signature first, then expiry (expired when now >= exp)
    pub fn verify_with(key: &TokenKey, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // 만료는 아래에서 leeway 없이 직접 판정
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data = decode::<Claims>(token, &key.decoding_key, &validation)
            .map_err(|_| AuthError::TokenInvalid)?;

        if now.timestamp() >= token_data.claims.exp {
            return Err(AuthError::TokenExpired);
        }

        Ok(token_data.claims)
    }

    pub fn mint(&self, kind: TokenKind, subject: &str) -> Result<IssuedToken, AuthError> {
        self.mint_at(kind, subject, Utc::now())
    }

    pub fn mint_at(&self, kind: TokenKind, subject: &str, now: DateTime<Utc>) -> Result<IssuedToken, AuthError> {
        Self::mint_with(self.key(kind), kind, subject, self.ttl(kind), now)
    }

    /// 토큰 검증 후 subject 반환
    /// Verify with the secret of `kind` and return the subject
    pub fn verify(&self, kind: TokenKind, token: &str) -> Result<String, AuthError> {
        self.verify_at(kind, token, Utc::now())
    }

    pub fn verify_at(&self, kind: TokenKind, token: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
        Self::verify_with(self.key(kind), token, now).map(|claims| claims.sub)
    }

    /// Access + Refresh 토큰 쌍 발급 (둘 다 성공하거나 전체 실패)
    /// Mint both tokens; any failure fails the whole pair
    pub fn mint_pair(&self, subject: &str) -> Result<TokenPair, AuthError> {
        let now = Utc::now();
        let access = self.mint_at(TokenKind::Access, subject, now)?;
        let refresh = self.mint_at(TokenKind::Refresh, subject, now)?;
        Ok(TokenPair { access, refresh })
    }
}

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Duration, Utc};

/// 토큰 종류
/// Token kind. Each kind is signed with its own secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

/// JWT Claims (토큰에 포함될 데이터)
/// JWT Claims (data to be included in token)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 사용자 식별자 (subject)
    pub sub: String,

    /// 만료 시간 (Unix timestamp)
    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// 발급 시간 (Unix timestamp)
    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// 토큰 고유 ID: 같은 초에 발급된 토큰도 서로 다른 값이 되도록 함
    /// Unique token id so two tokens minted in the same second differ
    pub jti: String,
}

impl Claims {
    /// 새 Claims 생성 (만료 시간 = now + ttl)
    pub fn new(subject: &str, now: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = now.timestamp();
        Self {
            sub: subject.to_string(),
            exp: iat + ttl.num_seconds(),
            iat,
            jti: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// 발급된 토큰 (불변)
/// A minted token. Never updated in place.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub kind: TokenKind,
    pub token: String,
    pub subject: String,
    pub expires_at: DateTime<Utc>,
    pub ttl: Duration,
}

/// Access + Refresh 토큰 쌍
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: IssuedToken,
    pub refresh: IssuedToken,
}

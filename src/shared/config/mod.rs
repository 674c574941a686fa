// =====================================================
// 설정 (Configuration)
// =====================================================
// 역할: 환경 변수에서 서버/인증 설정을 한 번 읽어 불변 구조체로 보관
// Startup reads the environment once; the resulting structs are
// immutable and injected into services at construction.
// =====================================================

use anyhow::{bail, Context, Result};
use chrono::Duration;
use cookie::SameSite;
use tracing::warn;

/// Access Token 기본 수명 (1시간)
pub const DEFAULT_ACCESS_TTL_SECS: i64 = 60 * 60;
/// Refresh Token 기본 수명 (7일)
pub const DEFAULT_REFRESH_TTL_SECS: i64 = 7 * 24 * 60 * 60;
/// 토큰 수명 상한 (10년)
pub const MAX_TTL_SECS: i64 = 10 * 365 * 24 * 60 * 60;

pub const DEFAULT_ACCESS_COOKIE: &str = "access_token";
pub const DEFAULT_REFRESH_COOKIE: &str = "refresh_token";

const DEV_ACCESS_SECRET: &str = "dev-access-secret-change-in-production";
const DEV_REFRESH_SECRET: &str = "dev-refresh-secret-change-in-production";

/// 쿠키 전송 설정
/// Transport cookie settings
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub access_name: String,
    pub refresh_name: String,
    pub secure: bool,
    pub same_site: Option<SameSite>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            access_name: DEFAULT_ACCESS_COOKIE.to_string(),
            refresh_name: DEFAULT_REFRESH_COOKIE.to_string(),
            secure: false,
            same_site: None,
        }
    }
}

/// 인증 설정 (토큰 종류별 비밀키/수명 + 쿠키)
/// Token secrets and lifetimes per kind, plus cookie settings
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
    pub cookies: CookieConfig,
}

impl AuthConfig {
    /// 검증된 AuthConfig 생성
    /// Build a validated config with default cookie settings
    pub fn new(
        access_secret: impl Into<String>,
        refresh_secret: impl Into<String>,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Result<Self> {
        let config = Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_ttl,
            refresh_ttl,
            cookies: CookieConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 key -> value 조회 함수로부터 설정 구성 (테스트에서 env 대신 사용)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        // 개발용 비밀키는 RUST_ENV=dev 가 명시된 경우에만
        let is_dev = get("RUST_ENV").is_some_and(|env| env == "dev");

        let access_secret = match get("ACCESS_TOKEN_SECRET") {
            Some(secret) => secret,
            None if is_dev => {
                warn!("ACCESS_TOKEN_SECRET not set; using development secret");
                DEV_ACCESS_SECRET.to_string()
            }
            None => bail!("ACCESS_TOKEN_SECRET must be set outside RUST_ENV=dev"),
        };
        let refresh_secret = match get("REFRESH_TOKEN_SECRET") {
            Some(secret) => secret,
            None if is_dev => {
                warn!("REFRESH_TOKEN_SECRET not set; using development secret");
                DEV_REFRESH_SECRET.to_string()
            }
            None => bail!("REFRESH_TOKEN_SECRET must be set outside RUST_ENV=dev"),
        };

        let access_ttl = parse_secs(get("ACCESS_TOKEN_TTL_SECS"), DEFAULT_ACCESS_TTL_SECS)
            .context("invalid ACCESS_TOKEN_TTL_SECS")?;
        let refresh_ttl = parse_secs(get("REFRESH_TOKEN_TTL_SECS"), DEFAULT_REFRESH_TTL_SECS)
            .context("invalid REFRESH_TOKEN_TTL_SECS")?;

        let cookies = CookieConfig {
            access_name: get("ACCESS_COOKIE_NAME").unwrap_or_else(|| DEFAULT_ACCESS_COOKIE.to_string()),
            refresh_name: get("REFRESH_COOKIE_NAME").unwrap_or_else(|| DEFAULT_REFRESH_COOKIE.to_string()),
            secure: get("COOKIE_SECURE").and_then(|v| parse_bool(&v)).unwrap_or(false),
            same_site: get("COOKIE_SAMESITE").and_then(|v| parse_same_site(&v)),
        };

        let config = Self {
            access_secret,
            refresh_secret,
            access_ttl,
            refresh_ttl,
            cookies,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.access_secret.is_empty() || self.refresh_secret.is_empty() {
            bail!("token secrets must not be empty");
        }
        // 같은 키를 쓰면 refresh token으로 access token을 위조할 수 있음
        if self.access_secret == self.refresh_secret {
            bail!("access and refresh token secrets must differ");
        }
        if self.access_ttl <= Duration::zero() || self.refresh_ttl <= Duration::zero() {
            bail!("token TTLs must be positive");
        }
        let max_ttl = Duration::seconds(MAX_TTL_SECS);
        if self.access_ttl > max_ttl || self.refresh_ttl > max_ttl {
            bail!("token TTLs must be at most {} seconds", MAX_TTL_SECS);
        }
        if self.access_ttl >= self.refresh_ttl {
            bail!("access token TTL must be shorter than refresh token TTL");
        }
        if self.cookies.access_name == self.cookies.refresh_name {
            bail!("access and refresh cookie names must differ");
        }
        if self.cookies.same_site == Some(SameSite::None) && !self.cookies.secure {
            warn!("SameSite=None without Secure is rejected by most browsers");
        }
        Ok(())
    }
}

/// 서버 설정
/// Server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// 없으면 in-memory 저장소 사용
    pub database_url: Option<String>,
    pub cors_origin: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let get = |key: &str| {
            std::env::var(key)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3002".to_string()),
            database_url: get("DATABASE_URL"),
            cors_origin: get("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:3003".to_string()),
        }
    }
}

fn parse_secs(value: Option<String>, default: i64) -> Result<Duration> {
    match value {
        Some(v) => {
            let secs: i64 = v.parse().with_context(|| format!("not an integer: {}", v))?;
            Duration::try_seconds(secs).with_context(|| format!("out of range: {}", secs))
        }
        None => Ok(Duration::seconds(default)),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_same_site(value: &str) -> Option<SameSite> {
    match value.to_ascii_lowercase().as_str() {
        "none" => Some(SameSite::None),
        "lax" => Some(SameSite::Lax),
        "strict" => Some(SameSite::Strict),
        _ => None,
    }
}

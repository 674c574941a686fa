// =====================================================
// 세션 쿠키 (Session cookies)
// =====================================================
// 역할: 토큰 쌍을 두 개의 독립된 쿠키로 전달 / 삭제 / 요청에서 읽기
//
// 속성 (클라이언트 호환을 위해 고정):
// - HttpOnly
// - Path=/
// - Max-Age = 각 토큰의 TTL (초)
// =====================================================

use axum::http::{header::COOKIE, HeaderMap, HeaderValue};
use cookie::time::Duration as CookieDuration;
use cookie::Cookie;
use crate::shared::config::CookieConfig;
use crate::shared::errors::AuthError;
use crate::domains::auth::models::jwt::{TokenKind, TokenPair};

#[derive(Debug, Clone)]
pub struct SessionCookies {
    config: CookieConfig,
}

impl SessionCookies {
    pub fn new(config: CookieConfig) -> Self {
        Self { config }
    }

    pub fn name(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Access => &self.config.access_name,
            TokenKind::Refresh => &self.config.refresh_name,
        }
    }

    fn build(&self, name: &str, value: &str, max_age_secs: i64) -> String {
        let mut builder = Cookie::build((name.to_string(), value.to_string()))
            .http_only(true)
            .path("/")
            .max_age(CookieDuration::seconds(max_age_secs));

        if self.config.secure {
            builder = builder.secure(true);
        }
        if let Some(same_site) = self.config.same_site {
            builder = builder.same_site(same_site);
        }

        builder.build().to_string()
    }

    /// 토큰 쌍에 대한 Set-Cookie 값 두 개 생성
    /// Both values are built before any is handed out
    pub fn pair_headers(&self, pair: &TokenPair) -> Result<[HeaderValue; 2], AuthError> {
        let access = self.build(
            self.name(TokenKind::Access),
            &pair.access.token,
            pair.access.ttl.num_seconds(),
        );
        let refresh = self.build(
            self.name(TokenKind::Refresh),
            &pair.refresh.token,
            pair.refresh.ttl.num_seconds(),
        );

        let to_header = |cookie: String| {
            HeaderValue::from_str(&cookie)
                .map_err(|e| AuthError::Internal(format!("Invalid Set-Cookie value: {}", e)))
        };

        Ok([to_header(access)?, to_header(refresh)?])
    }

    /// 두 쿠키를 지우는 Set-Cookie 값 (빈 값, Max-Age=0)
    pub fn clear_headers(&self) -> Vec<HeaderValue> {
        [TokenKind::Access, TokenKind::Refresh]
            .into_iter()
            .filter_map(|kind| {
                let cookie = self.build(self.name(kind), "", 0);
                HeaderValue::from_str(&cookie)
                    .map_err(|e| tracing::warn!(error = %e, "failed to build removal cookie"))
                    .ok()
            })
            .collect()
    }

    /// 요청 Cookie 헤더에서 토큰 읽기 (빈 값은 없는 것으로 취급)
    pub fn read(&self, headers: &HeaderMap, kind: TokenKind) -> Option<String> {
        let name = self.name(kind);

        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|part| Cookie::parse(part.trim()).ok())
            .find(|cookie| cookie.name() == name)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use cookie::SameSite;
    use crate::domains::auth::models::jwt::IssuedToken;

    fn issued(kind: TokenKind, token: &str, ttl: Duration) -> IssuedToken {
        IssuedToken {
            kind,
            token: token.to_string(),
            subject: "1".to_string(),
            expires_at: Utc::now() + ttl,
            ttl,
        }
    }

    fn pair() -> TokenPair {
        TokenPair {
            access: issued(TokenKind::Access, "aaa.bbb.ccc", Duration::hours(1)),
            refresh: issued(TokenKind::Refresh, "ddd.eee.fff", Duration::days(7)),
        }
    }

    #[test]
    fn test_pair_cookie_attributes() {
        let cookies = SessionCookies::new(CookieConfig::default());
        let [access, refresh] = cookies.pair_headers(&pair()).unwrap();
        let access = access.to_str().unwrap();
        let refresh = refresh.to_str().unwrap();

        assert!(access.starts_with("access_token=aaa.bbb.ccc"));
        assert!(access.contains("HttpOnly"));
        assert!(access.contains("Path=/"));
        assert!(access.contains("Max-Age=3600"));
        assert!(!access.contains("Secure"));

        assert!(refresh.starts_with("refresh_token=ddd.eee.fff"));
        assert!(refresh.contains("Max-Age=604800"));
    }

    #[test]
    fn test_optional_attributes() {
        let cookies = SessionCookies::new(CookieConfig {
            secure: true,
            same_site: Some(SameSite::Strict),
            ..CookieConfig::default()
        });
        let [access, _] = cookies.pair_headers(&pair()).unwrap();
        let access = access.to_str().unwrap();

        assert!(access.contains("Secure"));
        assert!(access.contains("SameSite=Strict"));
    }

    #[test]
    fn test_clear_headers() {
        let cookies = SessionCookies::new(CookieConfig::default());
        let cleared = cookies.clear_headers();

        assert_eq!(cleared.len(), 2);
        for value in &cleared {
            let value = value.to_str().unwrap();
            assert!(value.contains("Max-Age=0"));
            assert!(value.contains("Path=/"));
        }
        assert!(cleared[0].to_str().unwrap().starts_with("access_token=;"));
        assert!(cleared[1].to_str().unwrap().starts_with("refresh_token=;"));
    }

    #[test]
    fn test_read_from_request() {
        let cookies = SessionCookies::new(CookieConfig::default());
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; access_token=abc; refresh_token=def"),
        );

        assert_eq!(cookies.read(&headers, TokenKind::Access).as_deref(), Some("abc"));
        assert_eq!(cookies.read(&headers, TokenKind::Refresh).as_deref(), Some("def"));
    }

    #[test]
    fn test_read_missing_or_empty() {
        let cookies = SessionCookies::new(CookieConfig::default());
        let mut headers = HeaderMap::new();
        assert!(cookies.read(&headers, TokenKind::Access).is_none());

        headers.insert(COOKIE, HeaderValue::from_static("access_token="));
        assert!(cookies.read(&headers, TokenKind::Access).is_none());
    }
}

// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 라우터를 프로세스 안에서 구동 (in-memory 저장소, DB 불필요)
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let test_app = setup_app();
//     let response = send(&test_app.app, json_request("POST", "/api/auth/login", body)).await;
// }
// ```
// =====================================================
#![allow(dead_code)]

use std::sync::Arc;
use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use chrono::Duration;
use serde_json::{json, Value};
use tower::ServiceExt;

use session_api::routes::create_app;
use session_api::shared::config::AuthConfig;
use session_api::shared::database::InMemoryUserStore;
use session_api::shared::errors::AuthError;
use session_api::shared::services::AppState;
use session_api::domains::auth::services::PasswordHasher;

// 테스트용 상수
pub const TEST_EMAIL: &str = "a@x.com";
pub const TEST_PASSWORD: &str = "secret-password";
pub const ACCESS_TTL_SECS: i64 = 15 * 60;
pub const REFRESH_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// 테스트용 해셔 (Argon2 대신 빠른 가짜 구현)
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("plain${}", password))
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AuthError> {
        match password_hash.strip_prefix("plain$") {
            Some(stored) => Ok(stored == password),
            None => Err(AuthError::Internal("not a plain hash".to_string())),
        }
    }
}

pub struct TestApp {
    pub app: Router,
    pub users: Arc<InMemoryUserStore>,
    pub config: AuthConfig,
}

pub fn test_config() -> AuthConfig {
    AuthConfig::new(
        "test-access-secret",
        "test-refresh-secret",
        Duration::seconds(ACCESS_TTL_SECS),
        Duration::seconds(REFRESH_TTL_SECS),
    )
    .expect("valid test config")
}

/// in-memory 저장소 + 가짜 해셔로 앱 생성
pub fn setup_app() -> TestApp {
    let config = test_config();
    let users = Arc::new(InMemoryUserStore::new());
    let state = AppState::with_hasher(&config, users.clone(), Arc::new(PlainHasher));

    TestApp {
        app: create_app(state),
        users,
        config,
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.expect("router is infallible")
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

/// Cookie 헤더를 붙인 요청
pub fn request_with_cookie(method: &str, uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .expect("valid request")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// 응답의 Set-Cookie 헤더 전부
pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().expect("ascii cookie").to_string())
        .collect()
}

/// Set-Cookie 목록에서 이름으로 찾기
pub fn find_cookie<'a>(cookies: &'a [String], name: &str) -> Option<&'a String> {
    let prefix = format!("{}=", name);
    cookies.iter().find(|c| c.starts_with(&prefix))
}

/// "name=value; ..." 에서 value 추출
pub fn cookie_value(set_cookie: &str) -> String {
    let pair = set_cookie.split(';').next().unwrap_or_default();
    pair.split_once('=').map(|(_, v)| v.to_string()).unwrap_or_default()
}

pub async fn signup(app: &Router, email: &str, password: &str) -> Response<Body> {
    send(
        app,
        json_request(
            "POST",
            "/api/auth/signup",
            json!({ "email": email, "name": "Test User", "password": password }),
        ),
    )
    .await
}

pub async fn login(app: &Router, email: &str, password: &str) -> Response<Body> {
    send(
        app,
        json_request("POST", "/api/auth/login", json!({ "email": email, "password": password })),
    )
    .await
}

/// 가입 + 로그인 후 (user_id, accessToken, refreshToken)
pub async fn signup_and_login(app: &Router) -> (u64, String, String) {
    let response = signup(app, TEST_EMAIL, TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let user = body_json(response).await;
    let user_id = user["id"].as_u64().expect("numeric id");

    let response = login(app, TEST_EMAIL, TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    (
        user_id,
        body["accessToken"].as_str().expect("accessToken").to_string(),
        body["refreshToken"].as_str().expect("refreshToken").to_string(),
    )
}

use crate::domains::auth::models::{
    LoginRequest, MessageResponse, RefreshTokenRequest, SignupRequest, TokenKind, TokenPair,
    TokenResponse, UserResponse,
};
use crate::domains::auth::services::AuthState;
use crate::shared::errors::AuthError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;
use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{AppendHeaders, IntoResponse},
    Json,
};

/// 토큰 쌍 전달: 쿠키 두 개 + JSON body (브라우저 / 헤더 기반 클라이언트 모두 지원)
/// Dual delivery of a freshly minted pair
fn token_response(auth: &AuthState, pair: TokenPair) -> Result<impl IntoResponse + use<>, AuthError> {
    // 쿠키 값 생성이 모두 성공한 뒤에만 응답 구성
    let [access_cookie, refresh_cookie] = auth.cookies.pair_headers(&pair)?;

    Ok((
        AppendHeaders([(SET_COOKIE, access_cookie), (SET_COOKIE, refresh_cookie)]),
        Json(TokenResponse {
            access_token: pair.access.token,
            refresh_token: pair.refresh.token,
        }),
    ))
}

// 회원가입 핸들러
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Validation failed or email already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn signup(
    State(app_state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AuthError> {
    let user = app_state
        .auth_state
        .account_service
        .signup(request)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

// 로그인 핸들러
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful; access/refresh cookies set", body = TokenResponse),
        (status = 400, description = "Invalid email or password"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthError> {
    let auth = &app_state.auth_state;
    let pair = auth.session_issuer.login(request).await?;

    token_response(auth, pair)
}

/// 토큰 갱신 핸들러
/// Refresh token handler
///
/// refresh token 쿠키를 우선 사용하고, 없으면 JSON body를 본다.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    request_body(content = RefreshTokenRequest, description = "Only needed when the refresh cookie is absent"),
    responses(
        (status = 200, description = "Token refreshed successfully; cookies rotated", body = TokenResponse),
        (status = 401, description = "Missing, invalid or expired refresh token")
    ),
    security(
        ("RefreshCookie" = [])
    ),
    tag = "Auth"
)]
pub async fn refresh(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    payload: Option<Json<RefreshTokenRequest>>,
) -> Result<impl IntoResponse, AuthError> {
    let auth = &app_state.auth_state;

    let refresh_token = auth
        .cookies
        .read(&headers, TokenKind::Refresh)
        .or_else(|| payload.map(|Json(body)| body.refresh_token))
        .ok_or(AuthError::Unauthorized)?;

    let pair = auth.refresh_flow.refresh(&refresh_token)?;

    token_response(auth, pair)
}

/// 로그아웃 핸들러: 두 쿠키 삭제 (항상 성공)
/// Logout handler. Tokens themselves stay valid until expiry.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logout successful; cookies cleared", body = MessageResponse)
    ),
    tag = "Auth"
)]
pub async fn logout(State(app_state): State<AppState>) -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    for cookie in app_state.auth_state.cookies.clear_headers() {
        headers.append(SET_COOKIE, cookie);
    }

    (
        headers,
        Json(MessageResponse {
            message: "Logout successful".to_string(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "User info retrieved successfully", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    ),
    security(
        ("AccessCookie" = []),
        ("BearerAuth" = [])
    ),
    tag = "Auth"
)]
pub async fn get_me(authenticated_user: AuthenticatedUser) -> Json<UserResponse> {
    Json(authenticated_user.user.into())
}

use thiserror::Error;
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

/// 인증/세션 관련 에러
/// Authentication and session errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// 잘못된 이메일 또는 비밀번호 (이메일 존재 여부를 노출하지 않음)
    /// Bad credentials. The message never reveals whether the email exists.
    #[error("Invalid email or password")]
    AuthFailed,

    /// 서명 불일치 또는 형식 오류
    /// Malformed or tampered token
    #[error("Invalid token")]
    TokenInvalid,

    /// 만료된 토큰
    /// Token past its expiry
    #[error("Token expired")]
    TokenExpired,

    /// 가드/리프레시가 요청을 거부함
    /// Guard or refresh flow rejected the request
    #[error("Unauthorized")]
    Unauthorized,

    /// 토큰은 유효하지만 사용자가 삭제됨
    /// Valid token, user record no longer exists
    #[error("User not found")]
    UserNotFound,

    /// 이메일이 이미 존재함
    /// Email already exists
    #[error("Email already exists: {email}")]
    EmailAlreadyExists { email: String },

    /// 입력값 검증 실패
    /// Field validation failed
    #[error("{0}")]
    Validation(String),

    /// 비밀번호 해싱 실패
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    PasswordHashingFailed(String),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::AuthFailed
            | AuthError::EmailAlreadyExists { .. }
            | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::TokenInvalid | AuthError::TokenExpired | AuthError::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::PasswordHashingFailed(_)
            | AuthError::DatabaseError(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 토큰 검증 실패를 요청 거부(401)로 통일
    /// Collapse token verification failures into `Unauthorized`
    pub fn into_unauthorized(self) -> Self {
        match self {
            AuthError::TokenInvalid | AuthError::TokenExpired => AuthError::Unauthorized,
            other => other,
        }
    }
}

/// AuthError를 HTTP 응답으로 변환
impl From<AuthError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AuthError) -> Self {
        let status = err.status_code();
        // 5xx 상세 내용은 로그에만 남김
        let message = if status.is_server_error() {
            tracing::error!(error = %err, "request failed");
            "Internal server error".to_string()
        } else {
            err.to_string()
        };

        (status, Json(json!({ "error": message })))
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, Json<serde_json::Value>) = self.into();
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(AuthError::AuthFailed.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::TokenInvalid.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::TokenExpired.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AuthError::DatabaseError("down".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_token_failures_collapse_to_unauthorized() {
        assert!(matches!(AuthError::TokenExpired.into_unauthorized(), AuthError::Unauthorized));
        assert!(matches!(AuthError::TokenInvalid.into_unauthorized(), AuthError::Unauthorized));
        assert!(matches!(AuthError::UserNotFound.into_unauthorized(), AuthError::UserNotFound));
    }

    #[test]
    fn test_server_errors_hide_details() {
        let (status, Json(body)) = AuthError::DatabaseError("connection refused".to_string()).into();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");

        let (status, Json(body)) = AuthError::AuthFailed.into();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid email or password");
    }
}

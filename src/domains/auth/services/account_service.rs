use std::sync::Arc;
use crate::shared::database::UserStore;
use crate::shared::errors::AuthError;
use crate::domains::auth::models::{Location, NewUser, SignupRequest, User};
use crate::domains::auth::services::password::{hash_blocking, PasswordHasher};

const MIN_PASSWORD_LEN: usize = 8;
const MAX_NAME_LEN: usize = 100;

/// 이메일 정규화 (앞뒤 공백 제거 + 소문자)
/// Signup and login both look users up by the normalized form
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

// 계정 서비스: 회원가입 / 사용자 조회
// AccountService: signup and user lookups through the UserStore
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    // 회원가입 (비즈니스 로직)
    pub async fn signup(&self, request: SignupRequest) -> Result<User, AuthError> {
        // 1. 입력값 검증
        let email = normalize_email(&request.email);
        validate_email(&email)?;
        let name = request.name.trim().to_string();
        validate_name(&name)?;
        validate_password(&request.password)?;
        let location = parse_location(request.location.as_deref())?;

        // 2. 이메일 중복 확인 (해싱 비용을 쓰기 전에)
        let existing_user = self
            .users
            .find_by_email(&email)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to check email existence: {}", e)))?;

        if existing_user.is_some() {
            return Err(AuthError::EmailAlreadyExists { email });
        }

        // 3. 비밀번호 해싱
        let password_hash = hash_blocking(self.hasher.clone(), request.password).await?;

        // 4. 사용자 생성 (동시 가입 경쟁은 저장소의 UNIQUE 제약이 판정)
        let user = self
            .users
            .create(NewUser {
                email: email.clone(),
                name,
                password_hash,
                location,
            })
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to create user: {}", e)))?
            .ok_or(AuthError::EmailAlreadyExists { email })?;

        tracing::info!(user_id = user.id, "user signed up");
        Ok(user)
    }

    pub async fn get_user_info(&self, user_id: u64) -> Result<User, AuthError> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {}", e)))?
            .ok_or(AuthError::UserNotFound)
    }
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    let invalid = || AuthError::Validation("Invalid email address".to_string());

    if email.len() > 255 || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    // 도메인은 최소 하나의 '.'과 비어있지 않은 라벨
    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(invalid());
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), AuthError> {
    if name.is_empty() {
        return Err(AuthError::Validation("Name is required".to_string()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AuthError::Validation(format!(
            "Name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

fn parse_location(location: Option<&[f64]>) -> Result<Option<Location>, AuthError> {
    let Some(coords) = location else {
        return Ok(None);
    };

    match coords {
        [lat, lon] if (-90.0..=90.0).contains(lat) && (-180.0..=180.0).contains(lon) => {
            Ok(Some(Location { lat: *lat, lon: *lon }))
        }
        [_, _] => Err(AuthError::Validation("Location out of range".to_string())),
        _ => Err(AuthError::Validation(
            "Location must be [latitude, longitude]".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  A@X.Com "), "a@x.com");
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("first.last@sub.example.org").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@x.com").is_err());
        assert!(validate_email("a@localhost").is_err());
        assert!(validate_email("a@x..com").is_err());
        assert!(validate_email("a@b@x.com").is_err());
        assert!(validate_email("a b@x.com").is_err());
    }

    #[test]
    fn test_validate_name_and_password() {
        assert!(validate_name("Ann").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());

        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("short").is_err());
    }

    #[test]
    fn test_parse_location() {
        assert_eq!(parse_location(None).unwrap(), None);
        assert_eq!(
            parse_location(Some(&[37.5, 127.0])).unwrap(),
            Some(Location { lat: 37.5, lon: 127.0 })
        );
        assert!(parse_location(Some(&[91.0, 0.0])).is_err());
        assert!(parse_location(Some(&[0.0, 181.0])).is_err());
        assert!(parse_location(Some(&[1.0])).is_err());
        assert!(parse_location(Some(&[1.0, 2.0, 3.0])).is_err());
    }
}

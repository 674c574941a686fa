use std::sync::Arc;
use crate::shared::errors::AuthError;
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use argon2::password_hash::{rand_core::OsRng, PasswordHasher as _, SaltString};

/// 비밀번호 해싱 인터페이스
/// Password hashing capability
///
/// 구현체는 의도적으로 느린 CPU 작업이므로 호출 측에서
/// `spawn_blocking`으로 실행한다. 결과를 캐시하지 말 것.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// 일치하면 Ok(true), 불일치면 Ok(false)
    /// Err only when the stored hash itself is unusable
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AuthError>;
}

/// Argon2id 구현 (기본 파라미터, 랜덤 salt)
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHashingFailed(format!("Failed to hash password: {}", e)))?
            .to_string();

        Ok(password_hash)
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AuthError> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

/// blocking 스레드 풀에서 해싱 실행
pub async fn hash_blocking(hasher: Arc<dyn PasswordHasher>, password: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| AuthError::Internal(format!("Password hashing task failed: {}", e)))?
}

/// blocking 스레드 풀에서 검증 실행
pub async fn verify_blocking(
    hasher: Arc<dyn PasswordHasher>,
    password: String,
    password_hash: String,
) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || hasher.verify(&password, &password_hash))
        .await
        .map_err(|e| AuthError::Internal(format!("Password verification task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("secret-password").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hasher.verify("secret-password", &hash).unwrap());
        assert!(!hasher.verify("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ() {
        let hasher = Argon2PasswordHasher::new();
        assert_ne!(hasher.hash("same").unwrap(), hasher.hash("same").unwrap());
    }

    #[tokio::test]
    async fn test_blocking_helpers() {
        let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
        let hash = hash_blocking(hasher.clone(), "pw-123456".to_string()).await.unwrap();

        assert!(verify_blocking(hasher.clone(), "pw-123456".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_blocking(hasher, "other".to_string(), hash).await.unwrap());
    }

    #[test]
    fn test_corrupt_hash_is_error() {
        let hasher = Argon2PasswordHasher::new();
        assert!(hasher.verify("anything", "not-a-phc-string").is_err());
    }
}

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use crate::domains::auth::models::user::{NewUser, User};
use crate::shared::database::repositories::auth::UserStore;

/// 메모리 기반 사용자 저장소 (테스트 / DATABASE_URL 없는 개발 환경용)
/// In-memory user store for tests and database-less development
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<u64, User>>,
    next_id: AtomicU64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자 삭제 (토큰은 유효하지만 사용자가 없는 상황 재현용)
    pub fn remove(&self, id: u64) -> Option<User> {
        self.users.write().remove(&id)
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<User>> {
        Ok(self.users.read().get(&id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<Option<User>> {
        // 중복 확인과 삽입을 같은 write lock 안에서 수행
        let mut users = self.users.write();
        if users.values().any(|u| u.email == user.email) {
            return Ok(None);
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let now = Utc::now();
        let record = User {
            id,
            email: user.email,
            name: user.name,
            password_hash: user.password_hash,
            location: user.location,
            created_at: now,
            updated_at: now,
        };
        users.insert(id, record.clone());

        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            name: "Test".to_string(),
            password_hash: "hash".to_string(),
            location: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup() {
        let store = InMemoryUserStore::new();
        let user = store.create(new_user("a@x.com")).await.unwrap().unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(store.find_by_id(1).await.unwrap().unwrap().email, "a@x.com");
        assert_eq!(store.find_by_email("a@x.com").await.unwrap().unwrap().id, 1);
        assert!(store.find_by_email("b@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_returns_none() {
        let store = InMemoryUserStore::new();
        store.create(new_user("a@x.com")).await.unwrap();

        assert!(store.create(new_user("a@x.com")).await.unwrap().is_none());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = InMemoryUserStore::new();
        let user = store.create(new_user("a@x.com")).await.unwrap().unwrap();

        assert!(store.remove(user.id).is_some());
        assert!(store.find_by_id(user.id).await.unwrap().is_none());
        assert!(store.is_empty());
    }
}

use sqlx::{postgres::PgRow, PgPool, Row};
use anyhow::{Context, Result};
use async_trait::async_trait;
use crate::domains::auth::models::user::{Location, NewUser, User};

/// 사용자 저장소 인터페이스
/// User store interface
///
/// 서비스는 이 trait만 참조한다 (PostgreSQL / in-memory 교체 가능)
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn find_by_id(&self, id: u64) -> Result<Option<User>>;
    /// 이메일이 이미 있으면 Ok(None)
    /// Returns Ok(None) when the email is already taken
    async fn create(&self, user: NewUser) -> Result<Option<User>>;
}

/// PostgreSQL 사용자 저장소
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &PgRow) -> User {
        let lat: Option<f64> = row.get("lat");
        let lon: Option<f64> = row.get("lon");

        User {
            id: row.get::<i64, _>("id") as u64,
            email: row.get("email"),
            name: row.get("name"),
            password_hash: row.get("password_hash"),
            location: lat.zip(lon).map(|(lat, lon)| Location { lat, lon }),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    // 이메일로 사용자 조회 (로그인용)
    // Get user by email (for login)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, name, password_hash, lat, lon, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by email")?;

        Ok(row.as_ref().map(Self::map_row))
    }

    // ID로 사용자 조회
    // Get user by ID
    async fn find_by_id(&self, id: u64) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, name, password_hash, lat, lon, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id as i64)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by id")?;

        Ok(row.as_ref().map(Self::map_row))
    }

    async fn create(&self, user: NewUser) -> Result<Option<User>> {
        // 이메일 UNIQUE 제약: 충돌 시 아무 행도 반환하지 않음
        let row = sqlx::query(
            r#"
            INSERT INTO users (email, name, password_hash, lat, lon, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, name, password_hash, lat, lon, created_at, updated_at
            "#,
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(user.location.map(|l| l.lat))
        .bind(user.location.map(|l| l.lon))
        .fetch_optional(&self.pool)
        .await
        .context("Failed to create user")?;

        Ok(row.as_ref().map(Self::map_row))
    }
}

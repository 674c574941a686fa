use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// 위치 좌표 (위도/경도)
/// Coordinates as given at signup (no geocoding)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    #[schema(example = 37.5665)]
    pub lat: f64,
    #[schema(example = 126.978)]
    pub lon: f64,
}

/// 사용자 모델 (저장소 레코드, 비밀번호 해시 포함)
/// User record as held by the store
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub location: Option<Location>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 새 사용자 생성 데이터 (검증/해싱 완료 상태)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub location: Option<Location>,
}

// 사용자 응답 모델 (비밀번호 제외)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = UserResponse)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "user@example.com")]
    pub email: String,

    #[schema(example = "John Doe")]
    pub name: String,

    pub location: Option<Location>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            location: user.location,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

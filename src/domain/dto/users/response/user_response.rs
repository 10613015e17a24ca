use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{Address, User};

/// 목록 조회 응답의 사용자 항목
///
/// `password_hash`는 포함하지 않습니다. `created_at`은 RFC 3339 문자열입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub age: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            username,
            display_name,
            age,
            address,
            created_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            username,
            display_name,
            age,
            address,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

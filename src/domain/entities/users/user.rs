//! 사용자 엔티티
//!
//! 저장소에 보관되는 사용자 문서입니다. MongoDB 컬렉션 `users`의 문서 구조와
//! 1:1로 대응하며, 클라이언트 응답에는 [`UserResponse`](crate::domain::dto::users::response::UserResponse)로
//! 변환하여 `password_hash`를 노출하지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 주소
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    pub city: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 저장 시 저장소가 할당하는 ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub age: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// bcrypt 해시
    pub password_hash: String,
    pub created_at: DateTime,
}

impl User {
    /// 가입 요청으로부터 저장 전 사용자를 생성합니다.
    pub fn new_local(
        email: String,
        username: String,
        display_name: String,
        age: u32,
        address: Option<Address>,
        password_hash: String,
    ) -> Self {
        Self {
            id: None,
            email,
            username,
            display_name,
            age,
            address,
            password_hash,
            created_at: DateTime::now(),
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

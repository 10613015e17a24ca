//! 사용자 저장소 계약과 MongoDB 구현
//!
//! 핸들러와 서비스는 [`UserRepository`] trait에만 의존합니다.
//! 운영 환경에서는 [`MongoUserRepository`]를, 로컬 실행과 테스트에서는
//! [`InMemoryUserRepository`](super::memory_repo::InMemoryUserRepository)를 주입합니다.
//!
//! ## 실패 분류 (MongoDB)
//!
//! | 드라이버 에러 | 분류 |
//! |---------------|------|
//! | 쓰기 에러 코드 11000 (duplicate key) | `Duplicate { field }` |
//! | 쓰기 에러 코드 121 (document validation) | `Rejected` |
//! | IO, 서버 선택 실패, `RetryableWriteError`/`TransientTransactionError` 라벨 | `Unavailable` |
//! | 그 외 | `Unexpected` |

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, Document};
use mongodb::error::{ErrorKind, WriteFailure, RETRYABLE_WRITE_ERROR, TRANSIENT_TRANSACTION_ERROR};
use mongodb::options::{Collation, CollationStrength, IndexOptions};
use mongodb::{Collection, IndexModel};
use crate::core::errors::PersistenceError;
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::domain::models::{Page, PageRequest};

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

const DUPLICATE_KEY_CODE: i32 = 11000;
const DOCUMENT_VALIDATION_CODE: i32 = 121;

/// 사용자 저장소 계약
///
/// 각 메서드는 한 번의 저장소 호출만 수행하며 재시도하지 않습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 사용자를 저장하고 ID가 할당된 사용자를 반환합니다.
    async fn save(&self, user: User) -> Result<User, PersistenceError>;

    /// 요청한 페이지를 조회합니다. 범위를 벗어난 페이지는 빈 `content`를 반환합니다.
    async fn find_page(&self, request: &PageRequest) -> Result<Page<User>, PersistenceError>;
}

/// MongoDB `users` 컬렉션 기반 저장소
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    /// 고유 인덱스와 정렬 인덱스를 생성합니다.
    ///
    /// 중복 가입 감지는 `email_unique`, `username_unique` 인덱스에 의존합니다.
    pub async fn create_indexes(&self) -> Result<(), PersistenceError> {
        // 이메일 고유성은 대소문자를 구분하지 않음
        let case_insensitive = Collation::builder()
            .locale("en".to_string())
            .strength(CollationStrength::Secondary)
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .collation(case_insensitive)
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": 1 })
            .options(IndexOptions::builder()
                .name("created_at_asc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, username_index, created_at_index])
            .await
            .map_err(classify_mongo_error)?;

        info!("✅ users 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn save(&self, mut user: User) -> Result<User, PersistenceError> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(classify_mongo_error)?;

        user.id = result.inserted_id.as_object_id();
        debug!("사용자 저장됨: {:?}", user.id);

        Ok(user)
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<User>, PersistenceError> {
        let total = self.collection()
            .count_documents(doc! {})
            .await
            .map_err(classify_mongo_error)?;

        // 범위를 벗어난 페이지는 조회하지 않음 (skip 값이 i64 범위를 넘지 않도록)
        let Some(skip) = skip_within(request, total) else {
            return Ok(Page::new(Vec::new(), request, total));
        };

        let direction = request.sort.direction.as_i32();
        let mut sort = Document::new();
        sort.insert(request.sort.property.field_name(), direction);
        // 동일 값 사이의 순서 고정
        sort.insert("_id", direction);

        let users: Vec<User> = self.collection()
            .find(doc! {})
            .sort(sort)
            .skip(skip)
            .limit(i64::try_from(request.size).unwrap_or(i64::MAX))
            .await
            .map_err(classify_mongo_error)?
            .try_collect()
            .await
            .map_err(classify_mongo_error)?;

        Ok(Page::new(users, request, total))
    }
}

/// MongoDB 드라이버 에러를 저장소 실패 분류로 변환합니다.
pub fn classify_mongo_error(error: mongodb::error::Error) -> PersistenceError {
    if let ErrorKind::Write(WriteFailure::WriteError(write_error)) = error.kind.as_ref() {
        match write_error.code {
            DUPLICATE_KEY_CODE => {
                return PersistenceError::Duplicate {
                    field: duplicate_field(&write_error.message),
                };
            }
            DOCUMENT_VALIDATION_CODE => {
                return PersistenceError::Rejected(
                    "user document was rejected by the storage schema".to_string(),
                );
            }
            _ => {}
        }
    }

    let transient = error.contains_label(RETRYABLE_WRITE_ERROR)
        || error.contains_label(TRANSIENT_TRANSACTION_ERROR)
        || matches!(
            error.kind.as_ref(),
            ErrorKind::Io(_) | ErrorKind::ServerSelection { .. }
        );

    if transient {
        PersistenceError::Unavailable(error.to_string())
    } else {
        PersistenceError::Unexpected(error.to_string())
    }
}

/// 요청 페이지의 시작 위치가 전체 문서 수 안에 있으면 그 위치를 반환합니다.
fn skip_within(request: &PageRequest, total: u64) -> Option<u64> {
    let offset = request.offset();
    (offset < total).then_some(offset)
}

/// duplicate key 메시지의 인덱스 이름에서 필드 이름을 추출합니다.
///
/// `E11000 duplicate key error collection: db.users index: email_unique dup key: { ... }`
/// → `email`
fn duplicate_field(message: &str) -> String {
    message
        .split("index: ")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .map(|index| index.trim_end_matches("_unique").trim_end_matches("_1").to_string())
        .filter(|field| !field.is_empty())
        .unwrap_or_else(|| "key".to_string())
}

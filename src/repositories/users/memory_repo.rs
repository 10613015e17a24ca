//! 프로세스 메모리 기반 사용자 저장소
//!
//! `STORAGE_BACKEND=memory`로 MongoDB 없이 서비스를 실행하거나,
//! 핸들러 테스트에서 실제 저장 동작을 검증할 때 사용합니다.
//! MongoDB 구현과 같은 고유 제약(이메일은 대소문자 무시)과 페이지 규칙을 따릅니다.

use std::cmp::Ordering;
use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::core::errors::PersistenceError;
use crate::domain::entities::users::User;
use crate::domain::models::{Page, PageRequest, SortDirection, SortProperty};
use super::user_repo::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> PersistenceError {
        PersistenceError::Unexpected("in-memory user store lock poisoned".to_string())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, mut user: User) -> Result<User, PersistenceError> {
        let mut users = self.users.write().map_err(|_| Self::poisoned())?;

        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(PersistenceError::Duplicate { field: "email".to_string() });
        }
        if users.iter().any(|u| u.username == user.username) {
            return Err(PersistenceError::Duplicate { field: "username".to_string() });
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<User>, PersistenceError> {
        let users = self.users.read().map_err(|_| Self::poisoned())?;

        let mut sorted: Vec<&User> = users.iter().collect();
        // 안정 정렬이므로 동일 값은 저장 순서를 유지
        sorted.sort_by(|a, b| {
            let ordering = compare(a, b, request.sort.property);
            match request.sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);
        let content = sorted
            .into_iter()
            .skip(offset)
            .take(size)
            .cloned()
            .collect();

        Ok(Page::new(content, request, users.len() as u64))
    }
}

fn compare(a: &User, b: &User, property: SortProperty) -> Ordering {
    match property {
        SortProperty::Email => a.email.cmp(&b.email),
        SortProperty::Username => a.username.cmp(&b.username),
        SortProperty::DisplayName => a.display_name.cmp(&b.display_name),
        SortProperty::Age => a.age.cmp(&b.age),
        SortProperty::CreatedAt => a.created_at.timestamp_millis().cmp(&b.created_at.timestamp_millis()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Sort;

    fn user(email: &str, username: &str, age: u32) -> User {
        User::new_local(
            email.to_string(),
            username.to_string(),
            username.to_string(),
            age,
            None,
            "hash".to_string(),
        )
    }

    async fn seeded() -> InMemoryUserRepository {
        let repo = InMemoryUserRepository::new();
        repo.save(user("carol@example.com", "carol", 41)).await.unwrap();
        repo.save(user("alice@example.com", "alice", 29)).await.unwrap();
        repo.save(user("bob@example.com", "bob", 35)).await.unwrap();
        repo
    }

    #[actix_web::test]
    async fn test_save_assigns_id() {
        let repo = InMemoryUserRepository::new();

        let saved = repo.save(user("a@example.com", "a_user", 20)).await.unwrap();

        assert!(saved.id.is_some());
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_case_insensitive() {
        let repo = seeded().await;

        let result = repo.save(user("ALICE@example.com", "alice2", 20)).await;

        assert_eq!(result, Err(PersistenceError::Duplicate { field: "email".to_string() }));
    }

    #[actix_web::test]
    async fn test_duplicate_username() {
        let repo = seeded().await;

        let result = repo.save(user("new@example.com", "bob", 20)).await;

        assert_eq!(result, Err(PersistenceError::Duplicate { field: "username".to_string() }));
    }

    #[actix_web::test]
    async fn test_default_order_is_insertion_order() {
        let repo = seeded().await;

        let page = repo.find_page(&PageRequest::of(0, 10)).await.unwrap();

        let names: Vec<&str> = page.content.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["carol", "alice", "bob"]);
        assert_eq!(page.total_elements, 3);
    }

    #[actix_web::test]
    async fn test_sorted_paging() {
        let repo = seeded().await;
        let sort = Sort {
            property: SortProperty::Age,
            direction: SortDirection::Desc,
        };

        let first = repo.find_page(&PageRequest::of(0, 2).with_sort(sort)).await.unwrap();
        let second = repo.find_page(&PageRequest::of(1, 2).with_sort(sort)).await.unwrap();

        let ages: Vec<u32> = first.content.iter().chain(second.content.iter()).map(|u| u.age).collect();
        assert_eq!(ages, vec![41, 35, 29]);
    }

    #[actix_web::test]
    async fn test_out_of_range_page_is_empty() {
        let repo = seeded().await;

        let page = repo.find_page(&PageRequest::of(99, 10)).await.unwrap();

        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 3);
    }

    #[actix_web::test]
    async fn test_huge_page_number_is_empty() {
        let repo = seeded().await;

        let page = repo.find_page(&PageRequest::of(u64::MAX, 100)).await.unwrap();

        assert!(page.content.is_empty());
    }
}

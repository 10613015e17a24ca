//! 사용자 데이터 액세스 계층
//!
//! - [`MongoUserRepository`]: MongoDB `users` 컬렉션
//! - [`InMemoryUserRepository`]: 프로세스 메모리 (로컬 실행, 테스트)

pub mod memory_repo;
pub mod user_repo;

pub use memory_repo::InMemoryUserRepository;
pub use user_repo::{MongoUserRepository, UserRepository, USERS_COLLECTION};

#[cfg(test)]
pub use user_repo::MockUserRepository;

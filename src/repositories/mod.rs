//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserRepository`](users::UserRepository) trait 객체에만 의존하며,
//! 실행 시점에 `STORAGE_BACKEND` 설정에 따라 구현체가 선택됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let page = user_repo.find_page(&PageRequest::of(0, 20)).await?;
//! ```

pub mod users;

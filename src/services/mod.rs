//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체를 주입받아 생성되며,
//! `web::Data`로 핸들러에 전달됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = web::Data::new(UserService::new(user_repo, PaginationConfig::load(), cost));
//! ```

pub mod users;

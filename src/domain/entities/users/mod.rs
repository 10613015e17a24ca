//! Users Entity Module
//!
//! 사용자 도메인의 저장 엔티티를 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new_local(
//!     "user@example.com".to_string(),
//!     "new_user".to_string(),
//!     "New User".to_string(),
//!     30,
//!     None,
//!     hashed_password,
//! );
//! ```

pub mod user;

pub use user::{Address, User};

//! 사용자 요청 DTO
//!
//! - [`SignupRequest`]: 회원가입 본문 (필드 검증 포함)
//! - [`PageQuery`]: 목록 조회 페이지 파라미터

pub mod page_query;
pub mod signup_request;

pub use page_query::PageQuery;
pub use signup_request::{AddressRequest, SignupRequest};

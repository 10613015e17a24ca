//! # Data Transfer Objects
//!
//! HTTP 요청 본문/쿼리와 응답 본문의 형태를 정의합니다.
//!
//! - [`common`]: 모든 엔드포인트가 공유하는 성공/실패 응답
//! - [`users`]: 사용자 가입/목록 요청과 응답

pub mod common;
pub mod users;

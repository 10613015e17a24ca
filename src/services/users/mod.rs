//! 사용자 관리 서비스 모듈
//!
//! 회원가입과 사용자 목록 조회를 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost)
//! - 응답 DTO에서 비밀번호 해시 제외

pub mod user_service;

pub use user_service::UserService;

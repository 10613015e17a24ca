//! # Domain Layer
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 저장 엔티티 (User)
//! ├── models/       ← 저장소 계약 값 타입 (PageRequest, Page)
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```

pub mod entities;
pub mod dto;
pub mod models;

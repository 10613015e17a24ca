//! 사용자 서비스 백엔드
//!
//! 사용자 목록 조회와 회원가입을 제공하는 Actix-web REST 서비스입니다.
//! 모든 실패는 하나의 에러 타입(`AppError`)을 거쳐 구조화된 `ErrorResponse`로 응답합니다.
//!
//! # Features
//!
//! - **목록 조회**: `GET /users`, 페이지/크기/정렬 파라미터
//! - **회원가입**: `POST /api/signup`, 필드 제약 검증과 bcrypt 해싱
//! - **에러 계약**: 위반 필드별 `fields` 항목, 5xx 상세 정보 비노출
//! - **저장소 선택**: MongoDB 또는 메모리 (`STORAGE_BACKEND`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, 추출기 에러 설정
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserRepository trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB | Memory│ ← 저장소
//! └─────────────────┘
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;

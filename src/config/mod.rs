//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 저장소, 서버, 환경, 비밀번호 해싱 설정
//! - [`http_config`] - CORS, Rate Limiting, 페이지 크기 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//!
//! # 저장소 설정 (mongodb | memory)
//! export STORAGE_BACKEND="mongodb"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_service_dev"
//!
//! # HTTP 설정
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//! export PAGE_DEFAULT_SIZE="20"
//! export PAGE_MAX_SIZE="100"
//!
//! # 보안 설정
//! export BCRYPT_COST="12"
//! ```

pub mod data_config;
pub mod http_config;

pub use data_config::*;
pub use http_config::*;

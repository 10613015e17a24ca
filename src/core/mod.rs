//! # Core Module
//!
//! 서비스 전반에서 사용하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **PersistenceError**: 저장소 실패 분류 (영구/일시/미분류)
//! - **HTTP 통합**: `ResponseError` 구현이 모든 실패를 JSON 응답으로 변환
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 모듈 |
//! |--------|---------|
//! | `@ExceptionHandler(ConstraintViolationException)` | `AppError::ValidationError` |
//! | `@ExceptionHandler(Exception)` | `AppError::InternalError` + 서버 로그 |
//! | `ResponseEntity<ErrorResponse>` | `HttpResponse::build().json()` |

pub mod errors;

pub use errors::*;

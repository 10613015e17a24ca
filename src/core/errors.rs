//! # Application Error Handling System
//!
//! 서비스 전역의 실패 분류와 HTTP 응답 변환을 담당합니다.
//! Spring의 글로벌 `@ExceptionHandler` 역할을 `actix_web::ResponseError` 구현 하나가
//! 수행하며, 모든 핸들러의 `Err`는 이 구현을 거쳐 JSON 응답이 됩니다.
//!
//! ## 실패 분류
//!
//! | 분류 | 변형 | 상태 코드 | 클라이언트 응답 |
//! |------|------|-----------|-----------------|
//! | 검증 실패 | `ValidationError` | 400 | 필드별 `ErrorResponse` |
//! | 잘못된 본문 | `MalformedBody` | 400 | 고정 메시지 |
//! | 중복/거부 | `PersistenceError::Duplicate` / `Rejected` | 400 | 실패 설명 |
//! | 일시적 저장소 장애 | `PersistenceError::Unavailable` | 503 | 고정 메시지 |
//! | 미분류 | 그 외 | 500 | `internal error` |
//!
//! 5xx 응답은 원인을 서버 로그에만 남기고 클라이언트에는 내부 정보를 노출하지 않습니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppResult, ErrorContext};
//!
//! async fn signup(&self, request: SignupRequest) -> AppResult<()> {
//!     let password_hash = hash(&request.password, cost).context("password hashing failed")?;
//!     self.user_repo.save(user).await?;
//!     Ok(())
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{error, warn};
use thiserror::Error;
use crate::domain::dto::common::ErrorResponse;
use crate::utils::validation::Violation;

/// 본문 파싱 실패 시 클라이언트에게 보내는 메시지
pub const MALFORMED_BODY_MESSAGE: &str = "Malformed request body";

/// 일시적 저장소 장애 시 클라이언트에게 보내는 메시지
pub const UNAVAILABLE_MESSAGE: &str = "storage temporarily unavailable";

/// 미분류 실패 시 클라이언트에게 보내는 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "internal error";

/// 저장소 계층 실패
///
/// 저장소 구현체는 드라이버 에러를 이 분류로 변환하여 반환합니다.
/// 재시도는 어느 계층에서도 하지 않습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// 고유 제약 위반 (영구적)
    #[error("a user with this {field} already exists")]
    Duplicate { field: String },

    /// 저장소가 문서를 거부함 (영구적)
    #[error("{0}")]
    Rejected(String),

    /// 연결 실패, 서버 선택 타임아웃 등 (일시적)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// 분류되지 않은 저장소 실패
    #[error("unexpected storage failure: {0}")]
    Unexpected(String),
}

/// 애플리케이션 전역 에러 타입
///
/// 핸들러는 `Result<HttpResponse, AppError>`를 반환하고,
/// `ResponseError` 구현이 상태 코드와 본문을 결정합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필드 제약 위반 (400 Bad Request)
    #[error("Validation error: {} violation(s)", .0.len())]
    ValidationError(Vec<Violation>),

    /// JSON 본문 또는 쿼리 문자열 해석 실패 (400 Bad Request)
    #[error("Malformed request: {0}")]
    MalformedBody(String),

    /// 저장 작업 실패 (분류에 따라 400/503/500)
    #[error("Persistence error: {0}")]
    PersistenceError(#[from] PersistenceError),

    /// 미분류 실패 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::PersistenceError(PersistenceError::Duplicate { .. })
            | AppError::PersistenceError(PersistenceError::Rejected(_)) => StatusCode::BAD_REQUEST,
            AppError::PersistenceError(PersistenceError::Unavailable(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 에러 변형을 `ErrorResponse` JSON으로 변환합니다.
    ///
    /// 5xx 응답의 상세 원인은 여기서 로그로 남깁니다.
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(violations) => ErrorResponse::from_violations(violations),
            AppError::MalformedBody(detail) => {
                warn!("잘못된 요청 본문: {}", detail);
                ErrorResponse::new(MALFORMED_BODY_MESSAGE)
            }
            AppError::PersistenceError(failure @ PersistenceError::Duplicate { field }) => {
                let message = failure.to_string();
                ErrorResponse::new(message.clone()).with_field(field.clone(), message)
            }
            AppError::PersistenceError(PersistenceError::Rejected(reason)) => {
                ErrorResponse::new(reason.clone())
            }
            AppError::PersistenceError(failure @ PersistenceError::Unavailable(_)) => {
                warn!("일시적 저장소 장애: {}", failure);
                ErrorResponse::new(UNAVAILABLE_MESSAGE)
            }
            other => {
                error!("처리되지 않은 실패: {}", other);
                ErrorResponse::new(INTERNAL_ERROR_MESSAGE)
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// 변환된 에러는 미분류 실패(`InternalError`)로 취급됩니다.
///
/// ```rust,ignore
/// let hashed = bcrypt::hash(&password, cost).context("password hashing failed")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

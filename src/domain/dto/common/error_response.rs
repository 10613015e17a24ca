//! 구조화된 에러 응답 DTO
//!
//! 필드 단위 검증 실패를 하나의 JSON 응답으로 묶어 클라이언트에게 전달합니다.
//! 클라이언트는 `fields` 배열의 `field` 키를 기준으로 폼 입력칸에 메시지를 표시합니다.
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "Invalid parameters",
//!   "fields": [
//!     { "field": "email", "message": "email must be a well-formed address" },
//!     { "field": "zip", "message": "zip must be 3-10 characters" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use crate::utils::validation::Violation;

/// 검증 실패 시 사용하는 최상위 메시지
pub const INVALID_PARAMETERS_MESSAGE: &str = "Invalid parameters";

/// 필드 하나에 대한 에러 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// 실패 응답 본문
///
/// `success`는 생성 시 항상 `false`입니다. `fields`는 위반된 제약 하나당
/// 항목 하나를 가지며, 같은 필드에 여러 제약이 걸려 있으면 같은 키가
/// 여러 번 나타날 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub fields: Vec<FieldError>,
}

impl ErrorResponse {
    /// 필드 항목이 없는 실패 응답을 생성합니다.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// 제약 위반 목록으로부터 실패 응답을 생성합니다.
    ///
    /// 각 위반의 점(`.`) 구분 경로 중 마지막 세그먼트만 필드 키로 사용합니다.
    /// 입력 순서를 그대로 유지하며 중복 제거나 정렬은 하지 않습니다.
    ///
    /// | 경로 | 필드 키 |
    /// |------|---------|
    /// | `email` | `email` |
    /// | `user.address.zip` | `zip` |
    /// | `""` | `""` |
    ///
    /// # Examples
    ///
    /// ```rust
    /// use user_service_backend::domain::dto::common::ErrorResponse;
    /// use user_service_backend::utils::validation::Violation;
    ///
    /// let violations = vec![Violation::new("address.zip", "invalid zip")];
    /// let response = ErrorResponse::from_violations(&violations);
    ///
    /// assert!(!response.success);
    /// assert_eq!(response.fields[0].field, "zip");
    /// ```
    pub fn from_violations<'a, I>(violations: I) -> Self
    where
        I: IntoIterator<Item = &'a Violation>,
    {
        violations
            .into_iter()
            .fold(Self::new(INVALID_PARAMETERS_MESSAGE), |response, violation| {
                response.with_field(last_segment(&violation.path), &violation.message)
            })
    }

    /// 필드 에러 항목을 하나 추가합니다.
    pub fn with_field(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.fields.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
        self
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or_default()
}

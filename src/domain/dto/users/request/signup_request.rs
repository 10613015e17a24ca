//! 회원가입 요청 DTO
//!
//! `POST /api/signup` 본문입니다. 누락된 필드는 빈 값으로 채워져
//! 역직렬화 실패가 아닌 필드 제약 위반으로 보고됩니다.
//!
//! ```json
//! {
//!   "email": "user@example.com",
//!   "username": "new_user",
//!   "display_name": "New User",
//!   "age": 30,
//!   "address": { "city": "Seoul", "zip": "04524" },
//!   "password": "Password123"
//! }
//! ```

use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError};
use crate::domain::entities::users::Address;
use crate::utils::string_utils::{deserialize_optional_string, deserialize_trimmed_string};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SignupRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "email must not be blank"))]
    #[validate(custom(function = "validate_email_format"))]
    pub email: String,

    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 3, max = 30, message = "username must be 3-30 characters"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 50, message = "display_name must be 1-50 characters"))]
    pub display_name: String,

    // 음수도 역직렬화 후 범위 위반으로 보고
    #[validate(range(min = 1, max = 150, message = "age must be between 1 and 150"))]
    pub age: i64,

    #[validate(nested)]
    pub address: Option<AddressRequest>,

    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct AddressRequest {
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub street: Option<String>,

    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 100, message = "city must be 1-100 characters"))]
    pub city: String,

    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 3, max = 10, message = "zip must be 3-10 characters"))]
    #[validate(custom(function = "validate_zip"))]
    pub zip: String,
}

impl From<AddressRequest> for Address {
    fn from(request: AddressRequest) -> Self {
        Self {
            street: request.street,
            city: request.city,
            zip: request.zip,
        }
    }
}

/// 빈 값은 필수값 검증에서만 보고합니다.
fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || email.validate_email() {
        return Ok(());
    }
    Err(ValidationError::new("email")
        .with_message("email must be a well-formed address".into()))
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    // 알파벳, 숫자, 언더스코어만 허용
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("username may contain only letters, digits and underscores".into()));
    }
    Ok(())
}

fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("password must contain upper case, lower case and digit characters".into()));
    }

    Ok(())
}

fn validate_zip(zip: &str) -> Result<(), ValidationError> {
    if !zip.chars().all(|c| c.is_ascii_digit() || c == '-') {
        return Err(ValidationError::new("invalid_zip")
            .with_message("zip may contain only digits and '-'".into()));
    }
    Ok(())
}

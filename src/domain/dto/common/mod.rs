//! 모든 엔드포인트가 공유하는 응답 DTO

pub mod error_response;
pub mod response_json;

pub use error_response::{ErrorResponse, FieldError, INVALID_PARAMETERS_MESSAGE};
pub use response_json::ResponseJson;

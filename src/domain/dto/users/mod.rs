//! 사용자 관련 DTO

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;

//! API 라우트 설정 모듈
//!
//! 사용자 엔드포인트와 헬스체크를 등록하고, 요청 추출 실패를
//! `AppError::MalformedBody`로 변환하는 추출기 설정을 한 곳에서 적용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(user_service.clone())
//!     .configure(configure_all_routes);
//! ```

use actix_web::{error, web, HttpRequest, HttpResponse};
use serde_json::json;
use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /health` - 헬스체크
/// - `GET /users` - 사용자 목록 (페이징)
/// - `POST /api/signup` - 회원가입
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// JSON 본문과 쿼리 문자열 추출 실패를 공통 에러 응답으로 변환합니다.
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler));
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::MalformedBody(err.to_string()).into()
}

fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::MalformedBody(err.to_string()).into()
}

/// 사용자 관련 라우트를 설정합니다
///
/// ```bash
/// curl "http://localhost:8080/users?page=0&size=10&sort=created_at,desc"
///
/// curl -X POST http://localhost:8080/api/signup \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","username":"newuser","display_name":"New","age":30,"password":"Password123"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::list_users)
        .service(handlers::users::signup);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

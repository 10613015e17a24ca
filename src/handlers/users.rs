//! # User HTTP Handlers
//!
//! 사용자 목록 조회와 회원가입 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | `GET` | `/users` | 200, 사용자 JSON 배열 | 400 (잘못된 `sort`), 500 |
//! | `POST` | `/api/signup` | 200, `{"success":true}` | 400 (검증/중복/거부), 503 (일시 장애), 500 |
//!
//! 실패 응답 본문은 모두 `ErrorResponse` 형태이며, 상태 코드와 본문은
//! `AppError`의 `ResponseError` 구현이 결정합니다.
//!
//! ## 검증 실패 응답 (400 Bad Request)
//! ```json
//! {
//!   "success": false,
//!   "message": "Invalid parameters",
//!   "fields": [
//!     { "field": "age", "message": "age must be between 1 and 150" },
//!     { "field": "email", "message": "email must be a well-formed address" }
//!   ]
//! }
//! ```

use actix_web::{web, HttpResponse, get, post};
use log::info;
use crate::core::errors::AppError;
use crate::domain::dto::common::ResponseJson;
use crate::domain::dto::users::request::{PageQuery, SignupRequest};
use crate::services::users::UserService;
use crate::utils::validation::validate_payload;

/// 사용자 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users?page=0&size=10&sort=email,desc`
///
/// # 응답
///
/// 페이지 메타데이터 없이 사용자 배열만 반환합니다.
/// 범위를 벗어난 페이지는 `[]`입니다.
///
/// ```json
/// [
///   {
///     "id": "507f1f77bcf86cd799439011",
///     "email": "user@example.com",
///     "username": "john_doe",
///     "display_name": "John Doe",
///     "age": 30,
///     "created_at": "2024-01-01T00:00:00Z"
///   }
/// ]
/// ```
#[get("/users")]
pub async fn list_users(
    service: web::Data<UserService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let users = service.list_users(&query).await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 회원가입 핸들러
///
/// # 엔드포인트
///
/// `POST /api/signup`
///
/// # 처리 순서
///
/// 1. JSON 역직렬화 (실패 시 400 `Malformed request body`)
/// 2. 본문이 `null`이면 미분류 실패 (500)
/// 3. 필드 제약 검증 (위반 시 400 `Invalid parameters` + 위반별 `fields` 항목)
/// 4. 저장 (중복/거부 400, 일시 장애 503)
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/signup \
///   -H "Content-Type: application/json" \
///   -d '{
///     "email": "newuser@example.com",
///     "username": "newuser",
///     "display_name": "New User",
///     "age": 30,
///     "password": "SecurePass123"
///   }'
/// ```
#[post("/api/signup")]
pub async fn signup(
    service: web::Data<UserService>,
    payload: web::Json<Option<SignupRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = payload
        .into_inner()
        .ok_or_else(|| AppError::InternalError("signup payload was null".to_string()))?;

    validate_payload(&request)?;

    let username = request.username.clone();
    service.signup(request).await?;
    info!("회원가입 성공: {}", username);

    Ok(HttpResponse::Ok().json(ResponseJson::succeeded()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::http::{header::ContentType, StatusCode};
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use crate::config::PaginationConfig;
    use crate::core::errors::PersistenceError;
    use crate::repositories::users::{InMemoryUserRepository, MockUserRepository, UserRepository};
    use crate::routes::configure_all_routes;
    use super::*;

    fn service_data(repo: Arc<dyn UserRepository>) -> web::Data<UserService> {
        web::Data::new(UserService::new(repo, PaginationConfig::default(), 4))
    }

    fn valid_signup() -> Value {
        json!({
            "email": "user@example.com",
            "username": "new_user",
            "display_name": "New User",
            "age": 30,
            "address": { "street": "1 Main St", "city": "Seoul", "zip": "04524" },
            "password": "Password123"
        })
    }

    macro_rules! init_app {
        ($repo:expr) => {
            test::init_service(
                App::new()
                    .app_data(service_data($repo))
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_signup_success() {
        let app = init_app!(Arc::new(InMemoryUserRepository::new()));

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(valid_signup())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": true }));
    }

    #[actix_web::test]
    async fn test_signup_reports_each_violation() {
        let app = init_app!(Arc::new(InMemoryUserRepository::new()));
        let mut payload = valid_signup();
        payload["email"] = json!("not-an-email");
        payload["age"] = json!(200);

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid parameters");
        let fields: Vec<&str> = body["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["age", "email"]);
    }

    #[actix_web::test]
    async fn test_signup_missing_email_and_bad_age_yields_two_fields() {
        let app = init_app!(Arc::new(InMemoryUserRepository::new()));
        let mut payload = valid_signup();
        payload.as_object_mut().unwrap().remove("email");
        payload["age"] = json!(200);

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        let fields = body["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0]["field"], "age");
        assert_eq!(fields[1]["field"], "email");
        assert_eq!(fields[1]["message"], "email must not be blank");
    }

    #[actix_web::test]
    async fn test_signup_negative_age_is_field_violation() {
        let app = init_app!(Arc::new(InMemoryUserRepository::new()));
        let mut payload = valid_signup();
        payload["age"] = json!(-1);

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid parameters");
        assert_eq!(body["fields"], json!([{ "field": "age", "message": "age must be between 1 and 150" }]));
    }

    #[actix_web::test]
    async fn test_signup_nested_violation_uses_last_segment() {
        let app = init_app!(Arc::new(InMemoryUserRepository::new()));
        let mut payload = valid_signup();
        payload["address"]["city"] = json!("");

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["fields"][0]["field"], "city");
    }

    #[actix_web::test]
    async fn test_signup_duplicate_is_bad_request() {
        let app = init_app!(Arc::new(InMemoryUserRepository::new()));

        let first = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(valid_signup())
            .to_request();
        assert_eq!(test::call_service(&app, first).await.status(), StatusCode::OK);

        let second = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(valid_signup())
            .to_request();
        let resp = test::call_service(&app, second).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "a user with this email already exists");
        assert_eq!(body["fields"][0]["field"], "email");
    }

    #[actix_web::test]
    async fn test_signup_storage_unavailable() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .times(1)
            .returning(|_| Err(PersistenceError::Unavailable("server selection timeout".to_string())));
        let app = init_app!(Arc::new(repo));

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(valid_signup())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "storage temporarily unavailable");
    }

    #[actix_web::test]
    async fn test_signup_unclassified_storage_failure_is_internal_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .times(1)
            .returning(|_| Err(PersistenceError::Unexpected("cursor killed on host db-1".to_string())));
        let app = init_app!(Arc::new(repo));

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(valid_signup())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": false, "message": "internal error", "fields": [] }));
    }

    #[actix_web::test]
    async fn test_signup_null_payload_is_internal_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_save().never();
        let app = init_app!(Arc::new(repo));

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .insert_header(ContentType::json())
            .set_payload("null")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": false, "message": "internal error", "fields": [] }));
    }

    #[actix_web::test]
    async fn test_signup_malformed_json() {
        let app = init_app!(Arc::new(InMemoryUserRepository::new()));

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .insert_header(ContentType::json())
            .set_payload("{\"email\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Malformed request body");
        assert!(body["fields"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_list_users_empty() {
        let app = init_app!(Arc::new(InMemoryUserRepository::new()));

        let req = test::TestRequest::get().uri("/users?page=0&size=10").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_list_users_after_signup() {
        let app = init_app!(Arc::new(InMemoryUserRepository::new()));
        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(valid_signup())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let users = body.as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["username"], "new_user");
        assert_eq!(users[0]["address"]["city"], "Seoul");
        assert!(users[0].get("password_hash").is_none());
        assert!(users[0].get("password").is_none());
    }

    #[actix_web::test]
    async fn test_list_users_out_of_range_page() {
        let app = init_app!(Arc::new(InMemoryUserRepository::new()));
        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(valid_signup())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/users?page=5&size=10").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_list_users_huge_page_number() {
        let app = init_app!(Arc::new(InMemoryUserRepository::new()));

        let req = test::TestRequest::get()
            .uri("/users?page=18446744073709551615&size=100")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_list_users_unknown_sort() {
        let app = init_app!(Arc::new(InMemoryUserRepository::new()));

        let req = test::TestRequest::get().uri("/users?sort=password_hash,asc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["fields"][0]["field"], "sort");
    }

    #[actix_web::test]
    async fn test_list_users_bad_query_type() {
        let app = init_app!(Arc::new(InMemoryUserRepository::new()));

        let req = test::TestRequest::get().uri("/users?page=abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_list_users_storage_failure_hides_detail() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_page()
            .returning(|_| Err(PersistenceError::Unexpected("cursor killed on host db-1".to_string())));
        let app = init_app!(Arc::new(repo));

        let req = test::TestRequest::get().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = test::read_body(resp).await;
        let text = String::from_utf8_lossy(&body);
        assert!(text.contains("internal error"));
        assert!(!text.contains("db-1"));
    }
}

//! 사용자 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 설정된 저장소(MongoDB 또는 메모리)를 초기화하고 사용자 목록/가입 API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_service_backend::config::{
    CorsConfig, PaginationConfig, PasswordConfig, RateLimitConfig, ServerConfig, StorageBackend,
    StorageConfig,
};
use user_service_backend::db::Database;
use user_service_backend::repositories::users::{
    InMemoryUserRepository, MongoUserRepository, UserRepository,
};
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 서비스 시작중...");

    let user_repo = initialize_user_repository().await?;

    let user_service = web::Data::new(UserService::new(
        user_repo,
        PaginationConfig::load(),
        PasswordConfig::bcrypt_cost(),
    ));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "RATE_LIMIT_PER_SECOND와 RATE_LIMIT_BURST_SIZE는 0보다 커야 합니다",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    info!("CORS 허용 Origin: {:?}", allowed_origins);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=user_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정된 저장소 구현을 초기화합니다
///
/// MongoDB 연결이나 인덱스 생성에 실패하면 서버를 시작하지 않습니다.
async fn initialize_user_repository() -> std::io::Result<Arc<dyn UserRepository>> {
    match StorageConfig::backend() {
        StorageBackend::InMemory => {
            warn!("⚠️ 메모리 저장소 사용 중: 재시작 시 데이터가 사라집니다");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new().await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
            })?;

            let user_repo = MongoUserRepository::new(Arc::new(database));
            user_repo.create_indexes().await.map_err(|e| {
                error!("인덱스 생성 실패: {}", e);
                std::io::Error::other(e.to_string())
            })?;

            Ok(Arc::new(user_repo))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`(쉼표 구분)에 나열된 Origin만 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

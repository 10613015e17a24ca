//! HTTP 계층 설정
//!
//! CORS 허용 Origin, Rate Limiting, 페이지 크기 제한을 환경 변수에서 읽어옵니다.

use std::env;
use log::error;

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록을 반환합니다.
    ///
    /// `CORS_ALLOWED_ORIGINS`는 쉼표로 구분된 목록이며,
    /// 설정되지 않은 경우 React 개발 서버(`http://localhost:3000`)만 허용합니다.
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref())
    }

    pub fn parse_origins(value: Option<&str>) -> Vec<String> {
        let origins: Vec<String> = value
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            vec!["http://localhost:3000".to_string()]
        } else {
            origins
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn load() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self {
            per_second,
            burst_size,
        }
    }
}

/// 목록 조회 페이지 크기 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// `size`가 없거나 0일 때 사용하는 크기
    pub default_size: u64,
    /// 허용하는 최대 크기. 초과 요청은 이 값으로 잘립니다.
    pub max_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_size: 20,
            max_size: 100,
        }
    }
}

impl PaginationConfig {
    /// `PAGE_DEFAULT_SIZE`, `PAGE_MAX_SIZE`에서 설정을 읽습니다.
    ///
    /// 기본 크기가 최대 크기보다 크면 최대 크기로 맞춥니다.
    pub fn load() -> Self {
        let defaults = Self::default();
        let read = |key: &str, fallback: u64| {
            env::var(key)
                .ok()
                .and_then(|value| value.parse::<u64>().ok())
                .filter(|value| *value > 0)
                .unwrap_or(fallback)
        };

        let max_size = read("PAGE_MAX_SIZE", defaults.max_size);
        let default_size = read("PAGE_DEFAULT_SIZE", defaults.default_size).min(max_size);

        Self {
            default_size,
            max_size,
        }
    }
}

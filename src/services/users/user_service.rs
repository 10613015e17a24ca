//! # 사용자 관리 서비스 구현
//!
//! 회원가입과 사용자 목록 조회의 비즈니스 로직을 담당합니다.
//! 요청 검증은 핸들러에서 끝난 상태로 들어오며, 서비스는 저장소 호출과
//! 엔티티/DTO 변환만 수행합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UserService                  │
//! │                                              │
//! │  signup      : 해싱 → User 생성 → save       │
//! │  list_users  : 쿼리 정규화 → find_page → DTO │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │        Arc<dyn UserRepository>               │
//! │  MongoUserRepository | InMemoryUserRepository│
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## 실패 전파
//!
//! - 가입 저장 실패: [`PersistenceError`] 분류 그대로 전파 (400/503/500 결정은 `AppError`)
//! - 목록 조회 실패: 분류와 관계없이 `InternalError`

use std::sync::Arc;
use std::time::Instant;
use bcrypt::hash;
use log::{debug, info};
use crate::config::PaginationConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::users::request::{PageQuery, SignupRequest};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::User;
use crate::repositories::users::UserRepository;

/// 사용자 관리 비즈니스 로직 서비스
///
/// `web::Data<UserService>`로 워커 간에 공유됩니다.
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<dyn UserRepository>,
    pagination: PaginationConfig,
    /// 환경별 bcrypt cost
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, pagination: PaginationConfig, bcrypt_cost: u32) -> Self {
        Self {
            user_repo,
            pagination,
            bcrypt_cost,
        }
    }

    /// 검증을 통과한 가입 요청으로 사용자를 생성합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 저장 완료
    /// * `Err(AppError::PersistenceError)` - 중복, 거부, 일시 장애 등 저장 실패
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    ///
    /// # 로깅
    ///
    /// ```text
    /// [INFO] Password hashing took: 156ms
    /// [INFO] Total signup took: 234ms
    /// ```
    pub async fn signup(&self, request: SignupRequest) -> AppResult<()> {
        let start_time = Instant::now();

        let hash_start = Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost)
            .context("password hashing failed")?;
        info!("Password hashing took: {:?}", hash_start.elapsed());

        let age = u32::try_from(request.age)
            .with_context(|| format!("age {} out of range after validation", request.age))?;

        let user = User::new_local(
            request.email,
            request.username,
            request.display_name,
            age,
            request.address.map(Into::into),
            password_hash,
        );

        let saved = self.user_repo.save(user).await?;

        debug!("가입 완료: {:?}", saved.id_string());
        info!("Total signup took: {:?}", start_time.elapsed());

        Ok(())
    }

    /// 요청한 페이지의 사용자 목록을 반환합니다.
    ///
    /// 페이지 메타데이터는 응답에 포함하지 않고 `content`만 반환합니다.
    /// 잘못된 `sort` 값은 `ValidationError`로, 저장소 실패는 `InternalError`로 반환합니다.
    pub async fn list_users(&self, query: &PageQuery) -> AppResult<Vec<UserResponse>> {
        let request = query.to_page_request(&self.pagination)?;

        let page = self.user_repo
            .find_page(&request)
            .await
            .map_err(|e| AppError::InternalError(format!("user listing failed: {}", e)))?;

        debug!(
            "사용자 목록 조회: page={}, size={}, total={}",
            page.number, page.size, page.total_elements
        );

        Ok(page.map(UserResponse::from).into_content())
    }
}

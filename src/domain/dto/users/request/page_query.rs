//! 사용자 목록 조회 쿼리 DTO
//!
//! `GET /users?page=0&size=10&sort=email,desc`
//!
//! | 파라미터 | 기본값 | 규칙 |
//! |----------|--------|------|
//! | `page` | 0 | 0부터 시작 |
//! | `size` | 설정값(20) | 0이면 기본값, 최대값 초과 시 최대값으로 잘림 |
//! | `sort` | `created_at,asc` | `속성[,asc\|desc]` |

use serde::Deserialize;
use crate::config::PaginationConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::{PageRequest, Sort, SortDirection, SortProperty};
use crate::utils::validation::Violation;

const SORT_FIELD: &str = "sort";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
    pub sort: Option<String>,
}

impl PageQuery {
    /// 쿼리를 정규화된 [`PageRequest`]로 변환합니다.
    ///
    /// 알 수 없는 정렬 속성이나 방향은 `sort` 필드의 검증 실패로 반환합니다.
    pub fn to_page_request(&self, config: &PaginationConfig) -> AppResult<PageRequest> {
        let size = match self.size {
            None | Some(0) => config.default_size,
            Some(size) => size.min(config.max_size),
        };

        let sort = match self.sort.as_deref().map(str::trim) {
            None | Some("") => Sort::default(),
            Some(raw) => parse_sort(raw)
                .map_err(|message| AppError::ValidationError(vec![Violation::new(SORT_FIELD, message)]))?,
        };

        Ok(PageRequest::of(self.page.unwrap_or(0), size).with_sort(sort))
    }
}

fn parse_sort(raw: &str) -> Result<Sort, String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();

    let (property, direction) = match parts.as_slice() {
        [property] => (*property, None),
        [property, direction] => (*property, Some(*direction)),
        _ => return Err(format!("sort must be 'property[,asc|desc]', got '{}'", raw)),
    };

    let property = SortProperty::parse(property)
        .ok_or_else(|| format!("unknown sort property '{}'", property))?;

    let direction = match direction {
        None => SortDirection::default(),
        Some(direction) => SortDirection::parse(direction)
            .ok_or_else(|| format!("sort direction must be asc or desc, got '{}'", direction))?,
    };

    Ok(Sort {
        property,
        direction,
    })
}

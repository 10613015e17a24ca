//! 페이지 단위 조회 모델
//!
//! 저장소 계약(`find_page`)이 주고받는 값 타입입니다.
//! HTTP 쿼리 해석은 [`crate::domain::dto::users::request::PageQuery`]가 담당하고,
//! 여기서는 이미 정규화된 값만 다룹니다.

use serde::Serialize;

/// 정렬 가능한 사용자 속성
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortProperty {
    Email,
    Username,
    DisplayName,
    Age,
    CreatedAt,
}

impl SortProperty {
    /// 쿼리 문자열 이름으로 속성을 찾습니다.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "email" => Some(SortProperty::Email),
            "username" => Some(SortProperty::Username),
            "display_name" | "displayName" => Some(SortProperty::DisplayName),
            "age" => Some(SortProperty::Age),
            "created_at" | "createdAt" => Some(SortProperty::CreatedAt),
            _ => None,
        }
    }

    /// 저장 문서의 필드 이름
    pub fn field_name(&self) -> &'static str {
        match self {
            SortProperty::Email => "email",
            SortProperty::Username => "username",
            SortProperty::DisplayName => "display_name",
            SortProperty::Age => "age",
            SortProperty::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    /// MongoDB 정렬 문서 값 (`1` / `-1`)
    pub fn as_i32(&self) -> i32 {
        match self {
            SortDirection::Asc => 1,
            SortDirection::Desc => -1,
        }
    }
}

/// 정렬 조건. 기본값은 가입 순서(`created_at` 오름차순)입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub property: SortProperty,
    pub direction: SortDirection,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            property: SortProperty::CreatedAt,
            direction: SortDirection::Asc,
        }
    }
}

/// 정규화된 페이지 요청 (0부터 시작하는 페이지 번호)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Sort,
}

impl PageRequest {
    pub fn of(page: u64, size: u64) -> Self {
        Self {
            page,
            size,
            sort: Sort::default(),
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    /// 건너뛸 항목 수
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

/// 조회된 한 페이지
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }
}

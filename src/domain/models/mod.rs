//! 도메인 값 모델
//!
//! 저장소 계약에서 사용하는 요청/결과 값 타입을 정의합니다.

pub mod page;

pub use page::{Page, PageRequest, Sort, SortDirection, SortProperty};

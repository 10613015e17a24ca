//! 공통 유틸리티 모듈
//!
//! - [`validation`]: `validator` 결과를 평탄한 위반 목록으로 변환
//! - [`string_utils`]: 요청 문자열 정규화용 serde 헬퍼

pub mod string_utils;
pub mod validation;

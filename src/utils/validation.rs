//! 명시적 검증 함수
//!
//! `validator` 크레이트의 derive 검증 결과(`ValidationErrors`)는 중첩된 맵 구조입니다.
//! 이 모듈은 그 트리를 순회하여 `(점 구분 경로, 메시지)` 형태의 평탄한
//! 위반 목록으로 변환합니다. 핸들러는 비즈니스 로직을 호출하기 전에
//! [`validate_payload`]를 호출하여 위반을 [`AppError::ValidationError`]로 전달합니다.
//!
//! ## 경로 규칙
//!
//! | 위치 | 경로 |
//! |------|------|
//! | 최상위 필드 | `email` |
//! | 중첩 구조체 필드 | `address.zip` |
//! | 리스트 항목 필드 | `tags[0].name` |
//! | 구조체 수준(schema) 검증 | 부모 경로 (최상위는 빈 문자열) |

use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};
use crate::core::errors::{AppError, AppResult};

/// `validator`가 구조체 수준 에러에 사용하는 키
const SCHEMA_LEVEL_KEY: &str = "__all__";

/// 제약 하나의 위반
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// 페이로드를 검증하고 위반이 있으면 `ValidationError`로 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// validate_payload(&request)?;
/// let user = service.signup(request).await?;
/// ```
pub fn validate_payload<T: Validate>(payload: &T) -> AppResult<()> {
    payload
        .validate()
        .map_err(|errors| AppError::ValidationError(collect_violations(&errors)))
}

/// `ValidationErrors` 트리를 위반 목록으로 평탄화합니다.
///
/// 내부 맵은 순서가 없으므로 같은 레벨의 키는 이름순으로 정렬하여
/// 결과 순서를 고정합니다. 한 필드 안의 위반은 제약 선언 순서를 따릅니다.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<Violation> {
    let mut violations = Vec::new();
    walk("", errors, &mut violations);
    violations
}

fn walk(prefix: &str, errors: &ValidationErrors, out: &mut Vec<Violation>) {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (key, kind) in entries {
        let key = key.to_string();
        let path = if key == SCHEMA_LEVEL_KEY {
            prefix.to_string()
        } else {
            join_path(prefix, &key)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(
                    field_errors
                        .iter()
                        .map(|error| Violation::new(path.clone(), message_of(error))),
                );
            }
            ValidationErrorsKind::Struct(nested) => walk(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    walk(&format!("{}[{}]", path, index), nested, out);
                }
            }
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|message| message.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

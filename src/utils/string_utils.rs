//! 문자열 입력 정규화 유틸리티
//!
//! 요청 DTO 역직렬화 단계에서 사용하는 serde 헬퍼입니다.
//! 검증 전에 앞뒤 공백을 제거하여 `"  "` 같은 입력이 필수값 검증을 통과하지 않도록 합니다.

use serde::Deserialize;

fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 빈 문자열(공백만 있는 경우 포함)은 `None`으로 정리합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 문자열 필드를 trim하여 역직렬화합니다.
///
/// ```rust,ignore
/// #[serde(deserialize_with = "deserialize_trimmed_string")]
/// pub email: String,
/// ```
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(trim_string(&value))
}

/// 선택적 문자열 필드를 trim하여 역직렬화하고, 빈 값은 `None`으로 처리합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "deserialize_trimmed_string")]
        name: String,
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        nickname: Option<String>,
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  Hi  ".to_string())), Some("Hi".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_trimmed_deserialization() {
        let sample: Sample = serde_json::from_str(r#"{"name":"  alice  ","nickname":"   "}"#).unwrap();

        assert_eq!(sample.name, "alice");
        assert_eq!(sample.nickname, None);
    }

    #[test]
    fn test_missing_optional_field() {
        let sample: Sample = serde_json::from_str(r#"{"name":"bob"}"#).unwrap();

        assert_eq!(sample.nickname, None);
    }
}

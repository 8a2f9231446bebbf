//! # 문자열 유틸리티
//!
//! 이메일 정규화와 선택 입력값 정리를 위한 공통 함수들입니다.

use serde::Deserialize;

/// 이메일 주소를 정규화합니다.
///
/// 앞뒤 공백을 제거하고 도메인 부분(`@` 이후)만 소문자로 바꿉니다.
/// 로컬 파트는 대소문자를 구분할 수 있으므로 그대로 둡니다.
///
/// ```rust,ignore
/// assert_eq!(normalize_email("Test2@Example.com"), "Test2@example.com");
/// ```
pub fn normalize_email(email: &str) -> String {
    let trimmed = email.trim();
    match trimmed.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => trimmed.to_string(),
    }
}

/// 공백만 있는 문자열을 `None`으로 바꾸고 나머지는 trim 합니다.
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

/// serde `deserialize_with`용: 빈 문자열/공백/null을 모두 `None`으로 처리
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

    #[test]
    fn test_normalize_email() {
        let samples = [
            ("test1@EXAMPLE.com", "test1@example.com"),
            ("Test2@Example.com", "Test2@example.com"),
            ("TEST3@EXAMPLE.COM", "TEST3@example.com"),
            ("test4@example.COM", "test4@example.com"),
            ("  spaced@Example.org ", "spaced@example.org"),
        ];

        for (raw, expected) in samples {
            assert_eq!(normalize_email(raw), expected);
        }
    }

    #[test]
    fn test_normalize_email_without_at_sign() {
        assert_eq!(normalize_email(" not-an-email "), "not-an-email");
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            token: Option<String>,
        }

        let parsed: Payload = serde_json::from_str(r#"{"token": "  ya29.abc  "}"#).unwrap();
        assert_eq!(parsed.token, Some("ya29.abc".to_string()));

        let parsed: Payload = serde_json::from_str(r#"{"token": ""}"#).unwrap();
        assert_eq!(parsed.token, None);

        let parsed: Payload = serde_json::from_str(r#"{"token": null}"#).unwrap();
        assert_eq!(parsed.token, None);

        let parsed: Payload = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.token, None);
    }
}

use serde::Deserialize;
use crate::utils::string_utils::deserialize_optional_string;

/// 프로바이더 토큰 교환 요청 (`POST /api/user/social/{provider}`)
///
/// `token`이 없거나 `null`, 빈 문자열이면 `None`이 되고
/// 핸들러가 `400 Token not provided`로 응답합니다.
#[derive(Debug, Default, Deserialize)]
pub struct SocialLoginRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_presence() {
        let req: SocialLoginRequest = serde_json::from_str(r#"{"token": "ya29.abc"}"#).unwrap();
        assert_eq!(req.token.as_deref(), Some("ya29.abc"));

        for body in [r#"{}"#, r#"{"token": null}"#, r#"{"token": ""}"#] {
            let req: SocialLoginRequest = serde_json::from_str(body).unwrap();
            assert!(req.token.is_none(), "body: {}", body);
        }
    }
}

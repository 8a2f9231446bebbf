//! # Authentication Configuration Module
//!
//! JWT 세션 토큰과 소셜 로그인 프로바이더 관련 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ### JWT 세션 토큰
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ACCESS_EXPIRATION_MINUTES="60"
//! export JWT_REFRESH_EXPIRATION_DAYS="1"
//! ```
//!
//! ### 소셜 로그인 프로바이더 애플리케이션
//! ```bash
//! export GOOGLE_CLIENT_ID="xxxx.apps.googleusercontent.com"
//! export GOOGLE_CLIENT_SECRET="..."
//! export FACEBOOK_CLIENT_ID="1234567890"
//! export FACEBOOK_CLIENT_SECRET="..."
//!
//! # 선택: user-info 엔드포인트 재정의 (테스트/프록시 환경)
//! export GOOGLE_USERINFO_URL="https://www.googleapis.com/oauth2/v3/userinfo"
//! export FACEBOOK_USERINFO_URL="https://graph.facebook.com/v9.0/me"
//! ```
//!
//! `*_CLIENT_ID`가 비어 있으면 해당 프로바이더는 "설정되지 않음"으로 간주되고
//! 소셜 로그인 요청은 `400 Error with <Provider> login`으로 거절됩니다.

use std::env;
use std::fmt;
use serde::{Deserialize, Serialize};
use crate::config::data_config::env_or;

/// 구글 user-info 엔드포인트 기본값
pub const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

/// 페이스북 Graph API `/me` 엔드포인트 기본값
pub const FACEBOOK_USERINFO_URL: &str = "https://graph.facebook.com/v9.0/me";

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// HS256 서명 비밀키
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "changeme".to_string()
        })
    }

    /// 액세스 토큰 유효 시간 (분, 기본 60)
    pub fn access_expiration_minutes() -> i64 {
        env_or("JWT_ACCESS_EXPIRATION_MINUTES", 60)
    }

    /// 리프레시 토큰 유효 기간 (일, 기본 1)
    pub fn refresh_expiration_days() -> i64 {
        env_or("JWT_REFRESH_EXPIRATION_DAYS", 1)
    }
}

/// 인증 방식
///
/// 세션이 어떤 경로로 만들어졌는지를 나타내며 JWT `auth_provider` 클레임에 기록됩니다.
/// `Local`을 제외한 값은 소셜 로그인 프로바이더입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Local,
    Google,
    Facebook,
}

impl AuthProvider {
    /// 대소문자 구분 없이 문자열을 파싱합니다.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            "facebook" => Ok(AuthProvider::Facebook),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    /// 저장/클레임에 쓰이는 소문자 식별자
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
            AuthProvider::Facebook => "facebook",
        }
    }

    /// 사용자 메시지용 표시 이름 (첫 글자 대문자)
    pub fn display_name(&self) -> &'static str {
        match self {
            AuthProvider::Local => "Local",
            AuthProvider::Google => "Google",
            AuthProvider::Facebook => "Facebook",
        }
    }

    pub fn is_social(&self) -> bool {
        !matches!(self, AuthProvider::Local)
    }

    fn env_prefix(&self) -> &'static str {
        match self {
            AuthProvider::Local => "LOCAL",
            AuthProvider::Google => "GOOGLE",
            AuthProvider::Facebook => "FACEBOOK",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 소셜 로그인 프로바이더 애플리케이션 설정
pub struct SocialProviderConfig;

impl SocialProviderConfig {
    /// `<PROVIDER>_CLIENT_ID`, 비어 있으면 `None`
    pub fn client_id(provider: AuthProvider) -> Option<String> {
        Self::non_empty(&format!("{}_CLIENT_ID", provider.env_prefix()))
    }

    /// `<PROVIDER>_CLIENT_SECRET`
    pub fn client_secret(provider: AuthProvider) -> Option<String> {
        Self::non_empty(&format!("{}_CLIENT_SECRET", provider.env_prefix()))
    }

    /// 프로바이더 user-info 엔드포인트
    pub fn userinfo_url(provider: AuthProvider) -> String {
        let key = format!("{}_USERINFO_URL", provider.env_prefix());
        Self::non_empty(&key).unwrap_or_else(|| Self::default_userinfo_url(provider).to_string())
    }

    pub fn default_userinfo_url(provider: AuthProvider) -> &'static str {
        match provider {
            AuthProvider::Google => GOOGLE_USERINFO_URL,
            AuthProvider::Facebook => FACEBOOK_USERINFO_URL,
            AuthProvider::Local => "",
        }
    }

    fn non_empty(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_from_string() {
        assert_eq!(AuthProvider::from_str("local").unwrap(), AuthProvider::Local);
        assert_eq!(AuthProvider::from_str("google").unwrap(), AuthProvider::Google);
        assert_eq!(AuthProvider::from_str("facebook").unwrap(), AuthProvider::Facebook);

        // 대소문자 무관
        assert_eq!(AuthProvider::from_str("GOOGLE").unwrap(), AuthProvider::Google);
        assert_eq!(AuthProvider::from_str("FaceBook").unwrap(), AuthProvider::Facebook);

        assert!(AuthProvider::from_str("twitter").is_err());
        assert!(AuthProvider::from_str("github").is_err());
    }

    #[test]
    fn test_auth_provider_display_name_is_capitalized() {
        assert_eq!(AuthProvider::Google.display_name(), "Google");
        assert_eq!(AuthProvider::Facebook.display_name(), "Facebook");
    }

    #[test]
    fn test_auth_provider_serialization_is_lowercase() {
        let json = serde_json::to_string(&AuthProvider::Google).unwrap();
        assert_eq!(json, "\"google\"");

        let parsed: AuthProvider = serde_json::from_str("\"facebook\"").unwrap();
        assert_eq!(parsed, AuthProvider::Facebook);
    }

    #[test]
    fn test_only_local_is_not_social() {
        assert!(!AuthProvider::Local.is_social());
        assert!(AuthProvider::Google.is_social());
        assert!(AuthProvider::Facebook.is_social());
    }

    #[test]
    fn test_default_userinfo_urls() {
        assert_eq!(
            SocialProviderConfig::default_userinfo_url(AuthProvider::Google),
            "https://www.googleapis.com/oauth2/v3/userinfo"
        );
        assert_eq!(
            SocialProviderConfig::default_userinfo_url(AuthProvider::Facebook),
            "https://graph.facebook.com/v9.0/me"
        );
    }

    #[test]
    fn test_jwt_lifetime_defaults() {
        if env::var("JWT_ACCESS_EXPIRATION_MINUTES").is_err() {
            assert_eq!(JwtConfig::access_expiration_minutes(), 60);
        }
        if env::var("JWT_REFRESH_EXPIRATION_DAYS").is_err() {
            assert_eq!(JwtConfig::refresh_expiration_days(), 1);
        }
    }
}

//! 소셜 프로바이더 애플리케이션
//!
//! Google/Facebook 개발자 콘솔에 등록된 OAuth 클라이언트를 나타냅니다.
//! 환경 변수로 구성되며, 구성되지 않은 프로바이더로는 로그인할 수 없습니다.

use std::fmt;
use crate::config::AuthProvider;

#[derive(Clone, PartialEq, Eq)]
pub struct SocialApp {
    pub provider: AuthProvider,
    pub name: String,
    pub client_id: String,
    pub secret: Option<String>,
}

impl SocialApp {
    pub fn new(provider: AuthProvider, client_id: impl Into<String>, secret: Option<String>) -> Self {
        Self {
            provider,
            name: provider.display_name().to_string(),
            client_id: client_id.into(),
            secret,
        }
    }
}

// secret은 로그에 남지 않도록 가립니다.
impl fmt::Debug for SocialApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SocialApp")
            .field("provider", &self.provider)
            .field("name", &self.name)
            .field("client_id", &self.client_id)
            .field("secret", &self.secret.as_ref().map(|_| "***"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let app = SocialApp::new(AuthProvider::Google, "client-123", Some("super-secret".to_string()));
        let printed = format!("{:?}", app);

        assert!(printed.contains("client-123"));
        assert!(!printed.contains("super-secret"));
        assert_eq!(app.name, "Google");
    }
}

//! 소셜 프로바이더 user-info 클라이언트
//!
//! 클라이언트가 제시한 프로바이더 액세스 토큰으로 user-info 엔드포인트를 한 번 호출하고,
//! 응답을 [`SocialUserInfo`]로 정규화합니다. 재시도는 하지 않습니다.
//!
//! | 프로바이더 | 요청 |
//! |------------|------|
//! | Google | `GET <GOOGLE_USERINFO_URL>` + `Authorization: Bearer <token>` |
//! | Facebook | `GET <FACEBOOK_USERINFO_URL>?fields=id,name,first_name,last_name,email&access_token=<token>` |

use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use crate::{
    config::{AuthProvider, SocialProviderConfig},
    core::errors::{AppError, AppResult},
    domain::models::social::SocialUserInfo,
};

/// user-info 요청 타임아웃
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const FACEBOOK_FIELDS: &str = "id,name,first_name,last_name,email";

#[async_trait]
pub trait UserInfoFetcher: Send + Sync {
    fn provider(&self) -> AuthProvider;

    async fn fetch_user_info(&self, token: &str) -> AppResult<SocialUserInfo>;
}

/// 요청을 보내고 200 JSON 본문을 정규화합니다.
async fn fetch_and_normalize(provider: AuthProvider, request: RequestBuilder) -> AppResult<SocialUserInfo> {
    let response = request
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
        .map_err(|e| AppError::ExternalServiceError(format!("{} user-info 요청 실패: {}", provider.display_name(), e)))?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        log::warn!("{} user-info 응답 오류: {}", provider.display_name(), status.as_u16());
        return Err(AppError::ExternalServiceError(format!(
            "Failed to fetch user info. Status code: {}, Response: {}",
            status.as_u16(),
            body
        )));
    }

    let body = response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| AppError::ExternalServiceError(format!("{} user-info 파싱 실패: {}", provider.display_name(), e)))?;

    SocialUserInfo::from_provider_response(provider, body)
}

pub struct GoogleUserInfoFetcher {
    client: Client,
    endpoint: String,
}

impl GoogleUserInfoFetcher {
    pub fn new() -> Self {
        Self::with_endpoint(SocialProviderConfig::userinfo_url(AuthProvider::Google))
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for GoogleUserInfoFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserInfoFetcher for GoogleUserInfoFetcher {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Google
    }

    async fn fetch_user_info(&self, token: &str) -> AppResult<SocialUserInfo> {
        let request = self.client.get(&self.endpoint).bearer_auth(token);
        fetch_and_normalize(AuthProvider::Google, request).await
    }
}

pub struct FacebookUserInfoFetcher {
    client: Client,
    endpoint: String,
}

impl FacebookUserInfoFetcher {
    pub fn new() -> Self {
        Self::with_endpoint(SocialProviderConfig::userinfo_url(AuthProvider::Facebook))
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for FacebookUserInfoFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserInfoFetcher for FacebookUserInfoFetcher {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Facebook
    }

    async fn fetch_user_info(&self, token: &str) -> AppResult<SocialUserInfo> {
        let request = self
            .client
            .get(&self.endpoint)
            .query(&[("fields", FACEBOOK_FIELDS), ("access_token", token)]);
        fetch_and_normalize(AuthProvider::Facebook, request).await
    }
}

/// 프로바이더에 맞는 fetcher를 만듭니다. `Local`은 user-info 엔드포인트가 없습니다.
pub fn fetcher_for(provider: AuthProvider) -> Option<Box<dyn UserInfoFetcher>> {
    match provider {
        AuthProvider::Google => Some(Box::new(GoogleUserInfoFetcher::new())),
        AuthProvider::Facebook => Some(Box::new(FacebookUserInfoFetcher::new())),
        AuthProvider::Local => None,
    }
}

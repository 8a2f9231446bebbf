//! # 소셜 로그인 서비스
//!
//! 프로바이더 액세스 토큰을 받아 계정 연결 흐름([`SocialLoginFlow`])을 MongoDB 리포지토리로
//! 실행하고, 계정 소유자에게 세션 토큰 쌍을 발급합니다.
//!
//! ```rust,ignore
//! let pair = SocialLoginService::instance()
//!     .login(AuthProvider::Google, "ya29.a0Af...")
//!     .await?;
//! ```

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    config::AuthProvider,
    core::errors::{AppError, AppResult},
    domain::dto::tokens::TokenPairResponse,
    repositories::social::{SocialAccountRepository, SocialTokenRepository},
    repositories::users::UserRepository,
    services::auth::TokenService,
    services::social::{app_registry::SocialAppRegistry, fetcher::{fetcher_for, UserInfoFetcher}, flow::SocialLoginFlow},
};

#[service(name = "social_login")]
pub struct SocialLoginService {
    /// 환경 변수로 구성된 프로바이더 애플리케이션 (`main`에서 수동 등록)
    apps: Arc<SocialAppRegistry>,
    user_repo: Arc<UserRepository>,
    social_account_repo: Arc<SocialAccountRepository>,
    social_token_repo: Arc<SocialTokenRepository>,
}

impl SocialLoginService {
    /// 프로바이더 토큰으로 로그인하고 `{refresh, access}`를 반환합니다.
    pub async fn login(&self, provider: AuthProvider, token: &str) -> AppResult<TokenPairResponse> {
        let fetcher = fetcher_for(provider).ok_or_else(|| {
            AppError::ValidationError(format!("Error with {} login", provider.display_name()))
        })?;

        self.login_with(fetcher.as_ref(), token).await
    }

    /// 주어진 fetcher로 로그인합니다. 프로바이더는 fetcher가 결정합니다.
    pub async fn login_with(&self, fetcher: &dyn UserInfoFetcher, token: &str) -> AppResult<TokenPairResponse> {
        let flow = SocialLoginFlow {
            apps: self.apps.as_ref(),
            users: self.user_repo.as_ref(),
            accounts: self.social_account_repo.as_ref(),
            tokens: self.social_token_repo.as_ref(),
        };

        let login = flow.complete(fetcher, token).await?;

        TokenService::instance().generate_token_pair(&login.user, login.account.provider)
    }
}

//! 소셜 로그인 계정 연결 흐름
//!
//! ```text
//! 1. 프로바이더 애플리케이션 조회   → 없으면 400 Error with <Provider> login (외부 호출/쓰기 없음)
//! 2. user-info 조회 및 정규화        → 실패 시 500, id/email 없으면 400
//! 3. 이메일로 사용자 get-or-create   → username = email
//! 4. (provider, uid)로 계정 get-or-create → extra_data = 응답 스냅샷
//! 5. 프로바이더 토큰 저장 (덮어쓰기)
//! 6. 계정 소유자 확인                → 없거나 비활성이면 401 Authentication failed
//! 7. last_login 기록
//! ```
//!
//! 저장소는 trait 객체로 받으므로 MongoDB 리포지토리와 테스트용 메모리 구현을
//! 같은 흐름에 넣을 수 있습니다.

use crate::{
    core::errors::{AppError, AppResult},
    domain::entities::{social::SocialAccount, users::User},
    domain::models::social::SocialLogin,
    repositories::stores::{SocialAccountStore, SocialAppStore, SocialTokenStore, UserStore},
    services::social::fetcher::UserInfoFetcher,
    utils::string_utils::normalize_email,
};

pub struct SocialLoginFlow<'a> {
    pub apps: &'a dyn SocialAppStore,
    pub users: &'a dyn UserStore,
    pub accounts: &'a dyn SocialAccountStore,
    pub tokens: &'a dyn SocialTokenStore,
}

impl SocialLoginFlow<'_> {
    pub async fn complete(&self, fetcher: &dyn UserInfoFetcher, token: &str) -> AppResult<SocialLogin> {
        let provider = fetcher.provider();

        let app = self.apps.find_by_provider(provider).ok_or_else(|| {
            log::warn!("{} 프로바이더 애플리케이션이 구성되지 않았습니다", provider.display_name());
            AppError::ValidationError(format!("Error with {} login", provider.display_name()))
        })?;

        let info = fetcher.fetch_user_info(token).await?;
        let email = normalize_email(&info.email);

        let (user, user_created) = self
            .users
            .get_or_create_by_email(User::new_social(email, info.first_name.clone(), info.last_name.clone()))
            .await?;

        let user_id = user.id.ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;

        let (account, account_created) = self
            .accounts
            .get_or_create(SocialAccount::new(provider, info.id.clone(), user_id, info.extra))
            .await?;

        let account_id = account
            .id
            .ok_or_else(|| AppError::InternalError("저장된 소셜 계정에 ID가 없습니다".to_string()))?;

        let social_token = self.tokens.save_token(&app, &account_id, token).await?;

        let mut owner = match self.users.find_by_object_id(&account.user_id).await? {
            Some(owner) if owner.is_active => owner,
            Some(_) => {
                log::warn!("비활성 사용자의 {} 로그인 시도: uid={}", app.name, info.id);
                return Err(AppError::AuthenticationError("Authentication failed".to_string()));
            }
            None => {
                log::warn!("소유자가 없는 {} 계정: uid={}", app.name, info.id);
                return Err(AppError::AuthenticationError("Authentication failed".to_string()));
            }
        };

        self.users.record_login(&account.user_id).await?;
        self.accounts.record_login(&account_id).await?;
        owner.last_login = Some(mongodb::bson::DateTime::now());

        log::info!(
            "✅ {} 로그인: user={} (new_user={}, new_account={})",
            app.name,
            owner.id_string().unwrap_or_default(),
            user_created,
            account_created
        );

        Ok(SocialLogin {
            user: owner,
            account,
            token: social_token,
            is_existing: !account_created,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use async_trait::async_trait;
    use mongodb::bson::{oid::ObjectId, DateTime};
    use serde_json::json;
    use crate::config::AuthProvider;
    use crate::domain::entities::social::{SocialApp, SocialToken};
    use crate::domain::models::social::SocialUserInfo;
    use crate::services::social::app_registry::SocialAppRegistry;

    #[derive(Default)]
    struct MemoryUsers {
        users: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserStore for MemoryUsers {
        async fn get_or_create_by_email(&self, mut defaults: User) -> AppResult<(User, bool)> {
            let mut users = self.users.lock().unwrap();
            if let Some(existing) = users.iter().find(|u| u.email == defaults.email) {
                return Ok((existing.clone(), false));
            }
            defaults.id = Some(ObjectId::new());
            users.push(defaults.clone());
            Ok((defaults, true))
        }

        async fn find_by_object_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
            Ok(self.users.lock().unwrap().iter().find(|u| u.id.as_ref() == Some(id)).cloned())
        }

        async fn record_login(&self, id: &ObjectId) -> AppResult<()> {
            let mut users = self.users.lock().unwrap();
            if let Some(user) = users.iter_mut().find(|u| u.id.as_ref() == Some(id)) {
                user.last_login = Some(DateTime::now());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryAccounts {
        accounts: Mutex<Vec<SocialAccount>>,
    }

    #[async_trait]
    impl SocialAccountStore for MemoryAccounts {
        async fn get_or_create(&self, mut defaults: SocialAccount) -> AppResult<(SocialAccount, bool)> {
            let mut accounts = self.accounts.lock().unwrap();
            if let Some(existing) = accounts
                .iter()
                .find(|a| a.provider == defaults.provider && a.uid == defaults.uid)
            {
                return Ok((existing.clone(), false));
            }
            defaults.id = Some(ObjectId::new());
            accounts.push(defaults.clone());
            Ok((defaults, true))
        }

        async fn record_login(&self, id: &ObjectId) -> AppResult<()> {
            let mut accounts = self.accounts.lock().unwrap();
            if let Some(account) = accounts.iter_mut().find(|a| a.id.as_ref() == Some(id)) {
                account.last_login = Some(DateTime::now());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryTokens {
        tokens: Mutex<Vec<SocialToken>>,
    }

    #[async_trait]
    impl SocialTokenStore for MemoryTokens {
        async fn save_token(&self, app: &SocialApp, account_id: &ObjectId, token: &str) -> AppResult<SocialToken> {
            let mut tokens = self.tokens.lock().unwrap();
            let now = DateTime::now();
            if let Some(existing) = tokens
                .iter_mut()
                .find(|t| t.provider == app.provider && &t.account_id == account_id)
            {
                existing.token = token.to_string();
                existing.updated_at = now;
                return Ok(existing.clone());
            }
            let saved = SocialToken {
                id: Some(ObjectId::new()),
                provider: app.provider,
                client_id: app.client_id.clone(),
                account_id: *account_id,
                token: token.to_string(),
                created_at: now,
                updated_at: now,
            };
            tokens.push(saved.clone());
            Ok(saved)
        }
    }

    struct StubFetcher {
        provider: AuthProvider,
        body: serde_json::Value,
        calls: AtomicUsize,
    }

    impl StubFetcher {
        fn google(body: serde_json::Value) -> Self {
            Self { provider: AuthProvider::Google, body, calls: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl UserInfoFetcher for StubFetcher {
        fn provider(&self) -> AuthProvider {
            self.provider
        }

        async fn fetch_user_info(&self, _token: &str) -> AppResult<SocialUserInfo> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            SocialUserInfo::from_provider_response(self.provider, self.body.clone())
        }
    }

    struct Fixture {
        apps: SocialAppRegistry,
        users: MemoryUsers,
        accounts: MemoryAccounts,
        tokens: MemoryTokens,
    }

    impl Fixture {
        fn with_google() -> Self {
            Self::with_apps(SocialAppRegistry::from_apps([SocialApp::new(AuthProvider::Google, "google-client", None)]))
        }

        fn with_apps(apps: SocialAppRegistry) -> Self {
            Self {
                apps,
                users: MemoryUsers::default(),
                accounts: MemoryAccounts::default(),
                tokens: MemoryTokens::default(),
            }
        }

        fn flow(&self) -> SocialLoginFlow<'_> {
            SocialLoginFlow {
                apps: &self.apps,
                users: &self.users,
                accounts: &self.accounts,
                tokens: &self.tokens,
            }
        }
    }

    fn jane() -> serde_json::Value {
        json!({
            "sub": "g-123",
            "email": "jane@Example.COM",
            "given_name": "Jane",
            "family_name": "Doe",
            "picture": "https://example.com/jane.png"
        })
    }

    #[actix_web::test]
    async fn test_first_login_creates_user_account_and_token() {
        let fixture = Fixture::with_google();
        let fetcher = StubFetcher::google(jane());

        let login = fixture.flow().complete(&fetcher, "ya29.first").await.unwrap();

        assert!(!login.is_existing);
        assert_eq!(login.user.email, "jane@example.com");
        assert_eq!(login.user.username.as_deref(), Some("jane@example.com"));
        assert_eq!(login.user.first_name.as_deref(), Some("Jane"));
        assert!(login.user.password_hash.is_none());
        assert!(login.user.last_login.is_some());
        assert_eq!(login.account.uid, "g-123");
        assert_eq!(login.account.user_id, login.user.id.unwrap());
        assert_eq!(login.account.extra_data["picture"], "https://example.com/jane.png");
        assert_eq!(login.token.token, "ya29.first");
        assert_eq!(login.token.client_id, "google-client");

        assert_eq!(fixture.users.users.lock().unwrap().len(), 1);
        assert_eq!(fixture.accounts.accounts.lock().unwrap().len(), 1);
        assert!(fixture.accounts.accounts.lock().unwrap()[0].last_login.is_some());
    }

    #[actix_web::test]
    async fn test_repeat_login_reuses_records_and_overwrites_token() {
        let fixture = Fixture::with_google();
        let fetcher = StubFetcher::google(jane());

        let first = fixture.flow().complete(&fetcher, "ya29.first").await.unwrap();
        let second = fixture.flow().complete(&fetcher, "ya29.second").await.unwrap();

        assert!(second.is_existing);
        assert_eq!(first.user.id, second.user.id);
        assert_eq!(first.account.id, second.account.id);
        assert_eq!(first.token.id, second.token.id);

        let tokens = fixture.tokens.tokens.lock().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token, "ya29.second");
        assert_eq!(fixture.users.users.lock().unwrap().len(), 1);
        assert_eq!(fixture.accounts.accounts.lock().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_existing_account_keeps_owner_and_snapshot() {
        let fixture = Fixture::with_google();
        fixture.flow().complete(&StubFetcher::google(jane()), "t1").await.unwrap();

        let changed = StubFetcher::google(json!({
            "sub": "g-123",
            "email": "jane.new@example.com",
            "given_name": "Janet"
        }));
        let login = fixture.flow().complete(&changed, "t2").await.unwrap();

        // 새 이메일로 사용자는 하나 더 생기지만 세션은 기존 계정 소유자에게 발급됩니다.
        assert_eq!(fixture.users.users.lock().unwrap().len(), 2);
        assert_eq!(login.user.email, "jane@example.com");
        assert_eq!(login.account.extra_data["first_name"], "Jane");
    }

    #[actix_web::test]
    async fn test_unconfigured_provider_fetches_and_writes_nothing() {
        let fixture = Fixture::with_apps(SocialAppRegistry::default());
        let fetcher = StubFetcher::google(jane());

        let err = fixture.flow().complete(&fetcher, "ya29.token").await.unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(err.client_message(), "Error with Google login");
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
        assert!(fixture.users.users.lock().unwrap().is_empty());
        assert!(fixture.accounts.accounts.lock().unwrap().is_empty());
        assert!(fixture.tokens.tokens.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_inactive_owner_is_rejected() {
        let fixture = Fixture::with_google();
        let fetcher = StubFetcher::google(jane());
        fixture.flow().complete(&fetcher, "t1").await.unwrap();

        fixture.users.users.lock().unwrap()[0].is_active = false;

        let err = fixture.flow().complete(&fetcher, "t2").await.unwrap_err();
        assert!(matches!(err, AppError::AuthenticationError(_)));
        assert_eq!(err.client_message(), "Authentication failed");
    }

    #[actix_web::test]
    async fn test_missing_owner_is_rejected() {
        let fixture = Fixture::with_google();
        let fetcher = StubFetcher::google(jane());
        fixture.flow().complete(&fetcher, "t1").await.unwrap();

        fixture.users.users.lock().unwrap().clear();

        let err = fixture.flow().complete(&fetcher, "t2").await.unwrap_err();
        assert_eq!(err.client_message(), "Authentication failed");
    }

    #[actix_web::test]
    async fn test_user_info_without_email_writes_nothing() {
        let fixture = Fixture::with_google();
        let fetcher = StubFetcher::google(json!({ "sub": "g-9" }));

        let err = fixture.flow().complete(&fetcher, "t").await.unwrap_err();

        assert_eq!(err.client_message(), "Error with Google login");
        assert!(fixture.users.users.lock().unwrap().is_empty());
    }
}

//! 소셜 로그인 흐름이 사용하는 저장소 추상화
//!
//! MongoDB 리포지토리가 각 trait을 구현하고, 테스트는 메모리 구현을 사용합니다.
//! get-or-create 계열 메서드는 `(저장된 엔티티, 새로 생성되었는지)`를 반환합니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::config::AuthProvider;
use crate::core::errors::AppResult;
use crate::domain::entities::social::{SocialAccount, SocialApp, SocialToken};
use crate::domain::entities::users::User;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// 같은 이메일의 사용자가 있으면 그대로, 없으면 `defaults`를 저장해서 반환합니다.
    async fn get_or_create_by_email(&self, defaults: User) -> AppResult<(User, bool)>;

    async fn find_by_object_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// `last_login`을 현재 시각으로 기록합니다.
    async fn record_login(&self, id: &ObjectId) -> AppResult<()>;
}

#[async_trait]
pub trait SocialAccountStore: Send + Sync {
    /// `(provider, uid)`로 계정을 찾고, 없으면 `defaults`를 저장합니다.
    /// 기존 계정의 소유자와 `extra_data`는 바뀌지 않습니다.
    async fn get_or_create(&self, defaults: SocialAccount) -> AppResult<(SocialAccount, bool)>;

    async fn record_login(&self, id: &ObjectId) -> AppResult<()>;
}

#[async_trait]
pub trait SocialTokenStore: Send + Sync {
    /// `(app, account)`당 하나뿐인 토큰 문서를 생성하거나 덮어씁니다.
    async fn save_token(&self, app: &SocialApp, account_id: &ObjectId, token: &str) -> AppResult<SocialToken>;
}

/// 구성된 프로바이더 애플리케이션 조회
pub trait SocialAppStore: Send + Sync {
    fn find_by_provider(&self, provider: AuthProvider) -> Option<SocialApp>;
}

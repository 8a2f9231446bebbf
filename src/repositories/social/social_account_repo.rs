//! # 소셜 계정 리포지토리
//!
//! `(provider, uid)` 유니크 인덱스가 "외부 계정 하나당 연결 하나"를 보장합니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    options::IndexOptions,
    IndexModel,
};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    config::{AuthProvider, RedisConfig},
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::entities::social::SocialAccount,
    repositories::{is_duplicate_key_error, stores::SocialAccountStore},
};

/// 소셜 계정 데이터 액세스 리포지토리
///
/// 연결이 한 번 만들어지면 소유자와 스냅샷이 바뀌지 않으므로
/// `social_account:{provider}:{uid}` 키로 캐시합니다.
#[repository(name = "social_account", collection = "social_accounts")]
pub struct SocialAccountRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl SocialAccountRepository {
    fn account_cache_key(provider: AuthProvider, uid: &str) -> String {
        format!("social_account:{}:{}", provider.as_str(), uid)
    }

    pub async fn find_by_provider_uid(&self, provider: AuthProvider, uid: &str) -> AppResult<Option<SocialAccount>> {
        let cache_key = Self::account_cache_key(provider, uid);

        if let Ok(Some(cached)) = self.redis.get::<SocialAccount>(&cache_key).await {
            return Ok(Some(cached));
        }

        let account = self.collection::<SocialAccount>()
            .find_one(doc! { "provider": provider.as_str(), "uid": uid })
            .await?;

        if let Some(ref account) = account {
            if let Err(e) = self.redis.set_with_expiry(&cache_key, account, RedisConfig::cache_ttl_seconds()).await {
                log::warn!("소셜 계정 캐시 저장 실패 ({}): {}", cache_key, e);
            }
        }

        Ok(account)
    }

    /// 인덱스 생성 (기동 시 1회, 멱등)
    pub async fn create_indexes(&self) -> AppResult<()> {
        let provider_uid_index = IndexModel::builder()
            .keys(doc! { "provider": 1, "uid": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("provider_uid_unique".to_string())
                .build())
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id".to_string())
                .build())
            .build();

        self.collection::<SocialAccount>()
            .create_indexes([provider_uid_index, user_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl SocialAccountStore for SocialAccountRepository {
    async fn get_or_create(&self, defaults: SocialAccount) -> AppResult<(SocialAccount, bool)> {
        if let Some(existing) = self.find_by_provider_uid(defaults.provider, &defaults.uid).await? {
            return Ok((existing, false));
        }

        let provider = defaults.provider.as_str();
        let uid = defaults.uid.clone();
        let collection = self.collection::<SocialAccount>();

        let mut insert_doc = mongodb::bson::to_document(&defaults)?;
        insert_doc.remove("provider");
        insert_doc.remove("uid");

        let created = match collection
            .update_one(doc! { "provider": provider, "uid": &uid }, doc! { "$setOnInsert": insert_doc })
            .upsert(true)
            .await
        {
            Ok(result) => result.upserted_id.is_some(),
            Err(e) if is_duplicate_key_error(&e) => false,
            Err(e) => return Err(e.into()),
        };

        let account = collection
            .find_one(doc! { "provider": provider, "uid": &uid })
            .await?
            .ok_or_else(|| AppError::InternalError(format!("소셜 계정 upsert 후 조회 실패: {}:{}", provider, uid)))?;

        if created {
            log::info!("🔗 {} 계정 연결: uid={}", defaults.provider.display_name(), uid);
        }

        Ok((account, created))
    }

    async fn record_login(&self, id: &ObjectId) -> AppResult<()> {
        self.collection::<SocialAccount>()
            .update_one(doc! { "_id": id }, doc! { "$set": { "last_login": DateTime::now() } })
            .await?;
        Ok(())
    }
}

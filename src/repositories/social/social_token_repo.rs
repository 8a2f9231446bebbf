//! # 프로바이더 토큰 리포지토리
//!
//! 계정마다 최신 토큰 하나만 유지합니다. 로그인할 때마다 같은 문서를 덮어씁니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    options::IndexOptions,
    IndexModel,
};
use singleton_macro::repository;
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::entities::social::{SocialApp, SocialToken},
    repositories::stores::SocialTokenStore,
};

#[repository(name = "social_token", collection = "social_tokens")]
pub struct SocialTokenRepository {
    db: Arc<Database>,
}

impl SocialTokenRepository {
    /// 인덱스 생성 (기동 시 1회, 멱등)
    pub async fn create_indexes(&self) -> AppResult<()> {
        let app_account_index = IndexModel::builder()
            .keys(doc! { "provider": 1, "account_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("provider_account_unique".to_string())
                .build())
            .build();

        self.collection::<SocialToken>()
            .create_index(app_account_index)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl SocialTokenStore for SocialTokenRepository {
    async fn save_token(&self, app: &SocialApp, account_id: &ObjectId, token: &str) -> AppResult<SocialToken> {
        let now = DateTime::now();
        let filter = doc! { "provider": app.provider.as_str(), "account_id": account_id };

        let result = self.collection::<SocialToken>()
            .update_one(
                filter.clone(),
                doc! {
                    "$set": { "token": token, "client_id": &app.client_id, "updated_at": now },
                    "$setOnInsert": { "created_at": now },
                },
            )
            .upsert(true)
            .await?;

        if result.upserted_id.is_some() {
            log::info!("🔑 {} 토큰 저장: account={}", app.name, account_id.to_hex());
        } else {
            log::info!("🔑 {} 토큰 갱신: account={}", app.name, account_id.to_hex());
        }

        self.collection::<SocialToken>()
            .find_one(filter)
            .await?
            .ok_or_else(|| AppError::InternalError("프로바이더 토큰 upsert 후 조회 실패".to_string()))
    }
}

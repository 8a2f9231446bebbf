//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 read-through 캐시로 사용합니다.
//!
//! 이메일은 `users.email` 유니크 인덱스로 보호되므로, 소셜 로그인이 동시에 들어와도
//! 같은 이메일의 사용자는 하나만 만들어집니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::{IndexOptions, ReturnDocument},
    IndexModel,
};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    config::RedisConfig,
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::entities::users::User,
    repositories::{duplicate_key_index, stores::UserStore},
};

const EMAIL_UNIQUE_INDEX: &str = "email_unique";
const USERNAME_UNIQUE_INDEX: &str = "username_unique";

const EMAIL_TAKEN: &str = "User with this email already exists";
const USER_EXISTS: &str = "User already exists";

/// 사용자 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - **TTL**: `CACHE_TTL_SECONDS` (기본 600초)
/// - **키 패턴**:
///   - 개별 사용자: `user:{user_id}` (리포지토리 매크로의 `cache_key()`)
///   - 이메일 조회: `user:email:{email}`
/// - 쓰기 연산 후 두 키를 모두 무효화합니다. 이메일이 바뀌면 이전 이메일 키도 지웁니다.
///
/// 캐시 에러는 로그만 남기고 MongoDB 결과를 그대로 사용합니다.
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl UserRepository {
    fn email_cache_key(email: &str) -> String {
        format!("user:email:{}", email)
    }

    async fn cache_user(&self, key: &str, user: &User) {
        if let Err(e) = self.redis.set_with_expiry(key, user, RedisConfig::cache_ttl_seconds()).await {
            log::warn!("사용자 캐시 저장 실패 ({}): {}", key, e);
        }
    }

    async fn invalidate_user_cache(&self, user: &User, previous_email: Option<&str>) {
        if let Some(id) = user.id_string() {
            if let Err(e) = self.redis.del(&self.cache_key(&id)).await {
                log::warn!("사용자 캐시 무효화 실패 ({}): {}", id, e);
            }
        }

        let email_keys: Vec<String> = std::iter::once(user.email.as_str())
            .chain(previous_email)
            .map(Self::email_cache_key)
            .collect();

        if let Err(e) = self.redis.del_multiple(&email_keys).await {
            log::warn!("사용자 이메일 캐시 무효화 실패: {}", e);
        }
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// 호출 측은 [`crate::utils::string_utils::normalize_email`]로 정규화한 값을 넘겨야 합니다.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let cache_key = Self::email_cache_key(email);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self.collection::<User>()
            .find_one(doc! { "email": email })
            .await?;

        if let Some(ref user) = user {
            self.cache_user(&cache_key, user).await;
        }

        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.collection::<User>()
            .find_one(doc! { "username": username })
            .await?)
    }

    /// ObjectId hex 문자열로 사용자 조회
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid user id".to_string()))?;

        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self.collection::<User>()
            .find_one(doc! { "_id": object_id })
            .await?;

        if let Some(ref user) = user {
            self.cache_user(&cache_key, user).await;
        }

        Ok(user)
    }

    /// 회원가입 사용자 저장
    ///
    /// - 이메일 중복: `400 User with this email already exists`
    /// - 사용자명 중복: `409 User already exists`
    pub async fn create(&self, mut user: User) -> AppResult<User> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ValidationError(EMAIL_TAKEN.to_string()));
        }

        if let Some(username) = user.username.as_deref() {
            if self.find_by_username(username).await?.is_some() {
                return Err(AppError::ConflictError(USER_EXISTS.to_string()));
            }
        }

        let result = self.collection::<User>()
            .insert_one(&user)
            .await
            .map_err(duplicate_user_error)?;

        user.id = result.inserted_id.as_object_id();
        log::info!("👤 사용자 생성: {}", user.email);

        Ok(user)
    }

    /// `$set` 문서를 적용하고 갱신된 사용자를 반환합니다.
    ///
    /// `updated_at`은 항상 현재 시각으로 덮어씁니다.
    /// 다른 사용자가 쓰는 이메일로 바꾸면 `400 User with this email already exists`입니다.
    pub async fn update(&self, id: &str, mut update_doc: Document) -> AppResult<Option<User>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid user id".to_string()))?;

        let previous_email = if update_doc.contains_key("email") {
            self.collection::<User>()
                .find_one(doc! { "_id": object_id })
                .await?
                .map(|user| user.email)
        } else {
            None
        };

        update_doc.insert("updated_at", DateTime::now());

        let updated_user = self.collection::<User>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .return_document(ReturnDocument::After)
            .await
            .map_err(duplicate_user_error)?;

        if let Some(ref user) = updated_user {
            let previous_email = previous_email.as_deref().filter(|email| *email != user.email);
            self.invalidate_user_cache(user, previous_email).await;
        }

        Ok(updated_user)
    }

    /// 인덱스 생성 (기동 시 1회, 멱등)
    ///
    /// - `email_unique`: 이메일 유니크
    /// - `username_unique`: 사용자명 유니크 (sparse, 사용자명 없는 문서는 제외)
    /// - `date_joined_desc`: 가입일 정렬
    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection::<User>();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(EMAIL_UNIQUE_INDEX.to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name(USERNAME_UNIQUE_INDEX.to_string())
                .build())
            .build();

        let date_joined_index = IndexModel::builder()
            .keys(doc! { "date_joined": -1 })
            .options(IndexOptions::builder()
                .name("date_joined_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, username_index, date_joined_index])
            .await?;

        Ok(())
    }

    /// 이메일로 `$setOnInsert` upsert 하고 새로 생성되었는지 반환합니다.
    async fn upsert_by_email(&self, email: &str, insert_doc: Document) -> mongodb::error::Result<bool> {
        let result = self.collection::<User>()
            .update_one(doc! { "email": email }, doc! { "$setOnInsert": insert_doc })
            .upsert(true)
            .await?;

        Ok(result.upserted_id.is_some())
    }
}

/// 유니크 인덱스 위반을 어떤 인덱스인지에 따라 400/409로 바꿉니다.
fn duplicate_user_error(error: mongodb::error::Error) -> AppError {
    match duplicate_key_index(&error) {
        Some(EMAIL_UNIQUE_INDEX) => AppError::ValidationError(EMAIL_TAKEN.to_string()),
        Some(_) => AppError::ConflictError(USER_EXISTS.to_string()),
        None => AppError::from(error),
    }
}

/// upsert의 `$setOnInsert` 문서. 필터 키인 `email`은 제외합니다.
fn social_insert_document(defaults: &User) -> AppResult<Document> {
    let mut insert_doc = mongodb::bson::to_document(defaults)?;
    insert_doc.remove("email");
    Ok(insert_doc)
}

#[async_trait]
impl UserStore for UserRepository {
    /// `$setOnInsert` upsert 한 번으로 조회와 생성을 처리합니다.
    ///
    /// - 동시에 같은 이메일로 upsert가 들어와 `email_unique` 충돌이 나면
    ///   먼저 만들어진 문서를 다시 읽어 반환합니다.
    /// - 기본 사용자명(이메일)을 이미 다른 사용자가 쓰고 있으면 사용자명 없이 생성합니다.
    async fn get_or_create_by_email(&self, defaults: User) -> AppResult<(User, bool)> {
        let email = defaults.email.clone();

        let upserted = match self.upsert_by_email(&email, social_insert_document(&defaults)?).await {
            Err(e) if duplicate_key_index(&e) == Some(USERNAME_UNIQUE_INDEX) => {
                log::warn!("사용자명 충돌, 사용자명 없이 생성: {}", email);
                let without_username = User { username: None, ..defaults };
                self.upsert_by_email(&email, social_insert_document(&without_username)?).await
            }
            other => other,
        };

        let created = match upserted {
            Ok(created) => created,
            Err(e) if duplicate_key_index(&e) == Some(EMAIL_UNIQUE_INDEX) => false,
            Err(e) => return Err(e.into()),
        };

        let user = self.collection::<User>()
            .find_one(doc! { "email": &email })
            .await?
            .ok_or_else(|| AppError::ConflictError(USER_EXISTS.to_string()))?;

        if created {
            log::info!("👤 소셜 로그인 사용자 생성: {}", email);
        }

        Ok((user, created))
    }

    async fn find_by_object_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.find_by_id(&id.to_hex()).await
    }

    async fn record_login(&self, id: &ObjectId) -> AppResult<()> {
        self.update(&id.to_hex(), doc! { "last_login": DateTime::now() }).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_insert_document_leaves_email_to_filter() {
        let user = User::new_social("jane@example.com".to_string(), Some("Jane".to_string()), None);

        let insert_doc = social_insert_document(&user).unwrap();

        assert!(insert_doc.get("email").is_none());
        assert_eq!(insert_doc.get_str("username").unwrap(), "jane@example.com");
        assert_eq!(insert_doc.get_str("first_name").unwrap(), "Jane");
    }

    #[test]
    fn test_username_fallback_omits_username() {
        let user = User::new_social("jane@example.com".to_string(), None, None);
        let without_username = User { username: None, ..user };

        let insert_doc = social_insert_document(&without_username).unwrap();

        assert!(insert_doc.get("username").is_none());
        assert!(insert_doc.get("email").is_none());
    }
}

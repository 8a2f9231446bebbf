//! 소셜 계정 연결 엔티티
//!
//! 외부 프로바이더의 사용자 식별자(`uid`)와 로컬 사용자를 연결합니다.
//! `(provider, uid)` 조합은 유니크하며, 처음 로그인할 때 한 번만 생성됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialAccount {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub provider: AuthProvider,

    /// 프로바이더 측 사용자 ID (Google `sub`, Facebook `id`)
    pub uid: String,

    /// 소유 사용자
    pub user_id: ObjectId,

    /// 최초 연결 시점의 user-info 응답 스냅샷 (정규화된 키)
    #[serde(default)]
    pub extra_data: serde_json::Value,

    pub date_joined: DateTime,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime>,
}

impl SocialAccount {
    pub fn new(provider: AuthProvider, uid: String, user_id: ObjectId, extra_data: serde_json::Value) -> Self {
        Self {
            id: None,
            provider,
            uid,
            user_id,
            extra_data,
            date_joined: DateTime::now(),
            last_login: None,
        }
    }
}

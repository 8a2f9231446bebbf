//! 프로바이더 액세스 토큰 엔티티
//!
//! 소셜 계정마다 가장 최근에 제시된 프로바이더 토큰 하나만 보관합니다.
//! 로그인할 때마다 같은 문서의 `token`이 덮어써지며 이력은 남기지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialToken {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 토큰을 발급한 프로바이더 애플리케이션
    pub provider: AuthProvider,

    /// 발급 애플리케이션의 client id
    pub client_id: String,

    pub account_id: ObjectId,

    pub token: String,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

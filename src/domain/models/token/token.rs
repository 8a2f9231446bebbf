//! JWT 세션 토큰 클레임
//!
//! 액세스/리프레시 토큰은 같은 클레임 구조를 쓰고 `token_type`으로 구분합니다.
//! 세션 상태는 서버에 저장하지 않으며 서명과 만료 시간만으로 유효성을 판단합니다.

use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 세션 토큰 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID (ObjectId hex)
    pub sub: String,

    pub user_id: String,

    pub email: String,

    /// `admin` | `user`
    pub role: String,

    #[serde(default)]
    pub is_staff: bool,

    /// 세션을 만든 인증 방식
    pub auth_provider: AuthProvider,

    pub token_type: TokenType,

    /// 토큰 고유 ID (uuid v4)
    pub jti: String,

    /// 발급 시각 (Unix timestamp)
    pub iat: i64,

    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}

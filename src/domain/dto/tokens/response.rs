use serde::{Deserialize, Serialize};

/// 세션 토큰 쌍
///
/// 회원가입, 자격 증명 로그인, 소셜 로그인이 모두 이 형태로 응답합니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPairResponse {
    pub refresh: String,
    pub access: String,
}

/// 갱신된 액세스 토큰
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    pub access: String,
}

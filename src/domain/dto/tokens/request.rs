use serde::Deserialize;
use validator::Validate;

/// 자격 증명 로그인 (`POST /api/user/token`)
#[derive(Debug, Deserialize, Validate)]
pub struct TokenObtainRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub password: String,
}

/// 액세스 토큰 갱신 (`POST /api/user/token/refresh`)
#[derive(Debug, Deserialize, Validate)]
pub struct TokenRefreshRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub refresh: String,
}

/// 토큰 검증 (`POST /api/user/token/verify`)
#[derive(Debug, Deserialize, Validate)]
pub struct TokenVerifyRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub token: String,
}

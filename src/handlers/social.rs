//! 소셜 로그인 핸들러
//!
//! 클라이언트(모바일/SPA)가 프로바이더 SDK로 받은 액세스 토큰을 교환합니다.
//!
//! ```text
//! POST /api/user/social/google   {"token": "ya29.a0Af..."}
//! POST /api/user/social/facebook {"token": "EAAB..."}
//! → 200 {"refresh": "...", "access": "..."}
//! ```

use actix_web::{post, web, HttpResponse};
use crate::config::AuthProvider;
use crate::core::errors::AppError;
use crate::domain::dto::social::SocialLoginRequest;
use crate::services::social::SocialLoginService;

#[post("/social/google")]
pub async fn google_login(payload: Option<web::Json<SocialLoginRequest>>) -> Result<HttpResponse, AppError> {
    social_login(AuthProvider::Google, payload).await
}

#[post("/social/facebook")]
pub async fn facebook_login(payload: Option<web::Json<SocialLoginRequest>>) -> Result<HttpResponse, AppError> {
    social_login(AuthProvider::Facebook, payload).await
}

/// 본문이 없거나 파싱할 수 없는 경우도 토큰 누락으로 처리합니다.
async fn social_login(
    provider: AuthProvider,
    payload: Option<web::Json<SocialLoginRequest>>,
) -> Result<HttpResponse, AppError> {
    let token = payload
        .and_then(|body| body.into_inner().token)
        .ok_or_else(|| AppError::ValidationError("Token not provided".to_string()))?;

    let tokens = SocialLoginService::instance().login(provider, &token).await?;

    Ok(HttpResponse::Ok().json(tokens))
}

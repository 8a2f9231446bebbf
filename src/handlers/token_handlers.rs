use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::tokens::{AccessTokenResponse, TokenObtainRequest, TokenRefreshRequest, TokenVerifyRequest};
use crate::services::auth::TokenService;
use crate::services::users::UserService;

/// 이메일/비밀번호 로그인 → `{refresh, access}`
#[post("/token")]
pub async fn obtain_token_handler(
    payload: web::Json<TokenObtainRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let tokens = UserService::instance().authenticate(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(tokens))
}

/// 리프레시 토큰 → `{access}`
#[post("/token/refresh")]
pub async fn refresh_token_handler(
    payload: web::Json<TokenRefreshRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let access = TokenService::instance().refresh_access_token(&payload.refresh)?;

    Ok(HttpResponse::Ok().json(AccessTokenResponse { access }))
}

/// 토큰 검증 → `{}`
#[post("/token/verify")]
pub async fn verify_token_handler(
    payload: web::Json<TokenVerifyRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    TokenService::instance().verify_token(&payload.token)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({})))
}

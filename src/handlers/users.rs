use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::users::UserService;

/// 회원가입 → 201 `{refresh, access}`
#[post("/create")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = UserService::instance();
    let tokens = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(tokens))
}

/// `GET /me`
pub async fn get_me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let profile = service.get_me(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// `PATCH /me`, `PUT /me`
pub async fn update_me(
    user: AuthenticatedUser,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let service = UserService::instance();
    let profile = service.update_me(&user.user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(profile))
}

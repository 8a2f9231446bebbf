use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::core::errors::AppError;
use crate::domain::models::token::TokenClaims;

/// 액세스 토큰에서 추출된 사용자 정보
///
/// `AuthMiddleware`가 검증에 성공하면 request extensions에 넣어 두고,
/// 핸들러는 인자로 선언해서 꺼내 씁니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    pub email: String,

    /// 세션을 만든 인증 방식
    pub auth_provider: AuthProvider,

    pub role: String,

    pub is_staff: bool,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            auth_provider: claims.auth_provider,
            role: claims.role,
            is_staff: claims.is_staff,
        }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Authentication credentials were not provided.".to_string(),
            )
            .into())),
        }
    }
}

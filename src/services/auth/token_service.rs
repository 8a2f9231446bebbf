//! JWT 세션 토큰 서비스
//!
//! HS256 서명 액세스/리프레시 토큰의 발급, 검증, 갱신을 담당합니다.
//! 세션은 상태 없이 서명과 만료 시각만으로 판단하며 서버에 저장하지 않습니다.
//!
//! | 토큰 | 기본 유효 기간 | 용도 |
//! |------|----------------|------|
//! | access | 60분 | `Authorization: Bearer` 헤더로 보호된 API 호출 |
//! | refresh | 1일 | `/api/user/token/refresh`에서 새 액세스 토큰 발급 |

use std::sync::Arc;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use uuid::Uuid;
use crate::{
    config::{AuthProvider, JwtConfig},
    core::errors::{AppError, AppResult, ErrorContext},
    domain::dto::tokens::TokenPairResponse,
    domain::entities::users::User,
    domain::models::token::{TokenClaims, TokenType},
};

const INVALID_TOKEN_MESSAGE: &str = "Token is invalid or expired";

/// JWT 세션 토큰 서비스
///
/// 비밀키와 유효 기간을 필드로 들고 있어서 테스트에서는 [`TokenService::new`]로,
/// 애플리케이션에서는 [`TokenService::instance`]로 생성합니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

static TOKEN_SERVICE_INSTANCE: OnceCell<Arc<TokenService>> = OnceCell::new();

impl TokenService {
    pub fn new(secret: &str, access_expiration_minutes: i64, refresh_expiration_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_lifetime: Duration::minutes(access_expiration_minutes),
            refresh_lifetime: Duration::days(refresh_expiration_days),
        }
    }

    /// 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 첫 호출 시 `JwtConfig`에서 비밀키와 유효 기간을 읽습니다.
    pub fn instance() -> Arc<Self> {
        TOKEN_SERVICE_INSTANCE
            .get_or_init(|| {
                Arc::new(Self::new(
                    &JwtConfig::secret(),
                    JwtConfig::access_expiration_minutes(),
                    JwtConfig::refresh_expiration_days(),
                ))
            })
            .clone()
    }

    /// 액세스 토큰과 리프레시 토큰을 함께 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 저장되지 않은 사용자(ID 없음) 또는 서명 실패
    pub fn generate_token_pair(&self, user: &User, provider: AuthProvider) -> AppResult<TokenPairResponse> {
        let user_id = user.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;

        let base = TokenClaims {
            sub: user_id.clone(),
            user_id,
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            is_staff: user.is_staff,
            auth_provider: provider,
            token_type: TokenType::Access,
            jti: String::new(),
            iat: 0,
            exp: 0,
        };

        let access = self.sign(base.clone(), TokenType::Access)?;
        let refresh = self.sign(base, TokenType::Refresh)?;

        Ok(TokenPairResponse { refresh, access })
    }

    /// 서명과 만료 시각을 검증하고 클레임을 반환합니다. 토큰 종류는 따지지 않습니다.
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<TokenClaims>(token, &self.decoding_key, &validation)?;
        Ok(data.claims)
    }

    /// 액세스 토큰만 허용합니다. 인증 미들웨어가 사용합니다.
    pub fn verify_access_token(&self, token: &str) -> AppResult<TokenClaims> {
        let claims = self.verify_token(token)?;
        if claims.token_type != TokenType::Access {
            return Err(AppError::AuthenticationError(INVALID_TOKEN_MESSAGE.to_string()));
        }
        Ok(claims)
    }

    /// 리프레시 토큰으로 같은 사용자 정보를 담은 새 액세스 토큰을 발급합니다.
    pub fn refresh_access_token(&self, refresh_token: &str) -> AppResult<String> {
        let claims = self.verify_token(refresh_token)?;
        if claims.token_type != TokenType::Refresh {
            log::warn!("리프레시 자리에 {:?} 토큰 사용: user={}", claims.token_type, claims.sub);
            return Err(AppError::AuthenticationError(INVALID_TOKEN_MESSAGE.to_string()));
        }

        self.sign(claims, TokenType::Access)
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::AuthenticationError("Authorization header must contain a Bearer token".to_string())
            })
    }

    fn sign(&self, mut claims: TokenClaims, token_type: TokenType) -> AppResult<String> {
        let now = Utc::now();
        let lifetime = match token_type {
            TokenType::Access => self.access_lifetime,
            TokenType::Refresh => self.refresh_lifetime,
        };

        claims.token_type = token_type;
        claims.jti = Uuid::new_v4().to_string();
        claims.iat = now.timestamp();
        claims.exp = (now + lifetime).timestamp();

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("JWT 토큰 생성 실패")
    }
}

fn token_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(TokenService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "token",
        constructor: token_service_constructor,
    }
}

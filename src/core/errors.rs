//! # Application Error Handling
//!
//! 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! 모든 계층(리포지토리, 서비스, 핸들러)은 `AppResult<T>`를 반환하며,
//! 핸들러에서 반환된 `AppError`는 `ResponseError` 구현을 통해
//! `{"error": "..."}` 형태의 JSON 응답으로 자동 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 토큰 누락, 미설정 프로바이더 |
//! | `AuthenticationError` | 401 Unauthorized | 로그인 실패, 만료/위조 토큰 |
//! | `AuthorizationError` | 403 Forbidden | 권한 부족 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | 사용자명 중복 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `RedisError` | 500 Internal Server Error | 캐시 오류 |
//! | `ExternalServiceError` | 500 Internal Server Error | 소셜 프로바이더 API 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 4xx 응답의 본문에는 변형이 가진 메시지가 그대로 들어갑니다.
//! 5xx 응답은 내부 정보를 숨기고 `"Internal server error"`만 내려주며,
//! 상세 메시지는 `log::error!`로 남깁니다.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `Display` 구현(로그용)은 카테고리 접두사를 포함하고,
/// 클라이언트 응답은 [`AppError::client_message`]를 사용합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러
    ///
    /// 필수 필드 누락, 형식 오류, 설정되지 않은 소셜 프로바이더 등
    /// 클라이언트 요청 자체의 문제를 나타냅니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러
    ///
    /// # 발생 시나리오
    /// - 잘못된 이메일/비밀번호
    /// - 만료되었거나 서명이 올바르지 않은 JWT
    /// - 리프레시 토큰 자리에 액세스 토큰 사용
    /// - 비활성화된 계정으로 소셜 로그인
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스 에러
    ///
    /// Google/Facebook user-info 엔드포인트 호출 실패(비 200 응답, 타임아웃,
    /// JSON 파싱 실패)가 여기에 해당합니다. 재시도하지 않고 그대로 500으로 응답합니다.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출할 메시지
    pub fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg) => msg.clone(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("❌ {}", self);
        }

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.client_message()
        }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::RedisError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    /// 첫 번째 필드 에러의 메시지를 사용합니다.
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| match &err.message {
                    Some(msg) => format!("{}: {}", field, msg),
                    None => format!("{}: {}", field, err.code),
                })
            })
            .next()
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::ValidationError(message)
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(e: bcrypt::BcryptError) -> Self {
        AppError::InternalError(format!("비밀번호 해싱 실패: {}", e))
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    /// 서명/만료/형식 오류 모두 같은 401 메시지로 응답합니다.
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        log::debug!("JWT 검증 실패: {}", e);
        AppError::AuthenticationError("Token is invalid or expired".to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::ExternalServiceError(e.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(e: mongodb::bson::ser::Error) -> Self {
        AppError::InternalError(format!("BSON 직렬화 실패: {}", e))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

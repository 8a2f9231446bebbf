//! # 사용자 서비스
//!
//! 이메일/비밀번호 기반 계정 관리를 담당합니다.
//!
//! 1. **회원가입**: 이메일 정규화, bcrypt 해싱, 세션 토큰 발급
//! 2. **자격 증명 로그인**: 비밀번호 검증 후 `last_login` 기록
//! 3. **프로필**: 액세스 토큰 주인의 조회/부분 수정
//!
//! 소셜 로그인으로 생성된 사용자는 비밀번호가 없으므로 프로필에서
//! 비밀번호를 설정하기 전까지 자격 증명 로그인을 할 수 없습니다.

use std::sync::Arc;
use bcrypt::{hash, verify};
use mongodb::bson::{doc, Document};
use singleton_macro::service;
use crate::{
    config::{AuthProvider, PasswordConfig},
    core::errors::{AppError, AppResult},
    domain::dto::tokens::{TokenObtainRequest, TokenPairResponse},
    domain::dto::users::{CreateUserRequest, UpdateUserRequest, UserResponse},
    domain::entities::users::User,
    repositories::{stores::UserStore, users::UserRepository},
    services::auth::TokenService,
    utils::string_utils::normalize_email,
};

const INVALID_CREDENTIALS: &str = "No active account found with the given credentials";

#[service(name = "user")]
pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 회원가입
    ///
    /// 입력 검증은 핸들러에서 끝난 상태로 호출됩니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` (400) - 입력 검증 실패, 이미 가입된 이메일
    /// * `ConflictError` (409) - 이미 사용 중인 사용자명
    pub async fn register(&self, request: CreateUserRequest) -> AppResult<TokenPairResponse> {
        let password_hash = hash(&request.password, PasswordConfig::bcrypt_cost())?;
        let user = User {
            avatar: request.avatar,
            ..User::new_local(
                normalize_email(&request.email),
                password_hash,
                request.username,
                request.first_name,
                request.last_name,
            )
        };

        let created = self.user_repo.create(user).await?;

        TokenService::instance().generate_token_pair(&created, AuthProvider::Local)
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 이메일 없음, 비밀번호 불일치, 비활성 계정, 비밀번호 없는 계정은 모두
    /// 같은 401 메시지로 응답합니다.
    pub async fn authenticate(&self, request: TokenObtainRequest) -> AppResult<TokenPairResponse> {
        let email = normalize_email(&request.email);
        let candidate = self.user_repo.find_by_email(&email).await?;
        let user = check_credentials(candidate, &request.password)?;

        if let Some(id) = user.id.as_ref() {
            self.user_repo.record_login(id).await?;
        }

        TokenService::instance().generate_token_pair(&user, AuthProvider::Local)
    }

    /// 액세스 토큰 주인의 프로필
    pub async fn get_me(&self, user_id: &str) -> AppResult<UserResponse> {
        let user = self.load_active(user_id).await?;
        Ok(UserResponse::from(user))
    }

    /// 프로필 부분 수정. 비밀번호는 다시 해싱해서 저장합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` (400) - 다른 사용자가 쓰고 있는 이메일
    /// * `ConflictError` (409) - 이미 사용 중인 사용자명
    pub async fn update_me(&self, user_id: &str, request: UpdateUserRequest) -> AppResult<UserResponse> {
        let user = self.load_active(user_id).await?;
        if request.is_empty() {
            return Ok(UserResponse::from(user));
        }

        if let Some(email) = request.email.as_deref().map(normalize_email) {
            if email != user.email && self.user_repo.find_by_email(&email).await?.is_some() {
                return Err(AppError::ValidationError("User with this email already exists".to_string()));
            }
        }

        let update = build_update_document(request, PasswordConfig::bcrypt_cost())?;
        let updated = self
            .user_repo
            .update(user_id, update)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("User not found".to_string()))?;

        log::info!("👤 프로필 수정: {}", updated.email);
        Ok(UserResponse::from(updated))
    }

    /// 토큰은 유효하지만 사용자가 삭제되었거나 비활성이면 401입니다.
    async fn load_active(&self, user_id: &str) -> AppResult<User> {
        match self.user_repo.find_by_id(user_id).await {
            Ok(Some(user)) if user.is_active => Ok(user),
            Ok(_) | Err(AppError::ValidationError(_)) => {
                Err(AppError::AuthenticationError("User not found".to_string()))
            }
            Err(e) => Err(e),
        }
    }
}

fn check_credentials(candidate: Option<User>, password: &str) -> AppResult<User> {
    let invalid = || AppError::AuthenticationError(INVALID_CREDENTIALS.to_string());

    let user = candidate.ok_or_else(invalid)?;
    if !user.can_authenticate_with_password() {
        log::warn!("비밀번호 로그인 불가 계정: {}", user.email);
        return Err(invalid());
    }

    let password_hash = user.password_hash.as_deref().ok_or_else(invalid)?;
    if !verify(password, password_hash)? {
        log::warn!("비밀번호 불일치: {}", user.email);
        return Err(invalid());
    }

    Ok(user)
}

fn build_update_document(request: UpdateUserRequest, bcrypt_cost: u32) -> AppResult<Document> {
    let mut update = doc! {};

    if let Some(email) = request.email {
        update.insert("email", normalize_email(&email));
    }
    if let Some(username) = request.username {
        update.insert("username", username);
    }
    if let Some(first_name) = request.first_name {
        update.insert("first_name", first_name);
    }
    if let Some(last_name) = request.last_name {
        update.insert("last_name", last_name);
    }
    if let Some(avatar) = request.avatar {
        update.insert("avatar", avatar);
    }
    if let Some(password) = request.password {
        update.insert("password_hash", hash(&password, bcrypt_cost)?);
    }

    Ok(update)
}

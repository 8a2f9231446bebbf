//! User Entity Implementation
//!
//! 로컬 회원가입과 소셜 로그인 양쪽에서 생성되는 사용자 엔티티입니다.
//! 이메일이 사용자의 유일한 식별 키이며 (`users.email` 유니크 인덱스),
//! 소셜 계정 연결 정보는 별도 컬렉션(`social_accounts`)에 저장됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }
}

/// 사용자 엔티티
///
/// # MongoDB 스키마
///
/// ```json
/// {
///   "_id": ObjectId("..."),
///   "email": "Jane@example.com",
///   "username": "jane",
///   "password_hash": "$2b$12$...",
///   "first_name": "Jane",
///   "last_name": "Doe",
///   "is_active": true,
///   "is_staff": false,
///   "role": "user",
///   "date_joined": ISODate("..."),
///   "updated_at": ISODate("...")
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// MongoDB ObjectId
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 정규화된 이메일 (도메인 부분 소문자)
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// bcrypt 해시. 소셜 로그인으로 생성된 사용자는 비밀번호가 없습니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,

    /// 아바타 이미지 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    pub is_active: bool,
    pub is_staff: bool,

    #[serde(default)]
    pub is_superuser: bool,

    #[serde(default)]
    pub role: UserRole,

    pub date_joined: DateTime,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime>,

    pub updated_at: DateTime,
}

impl User {
    /// 이메일/비밀번호 회원가입 사용자
    pub fn new_local(
        email: String,
        password_hash: String,
        username: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Self {
        let mut user = Self::blank(email);
        user.password_hash = Some(password_hash);
        user.username = username;
        user.first_name = first_name;
        user.last_name = last_name;
        user
    }

    /// 소셜 로그인으로 처음 생성되는 사용자
    ///
    /// 사용자명은 이메일로 채워지고 비밀번호는 설정되지 않습니다.
    pub fn new_social(email: String, first_name: Option<String>, last_name: Option<String>) -> Self {
        let mut user = Self::blank(email.clone());
        user.username = Some(email);
        user.first_name = first_name;
        user.last_name = last_name;
        user
    }

    /// 관리자 계정 (시딩/테스트용)
    pub fn new_superuser(email: String, password_hash: String) -> Self {
        let mut user = Self::new_local(email, password_hash, None, None, None);
        user.is_staff = true;
        user.is_superuser = true;
        user.role = UserRole::Admin;
        user
    }

    fn blank(email: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            username: None,
            password_hash: None,
            avatar: None,
            first_name: None,
            last_name: None,
            is_active: true,
            is_staff: false,
            is_superuser: false,
            role: UserRole::User,
            date_joined: now,
            last_login: None,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// `"<first> <last>"`, 한쪽이 없으면 있는 쪽만
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{} {}", first, last).trim().to_string()
    }

    pub fn can_authenticate_with_password(&self) -> bool {
        self.is_active && self.password_hash.is_some()
    }
}

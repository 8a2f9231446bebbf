//! # 회원가입 요청 DTO
//!
//! ## 검증 규칙
//!
//! - `email`: 필수, 이메일 형식, 최대 255자. 중복 여부는 서비스 계층에서 확인
//! - `password`: 필수, 최소 5자
//! - `username`: 선택, 최대 30자
//! - `first_name`, `last_name`: 선택, 최대 24자
//! - `avatar`: 선택, URL 형식
//!
//! ```json
//! {
//!   "email": "jane@example.com",
//!   "password": "secret1",
//!   "username": "jane",
//!   "first_name": "Jane",
//!   "last_name": "Doe"
//! }
//! ```

use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "Enter a valid email address."))]
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub email: String,

    #[validate(length(min = 5, message = "Ensure this field has at least 5 characters."))]
    pub password: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 30, message = "Ensure this field has no more than 30 characters."))]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 24, message = "Ensure this field has no more than 24 characters."))]
    pub first_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 24, message = "Ensure this field has no more than 24 characters."))]
    pub last_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(url(message = "Enter a valid URL."))]
    pub avatar: Option<String>,
}

use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// 프로필 수정 요청 (`PATCH`/`PUT /api/user/me`)
///
/// 모든 필드가 선택이며 값이 있는 필드만 반영됩니다.
/// 이메일은 저장 전에 정규화되고, 다른 사용자가 쓰고 있으면 400입니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(
        email(message = "Enter a valid email address."),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    pub email: Option<String>,

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

    /// 새 비밀번호. 저장 전에 다시 해싱됩니다.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 5, message = "Ensure this field has at least 5 characters."))]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.avatar.is_none()
            && self.password.is_none()
    }
}

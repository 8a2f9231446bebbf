use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 사용자 응답 DTO
///
/// 비밀번호 해시와 내부 플래그는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub username: Option<String>,
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub last_login: Option<DateTime<Utc>>,
    pub date_joined: Option<DateTime<Utc>>,
    /// `admin` | `user`
    pub role: String,
}

fn to_chrono(dt: mongodb::bson::DateTime) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(dt.timestamp_millis())
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let full_name = user.full_name();
        let User {
            id,
            email,
            username,
            first_name,
            last_name,
            avatar,
            last_login,
            date_joined,
            role,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            username,
            full_name,
            first_name,
            last_name,
            avatar,
            last_login: last_login.and_then(to_chrono),
            date_joined: to_chrono(date_joined),
            role: role.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_response_hides_password_hash() {
        let mut user = User::new_local(
            "jane@example.com".to_string(),
            "$2b$04$secret-hash".to_string(),
            Some("jane".to_string()),
            Some("Jane".to_string()),
            Some("Doe".to_string()),
        );
        user.id = Some(ObjectId::new());

        let response = UserResponse::from(user.clone());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], user.id_string().unwrap());
        assert_eq!(json["full_name"], "Jane Doe");
        assert_eq!(json["role"], "user");
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("secret-hash"));
        assert!(json["last_login"].is_null());
        assert!(json["date_joined"].is_string());
    }
}

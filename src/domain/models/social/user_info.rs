//! 프로바이더 user-info 응답 정규화
//!
//! Google과 Facebook은 같은 정보를 다른 키로 돌려줍니다.
//!
//! | 정규화 키 | Google | Facebook |
//! |-----------|--------|----------|
//! | `id` | `sub` | `id` |
//! | `email` | `email` | `email` |
//! | `first_name` | `given_name` | `first_name` |
//! | `last_name` | `family_name` | `last_name` |
//!
//! 매핑되지 않은 키(`picture`, `name`, `locale` 등)는 이름 그대로 스냅샷에 남고,
//! 스냅샷은 소셜 계정의 `extra_data`로 저장됩니다.

use serde_json::{Map, Value};
use crate::config::AuthProvider;
use crate::core::errors::{AppError, AppResult};

const GOOGLE_KEY_MAP: &[(&str, &str)] = &[
    ("sub", "id"),
    ("given_name", "first_name"),
    ("family_name", "last_name"),
];

/// 정규화된 프로바이더 사용자 정보
#[derive(Debug, Clone, PartialEq)]
pub struct SocialUserInfo {
    /// 프로바이더 측 사용자 ID (숫자 ID는 문자열로 변환)
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// 정규화된 키로 다시 쓴 전체 응답
    pub extra: Value,
}

impl SocialUserInfo {
    /// 프로바이더 응답 본문을 정규화합니다.
    ///
    /// `id` 또는 `email`이 없으면 계정을 연결할 수 없으므로
    /// `400 Error with <Provider> login`으로 거절합니다.
    pub fn from_provider_response(provider: AuthProvider, body: Value) -> AppResult<Self> {
        let snapshot = match provider {
            AuthProvider::Google => rename_keys(body, GOOGLE_KEY_MAP),
            _ => rename_keys(body, &[]),
        };

        let login_error = || AppError::ValidationError(format!("Error with {} login", provider.display_name()));

        let id = snapshot.get("id").and_then(value_to_string).ok_or_else(|| {
            log::warn!("{} user-info 응답에 id가 없습니다", provider.display_name());
            login_error()
        })?;

        let email = snapshot
            .get("email")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                log::warn!("{} user-info 응답에 email이 없습니다 (uid={})", provider.display_name(), id);
                login_error()
            })?;

        let first_name = snapshot.get("first_name").and_then(value_to_string);
        let last_name = snapshot.get("last_name").and_then(value_to_string);

        Ok(Self {
            id,
            email,
            first_name,
            last_name,
            extra: snapshot,
        })
    }
}

fn rename_keys(body: Value, key_map: &[(&str, &str)]) -> Value {
    let Value::Object(fields) = body else {
        return Value::Object(Map::new());
    };

    let renamed: Map<String, Value> = fields
        .into_iter()
        .map(|(key, value)| {
            let key = key_map
                .iter()
                .find(|(from, _)| *from == key)
                .map(|(_, to)| to.to_string())
                .unwrap_or(key);
            (key, value)
        })
        .collect();

    Value::Object(renamed)
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

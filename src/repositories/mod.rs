//! # Repository Layer
//!
//! MongoDB 컬렉션 단위 데이터 액세스 계층입니다.
//!
//! | 리포지토리 | 컬렉션 | 캐시 |
//! |------------|--------|------|
//! | [`users::UserRepository`] | `users` | `user:{id}`, `user:email:{email}` (`CACHE_TTL_SECONDS`, 기본 10분) |
//! | [`social::SocialAccountRepository`] | `social_accounts` | `social_account:{provider}:{uid}` (`CACHE_TTL_SECONDS`, 기본 10분) |
//! | [`social::SocialTokenRepository`] | `social_tokens` | 없음 |
//!
//! 소셜 로그인 흐름이 의존하는 저장소 동작은 [`stores`]의 trait으로 분리되어 있어
//! MongoDB 없이도 메모리 구현으로 흐름을 검증할 수 있습니다.

pub mod stores;
pub mod users;
pub mod social;

/// MongoDB 유니크 인덱스 위반(E11000)이면 서버 에러 메시지를 반환합니다.
fn duplicate_key_message(error: &mongodb::error::Error) -> Option<&str> {
    use mongodb::error::{ErrorKind, WriteFailure};

    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000 => {
            Some(&write_error.message)
        }
        ErrorKind::Command(command_error) if command_error.code == 11000 => Some(&command_error.message),
        _ => None,
    }
}

/// MongoDB 유니크 인덱스 위반(E11000) 여부
pub(crate) fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    duplicate_key_message(error).is_some()
}

/// 위반된 유니크 인덱스 이름
pub(crate) fn duplicate_key_index(error: &mongodb::error::Error) -> Option<&str> {
    duplicate_key_message(error).and_then(index_name_from_message)
}

/// `E11000 duplicate key error collection: db.users index: email_unique dup key: {...}`
fn index_name_from_message(message: &str) -> Option<&str> {
    let (_, rest) = message.split_once("index: ")?;
    rest.split_whitespace().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_name_from_duplicate_key_message() {
        let message = r#"E11000 duplicate key error collection: social_auth.users index: username_unique dup key: { username: "jane@example.com" }"#;
        assert_eq!(index_name_from_message(message), Some("username_unique"));

        let message = r#"E11000 duplicate key error collection: social_auth.users index: email_unique dup key: { email: "jane@example.com" }"#;
        assert_eq!(index_name_from_message(message), Some("email_unique"));

        assert_eq!(index_name_from_message("E11000 duplicate key error"), None);
    }
}

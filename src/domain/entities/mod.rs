//! 도메인 엔티티
//!
//! MongoDB 컬렉션과 1:1로 대응하는 영속 모델입니다.
//!
//! | 엔티티 | 컬렉션 | 유니크 키 |
//! |--------|--------|-----------|
//! | [`users::User`] | `users` | `email` |
//! | [`social::SocialAccount`] | `social_accounts` | `(provider, uid)` |
//! | [`social::SocialToken`] | `social_tokens` | `(provider, account_id)` |
//!
//! [`social::SocialApp`]은 환경 변수에서 만들어지는 설정 엔티티로 저장되지 않습니다.

pub mod users;
pub mod social;

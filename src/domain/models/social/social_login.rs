use crate::domain::entities::{social::{SocialAccount, SocialToken}, users::User};

/// 소셜 로그인 계정 연결 결과
///
/// 세션 토큰 발급 직전 상태입니다. `user`는 항상 `account`의 소유자입니다.
#[derive(Debug, Clone)]
pub struct SocialLogin {
    pub user: User,
    pub account: SocialAccount,
    pub token: SocialToken,
    /// 이미 연결되어 있던 계정으로 로그인했는지 여부
    pub is_existing: bool,
}

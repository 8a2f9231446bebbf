pub mod user_info;
pub mod social_login;

pub use user_info::SocialUserInfo;
pub use social_login::SocialLogin;

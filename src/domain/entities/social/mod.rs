pub mod social_account;
pub mod social_token;
pub mod social_app;

pub use social_account::SocialAccount;
pub use social_token::SocialToken;
pub use social_app::SocialApp;

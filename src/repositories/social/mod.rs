pub mod social_account_repo;
pub mod social_token_repo;

pub use social_account_repo::SocialAccountRepository;
pub use social_token_repo::SocialTokenRepository;

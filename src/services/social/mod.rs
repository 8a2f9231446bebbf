//! 소셜 로그인 (프로바이더 토큰 교환)
//!
//! - [`fetcher`]: 프로바이더 user-info 호출과 정규화
//! - [`app_registry`]: 구성된 프로바이더 애플리케이션
//! - [`flow`]: 사용자/계정/토큰 연결 흐름
//! - [`social_login_service`]: 흐름 실행 + 세션 토큰 발급

pub mod fetcher;
pub mod app_registry;
pub mod flow;
pub mod social_login_service;

pub use app_registry::SocialAppRegistry;
pub use fetcher::{FacebookUserInfoFetcher, GoogleUserInfoFetcher, UserInfoFetcher};
pub use social_login_service::SocialLoginService;

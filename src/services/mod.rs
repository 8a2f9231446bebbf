//! # Service Layer
//!
//! 비즈니스 로직 계층입니다. 서비스는 싱글톤이며 리포지토리를 `Arc` 필드로 주입받습니다.
//!
//! - [`auth`]: JWT 세션 토큰
//! - [`users`]: 회원가입, 자격 증명 로그인, 프로필
//! - [`social`]: 프로바이더 토큰 교환 로그인

pub mod auth;
pub mod users;
pub mod social;

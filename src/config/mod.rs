//! # Configuration Module
//!
//! 환경 변수 기반 설정을 타입 안전한 정적 getter로 제공합니다.
//!
//! - [`data_config`]: 실행 환경, 서버, MongoDB, Redis, 레이트 리밋, CORS, 헬스 체크
//! - [`auth_config`]: JWT, 인증 방식(`AuthProvider`), 소셜 프로바이더 애플리케이션
//!
//! `.env` 파일은 `main`에서 `PROFILE`(dev/prod)에 따라 로딩됩니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

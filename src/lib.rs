//! 소셜 인증 백엔드
//!
//! 회원가입, JWT 세션 토큰, 그리고 Google/Facebook 토큰 교환 방식의
//! 소셜 로그인을 제공하는 인증 백엔드입니다.
//!
//! # Features
//!
//! - **회원가입/로그인**: 이메일과 비밀번호, bcrypt 해싱
//! - **JWT 세션**: 액세스(60분)/리프레시(1일) 토큰, 상태 없음
//! - **소셜 로그인**: 클라이언트가 받은 프로바이더 토큰으로 user-info 조회 후 계정 연결
//! - **싱글톤 DI**: 매크로 기반 리포지토리/서비스 주입
//! - **MongoDB**: 사용자, 소셜 계정, 프로바이더 토큰 저장
//! - **Redis**: 사용자/소셜 계정 조회 캐시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/user/*, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 본문 추출, 입력 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 토큰 발급, 계정 연결 흐름
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← get-or-create upsert, 캐시
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_auth_backend::config::AuthProvider;
//! use social_auth_backend::services::social::SocialLoginService;
//!
//! let tokens = SocialLoginService::instance()
//!     .login(AuthProvider::Google, "ya29.a0Af...")
//!     .await?;
//! println!("access={}, refresh={}", tokens.access, tokens.refresh);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

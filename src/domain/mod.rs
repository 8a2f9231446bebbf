//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 영속 모델 (User, SocialAccount, SocialToken) + 설정 엔티티 SocialApp
//! ├── dto       - HTTP 요청/응답 본문
//! └── models    - JWT 클레임, 인증 사용자, 프로바이더 user-info 정규화 결과
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```
//!
//! 엔티티는 저장 형식을, DTO는 API 계약을 담당하며 둘은 `From` 변환으로만 연결됩니다.
//! 엔티티를 그대로 응답으로 내보내지 않으므로 비밀번호 해시가 노출될 일이 없습니다.

pub mod entities;
pub mod dto;
pub mod models;

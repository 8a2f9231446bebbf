//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문 구조체입니다. 요청 DTO는 `validator`로 필드 검증을 하고,
//! 검증 에러는 `AppError::ValidationError`(400)로 변환됩니다.
//!
//! - [`users`]: 회원가입, 프로필 조회/수정
//! - [`tokens`]: 자격 증명 로그인, 토큰 갱신/검증
//! - [`social`]: 프로바이더 토큰 교환

pub mod users;
pub mod tokens;
pub mod social;

//! 도메인 모델
//!
//! 저장되지 않는 값 객체들입니다.
//!
//! - [`token`]: JWT 클레임과 세션 토큰 종류
//! - [`auth`]: 인증 미들웨어가 요청에 실어 주는 사용자 정보
//! - [`social`]: 프로바이더 user-info 정규화 결과와 소셜 로그인 결과

pub mod auth;
pub mod token;
pub mod social;

//! HTTP 핸들러
//!
//! 요청 본문 추출과 입력 검증만 하고 나머지는 서비스에 위임합니다.
//! 서비스 싱글톤은 검증이 끝난 뒤에만 꺼내므로 잘못된 요청은 저장소에 닿지 않습니다.

pub mod users;
pub mod token_handlers;
pub mod social;
pub mod health;

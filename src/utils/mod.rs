//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 이메일 정규화, 선택 입력값 정리
//! - [`display_terminal`] - 기동 과정 터미널 출력

pub mod string_utils;
pub mod display_terminal;

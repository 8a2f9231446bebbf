//! 캐시 계층
//!
//! Redis 기반 JSON 캐시 클라이언트를 제공합니다.

pub mod redis;

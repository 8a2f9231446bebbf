//! 미들웨어 모듈
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <access>` 헤더 추출 및 JWT 검증
//! - 리프레시 토큰으로는 보호된 API를 호출할 수 없음
//! - 검증된 사용자 정보를 request extensions에 저장
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! web::resource("/me")
//!     .wrap(AuthMiddleware::required())
//!     .route(web::get().to(get_me));
//! ```
//!
//! 핸들러는 [`crate::domain::models::auth::AuthenticatedUser`]를 인자로 받아 사용합니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;

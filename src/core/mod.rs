//! # Core Framework Module
//!
//! 서비스 전체가 공유하는 기반 기능입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 타입 기반 싱글톤 조회/생성
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 등록
//! - **수동 등록**: `Database`, `RedisClient`, `SocialAppRegistry` 같은 인프라
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: `ResponseError` 구현으로 `{"error": "..."}` 응답 생성
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `@Component` | `#[service]` / `#[repository]` |
//! | `ApplicationContext` | `ServiceLocator` |
//! | `@Autowired` | `Arc<T>` 필드 자동 주입 |
//! | `@ExceptionHandler` | `AppError::error_response()` |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use singleton_macro::{repository, service};
//!
//! #[repository(name = "user", collection = "users")]
//! pub struct UserRepository {
//!     db: Arc<Database>,
//!     redis: Arc<RedisClient>,
//! }
//!
//! #[service(name = "user")]
//! pub struct UserService {
//!     user_repo: Arc<UserRepository>,  // 자동 주입
//! }
//!
//! let user_service = UserService::instance();
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 미등록 타입 에러
//! ```text
//! panic: Service not found: SocialAppRegistry. Register it with #[service]/#[repository] or ServiceLocator::set()
//! ```
//! **해결**: `main`에서 `initialize_all()` 전에 `ServiceLocator::set()`으로 등록

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;

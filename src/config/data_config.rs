//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 캐시, 서버, 보안(레이트 리밋, CORS) 관련 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽고, 없거나 파싱할 수 없으면 기본값을 사용합니다.

use std::env;
use std::str::FromStr;

/// 환경 변수를 읽어 파싱하고, 실패하면 기본값을 돌려줍니다.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(env::var(key).ok(), default)
}

fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로 현재 실행 환경을 감지합니다 (기본값 `Production`).
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt cost
    ///
    /// `BCRYPT_COST`가 4~15 범위면 그 값을, 아니면 실행 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// actix 워커 스레드 수
    pub fn workers() -> usize {
        env_or("SERVER_WORKERS", 4)
    }
}

/// MongoDB 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "social_auth".to_string())
    }

    /// 기동 시 DB 대기 최대 시도 횟수 (1초 간격)
    pub fn wait_retries() -> u32 {
        env_or("DATABASE_WAIT_RETRIES", 30)
    }
}

/// Redis 캐시 설정
pub struct RedisConfig;

impl RedisConfig {
    pub fn url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// 사용자 캐시 TTL (초)
    pub fn cache_ttl_seconds() -> usize {
        env_or("CACHE_TTL_SECONDS", 600)
    }
}

/// 레이트 리밋 설정 (actix-governor)
pub struct RateLimitConfig;

impl RateLimitConfig {
    pub fn per_second() -> u64 {
        env_or("RATE_LIMIT_PER_SECOND", 10)
    }

    pub fn burst_size() -> u32 {
        env_or("RATE_LIMIT_BURST_SIZE", 30)
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// `CORS_ALLOWED_ORIGINS` (콤마 구분)
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default())
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// 헬스 체크 설정
pub struct HealthCheckConfig;

impl HealthCheckConfig {
    pub fn path() -> String {
        let path = env::var("HEALTH_CHECK_URL").unwrap_or_else(|_| "/health".to_string());
        // NormalizePath::trim() 이후 경로와 맞춥니다.
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            "/health".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or(Some("25".to_string()), 10u64), 25);
        assert_eq!(parse_or(Some(" 7 ".to_string()), 10u64), 7);
        assert_eq!(parse_or(Some("ten".to_string()), 10u64), 10);
        assert_eq!(parse_or::<u64>(None, 10), 10);
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            CorsConfig::parse_origins("http://localhost:3000, https://app.example.com,,"),
            vec!["http://localhost:3000".to_string(), "https://app.example.com".to_string()]
        );
        assert!(CorsConfig::parse_origins("").is_empty());
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }
        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_health_check_default_path() {
        if env::var("HEALTH_CHECK_URL").is_err() {
            assert_eq!(HealthCheckConfig::path(), "/health");
        }
    }
}

//! # Redis 캐시 클라이언트
//!
//! 리포지토리의 read-through 캐시로 사용되는 Redis 클라이언트입니다.
//! 값은 JSON 문자열로 저장되며, `ConnectionManager`가 끊어진 연결을 자동으로 복구합니다.
//!
//! 캐시는 보조 저장소이므로 호출 측(리포지토리)은 캐시 에러를 로그로만 남기고
//! 요청을 실패시키지 않습니다.

use redis::{aio::ConnectionManager, AsyncCommands, Client};
use serde::{de::DeserializeOwned, Serialize};
use crate::config::RedisConfig;

#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

fn serialization_error(e: serde_json::Error) -> redis::RedisError {
    redis::RedisError::from((redis::ErrorKind::TypeError, "JSON conversion failed", e.to_string()))
}

impl RedisClient {
    /// `REDIS_URL`로 연결하고 PING으로 서버 가용성을 확인합니다.
    pub async fn new() -> Result<Self, redis::RedisError> {
        let client = Client::open(RedisConfig::url())?;
        let mut manager = client.get_connection_manager().await?;
        redis::cmd("PING").query_async::<()>(&mut manager).await?;

        log::info!("✅ Redis 연결 성공");
        Ok(Self { manager })
    }

    /// JSON으로 저장된 값을 읽어 역직렬화합니다. 키가 없으면 `Ok(None)`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;

        value
            .map(|json| serde_json::from_str(&json).map_err(serialization_error))
            .transpose()
    }

    /// TTL(초)과 함께 저장합니다.
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: usize) -> Result<(), redis::RedisError> {
        let json = serde_json::to_string(value).map_err(serialization_error)?;
        let mut conn = self.manager.clone();
        conn.set_ex(key, json, seconds as u64).await
    }

    /// 키를 삭제합니다. 없는 키도 성공으로 처리합니다.
    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.manager.clone();
        conn.del(key).await
    }

    /// 여러 키를 한 번의 왕복으로 삭제합니다.
    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), redis::RedisError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.manager.clone();
        conn.del(keys).await
    }

    /// 패턴에 맞는 키 목록 (`KEYS`)
    ///
    /// `#[repository]`가 생성하는 컬렉션 캐시 무효화가 사용합니다.
    /// 키 전체를 훑으므로 요청 경로에서 직접 호출하지 않습니다.
    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, redis::RedisError> {
        let mut conn = self.manager.clone();
        conn.keys(pattern).await
    }
}

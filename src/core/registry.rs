//! # Service Registry
//!
//! 싱글톤 리포지토리/서비스를 위한 타입 기반 의존성 주입 컨테이너입니다.
//!
//! `#[repository]`, `#[service]` 매크로(또는 수동 `inventory::submit!`)가 생성한
//! 등록 정보는 컴파일 타임에 `inventory`로 수집되고, [`ServiceLocator::get`]이
//! 타입 이름을 기준으로 알맞은 생성자를 찾아 인스턴스를 만든 뒤 캐시합니다.
//!
//! ```text
//! main.rs
//!   ├─ ServiceLocator::set(Arc<Database>)       ← 인프라 수동 등록
//!   ├─ ServiceLocator::set(Arc<RedisClient>)
//!   └─ ServiceLocator::initialize_all()         ← Repository → Service 순서로 생성
//!
//! SocialLoginService::instance()
//!   └─ ServiceLocator::get::<SocialLoginService>()
//!        ├─ 캐시 히트 → Arc 반환
//!        └─ "SocialLoginService" → "sociallogin" → 등록 정보 조회 → 생성 → 캐시
//! ```
//!
//! 등록 이름과 타입 이름은 소문자 변환 후 `_`를 제거하여 비교하므로
//! `social_account` 리포지토리는 `SocialAccountRepository` 타입과 매칭됩니다.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{
    print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete,
    print_step_start, print_sub_task,
};

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
///
/// `#[service]` 매크로가 적용된 구조체가 이 trait을 구현합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 레지스트리에서 서비스를 식별하는 이름
    fn name(&self) -> &str;

    /// 서비스 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
#[async_trait]
pub trait Repository: Send + Sync {
    /// 레지스트리에서 리포지토리를 식별하는 이름
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션 이름
    fn collection_name(&self) -> &str;

    /// 리포지토리 초기화 훅 (인덱스 생성 등)
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보
pub struct ServiceRegistration {
    /// 서비스의 고유 이름 (검색 키로 사용)
    pub name: &'static str,
    /// 인스턴스 생성 함수
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
pub struct RepositoryRegistration {
    /// 리포지토리의 고유 이름 (검색 키로 사용)
    pub name: &'static str,
    /// 인스턴스 생성 함수
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 정규화된 서비스 이름 → 등록 정보
static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (normalize_key(registration.name, "_service"), registration))
        .collect();

    print_cache_initialized("Service", cache.len());
    cache
});

/// 정규화된 리포지토리 이름 → 등록 정보
static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (normalize_key(registration.name, "_repository"), registration))
        .collect();

    print_cache_initialized("Repository", cache.len());
    cache
});

/// 등록 이름 정규화: 접미사 제거 → 소문자 → `_` 제거
///
/// `social_account_repository`, `social_account`, `SocialAccount`는 모두
/// `socialaccount`가 됩니다.
fn normalize_key(name: &str, suffix: &str) -> String {
    let lowered = name.to_lowercase();
    let trimmed = lowered.strip_suffix(suffix).unwrap_or(&lowered);
    trimmed.replace('_', "")
}

/// `std::any::type_name`의 모듈 경로를 제거합니다.
fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 싱글톤 의존성 주입 컨테이너
pub struct ServiceLocator {
    /// 생성된 인스턴스 캐시 (타입당 하나)
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    /// 현재 생성 중인 타입 (순환 참조 감지용)
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    fn read_instances(&self) -> RwLockReadGuard<'_, HashMap<TypeId, Arc<dyn Any + Send + Sync>>> {
        self.instances.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_instances(&self) -> RwLockWriteGuard<'_, HashMap<TypeId, Arc<dyn Any + Send + Sync>>> {
        self.instances.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_initializing(&self) -> RwLockWriteGuard<'_, HashSet<TypeId>> {
        self.initializing.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 캐시에 없으면 타입 이름의 `Repository`/`Service` 접미사로 레지스트리를 선택하고,
    /// 등록된 생성자로 인스턴스를 만들어 캐시합니다.
    ///
    /// # Panics
    ///
    /// 의존성 구성 오류는 기동 시점에 바로 드러나야 하므로 패닉으로 처리합니다.
    /// - 순환 참조 (A → B → A)
    /// - 등록되지 않은 타입
    /// - 등록 정보와 요청 타입 불일치
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = LOCATOR.read_instances().get(&type_id) {
            return Self::downcast::<T>(instance.clone(), type_name);
        }

        if !LOCATOR.write_initializing().insert(type_id) {
            log::error!("❌ Circular dependency detected for type: {}", type_name);
            panic!("Circular dependency detected: {} is already being initialized", type_name);
        }

        // 생성자 내부에서 다른 의존성을 get() 하므로 락을 잡지 않은 채로 생성합니다.
        let created = Self::construct::<T>(type_name);
        LOCATOR.write_initializing().remove(&type_id);

        let mut instances = LOCATOR.write_instances();
        let instance = instances
            .entry(type_id)
            .or_insert_with(|| created as Arc<dyn Any + Send + Sync>)
            .clone();
        Self::downcast::<T>(instance, type_name)
    }

    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Arc<T> {
        let short_name = short_type_name(type_name);

        let (kind, boxed) = if let Some(entity) = short_name.strip_suffix("Repository") {
            let key = normalize_key(entity, "_repository");
            let registration = REPOSITORY_NAME_CACHE
                .get(&key)
                .unwrap_or_else(|| panic!("No repository found for entity: {}", key));
            ("repository", (registration.constructor)())
        } else if let Some(entity) = short_name.strip_suffix("Service") {
            let key = normalize_key(entity, "_service");
            let registration = SERVICE_NAME_CACHE
                .get(&key)
                .unwrap_or_else(|| panic!("No service found for entity: {}", key));
            ("service", (registration.constructor)())
        } else {
            panic!(
                "Service not found: {}. Register it with #[service]/#[repository] or ServiceLocator::set()",
                type_name
            );
        };

        match boxed.downcast::<Arc<T>>() {
            Ok(instance) => *instance,
            Err(boxed) => match boxed.downcast::<Arc<dyn Any + Send + Sync>>() {
                Ok(erased) => Self::downcast::<T>(*erased, type_name),
                Err(_) => panic!("Type mismatch for {}: {}", kind, type_name),
            },
        }
    }

    fn downcast<T: 'static + Send + Sync>(instance: Arc<dyn Any + Send + Sync>, type_name: &str) -> Arc<T> {
        instance
            .downcast::<T>()
            .unwrap_or_else(|_| panic!("Type mismatch in ServiceLocator: {}", type_name))
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// `Database`, `RedisClient`처럼 매크로로 관리되지 않는 인프라 컴포넌트를
    /// `initialize_all()` 이전에 등록할 때 사용합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        log::info!("📦 Registering: {}", short_type_name(type_name));

        LOCATOR
            .write_instances()
            .insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 리포지토리가 먼저, 서비스가 나중에 생성됩니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();
        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");
            for registration in repo_registrations {
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }
            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();
        if service_count > 0 {
            print_step_start(2, "Creating Service instances");
            for registration in service_registrations {
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }
            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);
        Ok(())
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    struct ClockStub {
        now: i64,
    }

    #[test]
    fn test_normalize_key_strips_suffix_and_underscores() {
        assert_eq!(normalize_key("social_account_repository", "_repository"), "socialaccount");
        assert_eq!(normalize_key("social_account", "_repository"), "socialaccount");
        assert_eq!(normalize_key("SocialAccount", "_repository"), "socialaccount");
        assert_eq!(normalize_key("token_service", "_service"), "token");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(
            short_type_name("social_auth_backend::services::auth::TokenService"),
            "TokenService"
        );
        assert_eq!(short_type_name("TokenService"), "TokenService");
    }

    #[test]
    fn test_set_then_get_returns_same_instance() {
        ServiceLocator::set(Arc::new(ClockStub { now: 42 }));

        let first = ServiceLocator::get::<ClockStub>();
        let second = ServiceLocator::get::<ClockStub>();

        assert_eq!(first.now, 42);
        assert!(Arc::ptr_eq(&first, &second));
    }
}

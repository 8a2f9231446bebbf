use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use social_auth_backend::caching::redis::RedisClient;
use social_auth_backend::config::{
    CorsConfig, DatabaseConfig, Environment, HealthCheckConfig, RateLimitConfig, ServerConfig,
};
use social_auth_backend::core::registry::ServiceLocator;
use social_auth_backend::db::Database;
use social_auth_backend::repositories::social::{SocialAccountRepository, SocialTokenRepository};
use social_auth_backend::repositories::users::UserRepository;
use social_auth_backend::routes::configure_all_routes;
use social_auth_backend::services::social::SocialAppRegistry;
use social_auth_backend::utils::display_terminal::print_server_banner;

/// CORS_ALLOWED_ORIGINS가 비어 있을 때 허용하는 개발용 Origin
const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:8080",
    "http://127.0.0.1:8080",
];

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 소셜 인증 백엔드 시작중...");

    // 데이터 스토어 초기화
    let (database, redis_client) = initialize_data_stores().await?;

    // ServiceLocator에 인프라 등록
    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);
    let social_apps = SocialAppRegistry::from_env();
    if social_apps.configured_providers().is_empty() {
        warn!("구성된 소셜 프로바이더가 없습니다. 소셜 로그인 요청은 모두 400으로 거절됩니다");
    }
    ServiceLocator::set(Arc::new(social_apps));

    // 모든 서비스 초기화
    ServiceLocator::initialize_all()
        .await
        .map_err(|e| io::Error::other(format!("서비스 초기화 실패: {}", e)))?;

    create_indexes().await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server().await
}

async fn start_http_server() -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    print_server_banner(&bind_address, Environment::current().as_str(), &HealthCheckConfig::path());

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(RateLimitConfig::per_second())
        .burst_size(RateLimitConfig::burst_size())
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate limit 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        RateLimitConfig::per_second(),
        RateLimitConfig::burst_size()
    );

    let allowed_origins = allowed_origins();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(_) => {
                dotenv().ok();
                info!(".env.dev 파일 없음, 기본 .env 파일 로드");
            }
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// MongoDB가 뜰 때까지 기다린 뒤 Redis에 연결합니다.
async fn initialize_data_stores() -> io::Result<(Arc<Database>, Arc<RedisClient>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::wait_until_available(DatabaseConfig::wait_retries())
        .await
        .map_err(|e| io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?;

    let redis_client = RedisClient::new()
        .await
        .map_err(|e| io::Error::other(format!("Redis 연결 실패: {}", e)))?;

    Ok((Arc::new(database), Arc::new(redis_client)))
}

async fn create_indexes() -> io::Result<()> {
    let to_io = |e: social_auth_backend::core::errors::AppError| io::Error::other(format!("인덱스 생성 실패: {}", e));

    UserRepository::instance().create_indexes().await.map_err(to_io)?;
    SocialAccountRepository::instance().create_indexes().await.map_err(to_io)?;
    SocialTokenRepository::instance().create_indexes().await.map_err(to_io)?;

    info!("📇 MongoDB 인덱스 확인 완료");
    Ok(())
}

fn allowed_origins() -> Vec<String> {
    let configured = CorsConfig::allowed_origins();
    if configured.is_empty() {
        warn!("CORS_ALLOWED_ORIGINS 미설정, 로컬 개발용 Origin만 허용합니다");
        return DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect();
    }
    configured
}

fn configure_cors(origins: &[String]) -> Cors {
    let cors = origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

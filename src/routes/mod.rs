//! # 라우트 설정
//!
//! | 메서드 | 경로 | 인증 | 핸들러 |
//! |--------|------|------|--------|
//! | 전체 | `<HEALTH_CHECK_URL>` (기본 `/health`) | - | [`handlers::health::health_check`] |
//! | POST | `/api/user/create` | - | [`handlers::users::create_user`] |
//! | POST | `/api/user/token` | - | [`handlers::token_handlers::obtain_token_handler`] |
//! | POST | `/api/user/token/refresh` | - | [`handlers::token_handlers::refresh_token_handler`] |
//! | POST | `/api/user/token/verify` | - | [`handlers::token_handlers::verify_token_handler`] |
//! | POST | `/api/user/social/google` | - | [`handlers::social::google_login`] |
//! | POST | `/api/user/social/facebook` | - | [`handlers::social::facebook_login`] |
//! | GET, PATCH, PUT | `/api/user/me` | access 토큰 | [`handlers::users`] |
//!
//! 앱은 `NormalizePath::trim()`으로 감싸므로 끝 슬래시 유무는 구분하지 않습니다.

use actix_web::{error::JsonPayloadError, web, HttpRequest};
use crate::config::HealthCheckConfig;
use crate::core::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    // 메서드와 무관하게 200
    cfg.service(
        web::resource(HealthCheckConfig::path()).route(web::route().to(handlers::health::health_check)),
    );

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/user")
            .service(handlers::users::create_user)
            .service(handlers::token_handlers::obtain_token_handler)
            .service(handlers::token_handlers::refresh_token_handler)
            .service(handlers::token_handlers::verify_token_handler)
            .service(handlers::social::google_login)
            .service(handlers::social::facebook_login)
            .service(
                web::resource("/me")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(handlers::users::get_me))
                    .route(web::patch().to(handlers::users::update_me))
                    .route(web::put().to(handlers::users::update_me)),
            ),
    );
}

/// 잘못된 JSON 본문도 `{"error": ...}` 형식의 400으로 응답합니다.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, middleware::NormalizePath, test, App};
    use mongodb::bson::oid::ObjectId;
    use serde_json::{json, Value};
    use crate::config::AuthProvider;
    use crate::domain::dto::tokens::TokenPairResponse;
    use crate::domain::entities::users::User;
    use crate::services::auth::TokenService;

    macro_rules! app {
        () => {
            test::init_service(App::new().wrap(NormalizePath::trim()).configure(configure_all_routes)).await
        };
    }

    fn issued_pair() -> TokenPairResponse {
        let mut user = User::new_social("jane@example.com".to_string(), None, None);
        user.id = Some(ObjectId::new());
        TokenService::instance().generate_token_pair(&user, AuthProvider::Google).unwrap()
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = app!();

        let req = test::TestRequest::get().uri(&HealthCheckConfig::path()).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": "OK", "message": "Application is running!" }));
    }

    #[actix_web::test]
    async fn test_health_check_answers_any_method() {
        let app = app!();

        let requests = [
            test::TestRequest::post().uri(&HealthCheckConfig::path()).to_request(),
            test::TestRequest::default().method(actix_web::http::Method::HEAD).uri(&HealthCheckConfig::path()).to_request(),
            test::TestRequest::delete().uri(&HealthCheckConfig::path()).to_request(),
        ];

        for req in requests {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }
    }

    #[actix_web::test]
    async fn test_social_login_without_token_is_bad_request() {
        let app = app!();

        let requests = [
            test::TestRequest::post().uri("/api/user/social/google").to_request(),
            test::TestRequest::post().uri("/api/user/social/google/").set_json(json!({})).to_request(),
            test::TestRequest::post().uri("/api/user/social/facebook").set_json(json!({ "token": null })).to_request(),
            test::TestRequest::post().uri("/api/user/social/facebook").set_json(json!({ "token": "" })).to_request(),
        ];

        for req in requests {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Token not provided");
        }
    }

    #[actix_web::test]
    async fn test_refresh_returns_new_access_token() {
        let app = app!();
        let pair = issued_pair();

        let req = test::TestRequest::post()
            .uri("/api/user/token/refresh")
            .set_json(json!({ "refresh": pair.refresh }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let access = body["access"].as_str().unwrap();
        assert_ne!(access, pair.access);
        assert!(TokenService::instance().verify_access_token(access).is_ok());
    }

    #[actix_web::test]
    async fn test_refresh_with_access_token_is_unauthorized() {
        let app = app!();
        let pair = issued_pair();

        let req = test::TestRequest::post()
            .uri("/api/user/token/refresh")
            .set_json(json!({ "refresh": pair.access }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Token is invalid or expired");
    }

    #[actix_web::test]
    async fn test_refresh_without_field_is_bad_request() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/user/token/refresh")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_verify_accepts_both_token_types() {
        let app = app!();
        let pair = issued_pair();

        for token in [pair.access, pair.refresh] {
            let req = test::TestRequest::post()
                .uri("/api/user/token/verify")
                .set_json(json!({ "token": token }))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::OK);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({}));
        }
    }

    #[actix_web::test]
    async fn test_verify_rejects_garbage() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/user/token/verify")
            .set_json(json!({ "token": "abc.def.ghi" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Token is invalid or expired");
    }

    #[actix_web::test]
    async fn test_credential_login_with_blank_password_is_bad_request() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/user/token")
            .set_json(json!({ "email": "jane@example.com", "password": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_registration_validation_errors() {
        let app = app!();

        let short_password = test::TestRequest::post()
            .uri("/api/user/create")
            .set_json(json!({ "email": "jane@example.com", "password": "123" }))
            .to_request();
        let resp = test::call_service(&app, short_password).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("password"));

        let missing_email = test::TestRequest::post()
            .uri("/api/user/create/")
            .set_json(json!({ "password": "secret" }))
            .to_request();
        let resp = test::call_service(&app, missing_email).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_profile_requires_access_token() {
        let app = app!();
        let pair = issued_pair();

        let anonymous = test::TestRequest::get().uri("/api/user/me").to_request();
        assert_eq!(test::call_service(&app, anonymous).await.status(), StatusCode::UNAUTHORIZED);

        let with_refresh = test::TestRequest::get()
            .uri("/api/user/me")
            .insert_header(("Authorization", format!("Bearer {}", pair.refresh)))
            .to_request();
        assert_eq!(test::call_service(&app, with_refresh).await.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_profile_rejects_other_methods() {
        let app = app!();
        let pair = issued_pair();

        let req = test::TestRequest::delete()
            .uri("/api/user/me")
            .insert_header(("Authorization", format!("Bearer {}", pair.access)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}

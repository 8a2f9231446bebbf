use actix_web::HttpResponse;
use serde_json::json;

/// 헬스 체크. 경로는 `HEALTH_CHECK_URL`로 설정합니다.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "message": "Application is running!"
    }))
}

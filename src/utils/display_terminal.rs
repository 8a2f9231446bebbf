//! 터미널 출력 포맷팅 유틸리티
//!
//! 서비스 기동 과정(레지스트리 초기화, 서버 바인딩)을 사람이 읽기 쉬운 형태로 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(50);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작 표시
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료 표시 (처리된 항목 수 포함)
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 단계 내부의 개별 작업 표시
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화 요약
pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}

pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}

/// 서버 바인딩 정보와 주요 엔드포인트를 출력합니다
pub fn print_server_banner(bind_address: &str, environment: &str, health_path: &str) {
    print_boxed_title("🚀 SOCIAL AUTH BACKEND");
    println!("   🌐 Listening on  : http://{}", bind_address);
    println!("   🏷️  Environment   : {}", environment);
    println!("   ❤️  Health check  : {}", health_path);
    println!("   👤 User API      : /api/user/{{create,token,token/refresh,token/verify,me}}");
    println!("   🔑 Social login  : /api/user/social/{{google,facebook}}");
    println!();
}

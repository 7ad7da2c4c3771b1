//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 등록합니다.
//!
//! # 라우트 구성
//!
//! | 스코프 | 내용 |
//! |---|---|
//! | `/` | 루트 liveness 텍스트 |
//! | `/health` | 헬스체크 JSON |
//! | `/api/users` | 회원가입 |
//! | `/api/auth` | 로그인(공개), 현재 사용자 조회(보호) |
//! | `/api/profile` | 프로필 CRUD, 경력/학력 관리 |
//! | `/api/posts` | 게시물 피드, 좋아요, 댓글 |
//!
//! 공개/보호 라우트가 같은 스코프에 섞여 있으므로 보호는 스코프
//! 미들웨어가 아니라 핸들러의 `AuthenticatedUser` 파라미터로
//! 선언됩니다.

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::App;
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
    cfg.service(health_check);

    cfg.service(web::scope("/api/users").service(handlers::users::register));

    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::login)
            .service(handlers::auth::current_user),
    );

    cfg.service(
        web::scope("/api/profile")
            .service(handlers::profile::my_profile)
            .service(handlers::profile::upsert_profile)
            .service(handlers::profile::list_profiles)
            .service(handlers::profile::profile_by_user)
            .service(handlers::profile::delete_account)
            .service(handlers::profile::add_experience)
            .service(handlers::profile::remove_experience)
            .service(handlers::profile::add_education)
            .service(handlers::profile::remove_education),
    );

    cfg.service(
        web::scope("/api/posts")
            .service(handlers::posts::create_post)
            .service(handlers::posts::list_posts)
            .service(handlers::posts::like_post)
            .service(handlers::posts::unlike_post)
            .service(handlers::posts::add_comment)
            .service(handlers::posts::remove_comment)
            .service(handlers::posts::get_post)
            .service(handlers::posts::delete_post),
    );
}

/// 루트 liveness 엔드포인트
#[actix_web::get("/")]
async fn index() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().body("API Running")
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데
/// 사용됩니다.
///
/// ```bash
/// curl http://localhost:5000/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "devlink_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "auth": "JWT Bearer"
        }
    }))
}

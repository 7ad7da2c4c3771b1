//! # 인증 핸들러
//!
//! 로그인과 현재 사용자 조회 엔드포인트를 처리합니다.
//! 같은 `/api/auth` 스코프에 공개 라우트(로그인)와 보호 라우트
//! (사용자 조회)가 공존합니다.

use actix_web::{HttpResponse, get, post, web};
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::LoginRequest;
use crate::errors::AppError;
use crate::services::UserService;

/// 로그인 핸들러
///
/// # 엔드포인트
///
/// `POST /api/auth`
///
/// 존재하지 않는 이메일과 잘못된 비밀번호 모두 동일한
/// "Invalid credentials" 400으로 응답합니다.
#[post("")]
pub async fn login(
    service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service.authenticate(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 현재 사용자 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/auth` (보호)
///
/// 토큰 소유자의 사용자 레코드를 비밀번호 해시 없이 반환합니다.
#[get("")]
pub async fn current_user(
    service: web::Data<UserService>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = service.get_by_id(&auth.user_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

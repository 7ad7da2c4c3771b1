//! # 사용자 등록 핸들러
//!
//! `POST /api/users` 엔드포인트를 처리합니다.

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::domain::dto::RegisterRequest;
use crate::errors::AppError;
use crate::services::UserService;

/// 회원가입 핸들러
///
/// # 엔드포인트
///
/// `POST /api/users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john@example.com",
///   "password": "secret123"
/// }
/// ```
///
/// # 응답
///
/// 성공 시 세션 토큰만 반환합니다 (200 OK):
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIs..." }
/// ```
///
/// 중복 이메일은 400, 필드 검증 실패는 400 + 필드별 메시지 목록입니다.
#[post("")]
pub async fn register(
    service: web::Data<UserService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

//! # 프로필 핸들러
//!
//! `/api/profile` 스코프의 엔드포인트를 처리합니다.
//! 목록/단건 조회는 공개, 나머지는 보호 라우트입니다.

use actix_web::{HttpResponse, delete, get, post, put, web};
use mongodb::bson::oid::ObjectId;
use serde_json::json;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::{EducationRequest, ExperienceRequest, UpsertProfileRequest};
use crate::errors::AppError;
use crate::services::ProfileService;

/// 호출자 본인의 프로필 조회
///
/// `GET /api/profile/me` (보호)
#[get("/me")]
pub async fn my_profile(
    service: web::Data<ProfileService>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = service.get_me(&auth.user_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 프로필 생성/수정 (upsert)
///
/// `POST /api/profile` (보호)
///
/// skills는 쉼표 구분 문자열 또는 배열 모두 허용됩니다.
#[post("")]
pub async fn upsert_profile(
    service: web::Data<ProfileService>,
    auth: AuthenticatedUser,
    payload: web::Json<UpsertProfileRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service.upsert(&auth.user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 전체 프로필 목록 조회
///
/// `GET /api/profile` (공개)
#[get("")]
pub async fn list_profiles(
    service: web::Data<ProfileService>,
) -> Result<HttpResponse, AppError> {
    let response = service.list().await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 특정 사용자의 프로필 조회
///
/// `GET /api/profile/user/{user_id}` (공개)
///
/// 형식이 잘못된 ID도 프로필 없음과 동일하게 응답합니다.
#[get("/user/{user_id}")]
pub async fn profile_by_user(
    service: web::Data<ProfileService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = ObjectId::parse_str(user_id.as_str())
        .map_err(|_| AppError::BadRequest("Profile not found".to_string()))?;

    let response = service.get_by_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 호출자의 프로필과 계정 삭제
///
/// `DELETE /api/profile` (보호)
///
/// 게시물은 남습니다 (연쇄 삭제 없음).
#[delete("")]
pub async fn delete_account(
    service: web::Data<ProfileService>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    service.delete_account(&auth.user_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "msg": "User deleted" })))
}

/// 경력 항목 추가
///
/// `PUT /api/profile/experience` (보호)
#[put("/experience")]
pub async fn add_experience(
    service: web::Data<ProfileService>,
    auth: AuthenticatedUser,
    payload: web::Json<ExperienceRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service
        .add_experience(&auth.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 경력 항목 제거
///
/// `DELETE /api/profile/experience/{exp_id}` (보호)
///
/// 존재하지 않는 항목 ID는 아무것도 제거하지 않습니다.
#[delete("/experience/{exp_id}")]
pub async fn remove_experience(
    service: web::Data<ProfileService>,
    auth: AuthenticatedUser,
    exp_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let exp_id = parse_entry_id(&exp_id)?;

    let response = service.remove_experience(&auth.user_id, &exp_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 학력 항목 추가
///
/// `PUT /api/profile/education` (보호)
#[put("/education")]
pub async fn add_education(
    service: web::Data<ProfileService>,
    auth: AuthenticatedUser,
    payload: web::Json<EducationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service
        .add_education(&auth.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 학력 항목 제거
///
/// `DELETE /api/profile/education/{edu_id}` (보호)
#[delete("/education/{edu_id}")]
pub async fn remove_education(
    service: web::Data<ProfileService>,
    auth: AuthenticatedUser,
    edu_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let edu_id = parse_entry_id(&edu_id)?;

    let response = service.remove_education(&auth.user_id, &edu_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

fn parse_entry_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::BadRequest("Invalid id".to_string()))
}

//! # 게시물 핸들러
//!
//! `/api/posts` 스코프의 엔드포인트를 처리합니다. 피드 전체가
//! 보호 라우트입니다.
//!
//! 형식이 잘못된 게시물 ID는 존재하지 않는 게시물과 동일하게
//! 404로 응답합니다.

use actix_web::{HttpResponse, delete, get, post, put, web};
use mongodb::bson::oid::ObjectId;
use serde_json::json;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::{CommentRequest, CreatePostRequest};
use crate::errors::AppError;
use crate::services::PostService;

/// 게시물 작성
///
/// `POST /api/posts` (보호)
///
/// 작성자 이름/아바타가 게시물에 스냅샷으로 저장됩니다.
#[post("")]
pub async fn create_post(
    service: web::Data<PostService>,
    auth: AuthenticatedUser,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service.create(&auth.user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 게시물 목록 조회 (최신 작성 우선)
///
/// `GET /api/posts` (보호)
#[get("")]
pub async fn list_posts(
    service: web::Data<PostService>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = service.list().await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 게시물 단건 조회
///
/// `GET /api/posts/{id}` (보호)
#[get("/{id}")]
pub async fn get_post(
    service: web::Data<PostService>,
    _auth: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post_id = parse_post_id(&id)?;

    let response = service.get_by_id(&post_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 게시물 삭제 (작성자만)
///
/// `DELETE /api/posts/{id}` (보호)
#[delete("/{id}")]
pub async fn delete_post(
    service: web::Data<PostService>,
    auth: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post_id = parse_post_id(&id)?;

    service.delete(&auth.user_id, &post_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "msg": "Post removed" })))
}

/// 게시물 좋아요
///
/// `PUT /api/posts/like/{id}` (보호)
///
/// 이미 좋아요를 누른 게시물이면 400. 변경 후의 좋아요 목록을
/// 반환합니다.
#[put("/like/{id}")]
pub async fn like_post(
    service: web::Data<PostService>,
    auth: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post_id = parse_post_id(&id)?;

    let likes = service.like(&auth.user_id, &post_id).await?;

    Ok(HttpResponse::Ok().json(likes))
}

/// 게시물 좋아요 취소
///
/// `PUT /api/posts/unlike/{id}` (보호)
#[put("/unlike/{id}")]
pub async fn unlike_post(
    service: web::Data<PostService>,
    auth: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post_id = parse_post_id(&id)?;

    let likes = service.unlike(&auth.user_id, &post_id).await?;

    Ok(HttpResponse::Ok().json(likes))
}

/// 댓글 작성
///
/// `POST /api/posts/comment/{id}` (보호)
///
/// 변경 후의 댓글 목록을 반환합니다.
#[post("/comment/{id}")]
pub async fn add_comment(
    service: web::Data<PostService>,
    auth: AuthenticatedUser,
    id: web::Path<String>,
    payload: web::Json<CommentRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let post_id = parse_post_id(&id)?;

    let comments = service
        .add_comment(&auth.user_id, &post_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// 댓글 삭제 (댓글 작성자만)
///
/// `DELETE /api/posts/comment/{id}/{comment_id}` (보호)
#[delete("/comment/{id}/{comment_id}")]
pub async fn remove_comment(
    service: web::Data<PostService>,
    auth: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (id, comment_id) = path.into_inner();
    let post_id = parse_post_id(&id)?;
    let comment_id = ObjectId::parse_str(&comment_id)
        .map_err(|_| AppError::NotFound("Comment does not exist".to_string()))?;

    let comments = service
        .remove_comment(&auth.user_id, &post_id, &comment_id)
        .await?;

    Ok(HttpResponse::Ok().json(comments))
}

fn parse_post_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::NotFound("Post not found".to_string()))
}

//! # 게시물 서비스
//!
//! 게시물 작성/조회/삭제, 좋아요/좋아요 취소, 댓글 작성/삭제를
//! 담당합니다.
//!
//! ## 소유권 규칙
//!
//! - 게시물 삭제는 작성자만 가능
//! - 댓글 삭제는 댓글 작성자만 가능
//!
//! ## 동시성
//!
//! 좋아요/댓글 변경은 문서를 읽고 메모리에서 수정한 뒤 다시 쓰는
//! 방식이며 동시 요청은 마지막 쓰기가 이깁니다.

use mongodb::bson::oid::ObjectId;

use crate::domain::dto::{
    CommentRequest, CommentResponse, CreatePostRequest, LikeResponse, PostResponse,
};
use crate::domain::entities::{Comment, Post};
use crate::errors::AppError;
use crate::repositories::{PostRepository, UserRepository};

/// 게시물 비즈니스 로직 서비스
#[derive(Clone)]
pub struct PostService {
    posts: PostRepository,
    users: UserRepository,
}

impl PostService {
    pub fn new(posts: PostRepository, users: UserRepository) -> Self {
        Self { posts, users }
    }

    /// 새 게시물 작성
    ///
    /// 작성 시점의 작성자 이름/아바타를 게시물에 스냅샷으로 저장합니다.
    pub async fn create(
        &self,
        user_id: &ObjectId,
        request: CreatePostRequest,
    ) -> Result<PostResponse, AppError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let post = Post::new(*user_id, user.name, Some(user.avatar), request.text);
        let post = self.posts.insert(post).await?;

        Ok(PostResponse::from(post))
    }

    /// 전체 게시물 목록 조회 (최신 작성 우선)
    pub async fn list(&self) -> Result<Vec<PostResponse>, AppError> {
        let posts = self.posts.find_all().await?;

        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// ID로 게시물 조회
    pub async fn get_by_id(&self, post_id: &ObjectId) -> Result<PostResponse, AppError> {
        let post = self.require_post(post_id).await?;

        Ok(PostResponse::from(post))
    }

    /// 게시물 삭제 (작성자만 가능)
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 게시물 없음
    /// * `AppError::AuthorizationError` - 호출자가 작성자가 아님
    pub async fn delete(&self, user_id: &ObjectId, post_id: &ObjectId) -> Result<(), AppError> {
        let post = self.require_post(post_id).await?;

        if !post.is_author(user_id) {
            return Err(AppError::AuthorizationError(
                "User not authorised".to_string(),
            ));
        }

        self.posts.delete(post_id).await?;

        Ok(())
    }

    /// 게시물에 좋아요 추가
    ///
    /// 이미 좋아요를 누른 게시물이면 거부합니다. 변경 후의 좋아요
    /// 목록을 반환합니다.
    pub async fn like(
        &self,
        user_id: &ObjectId,
        post_id: &ObjectId,
    ) -> Result<Vec<LikeResponse>, AppError> {
        let mut post = self.require_post(post_id).await?;

        if post.liked_by(user_id) {
            return Err(AppError::BadRequest("Post already liked".to_string()));
        }

        post.add_like(*user_id);
        self.posts.replace(&post).await?;

        Ok(post.likes.into_iter().map(Into::into).collect())
    }

    /// 게시물 좋아요 취소
    ///
    /// 좋아요를 누른 적이 없으면 거부합니다.
    pub async fn unlike(
        &self,
        user_id: &ObjectId,
        post_id: &ObjectId,
    ) -> Result<Vec<LikeResponse>, AppError> {
        let mut post = self.require_post(post_id).await?;

        if !post.liked_by(user_id) {
            return Err(AppError::BadRequest(
                "Post has not yet been liked".to_string(),
            ));
        }

        post.remove_like(user_id);
        self.posts.replace(&post).await?;

        Ok(post.likes.into_iter().map(Into::into).collect())
    }

    /// 게시물에 댓글 추가
    ///
    /// 댓글에도 작성 시점의 작성자 이름/아바타가 스냅샷으로 저장됩니다.
    /// 변경 후의 댓글 목록을 반환합니다.
    pub async fn add_comment(
        &self,
        user_id: &ObjectId,
        post_id: &ObjectId,
        request: CommentRequest,
    ) -> Result<Vec<CommentResponse>, AppError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let mut post = self.require_post(post_id).await?;

        let comment = Comment::new(*user_id, user.name, Some(user.avatar), request.text);
        post.add_comment(comment);

        self.posts.replace(&post).await?;

        Ok(post.comments.into_iter().map(Into::into).collect())
    }

    /// 게시물에서 댓글 삭제 (댓글 작성자만 가능)
    ///
    /// 댓글 ID가 삭제 기준입니다. 같은 작성자의 다른 댓글은 영향받지
    /// 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 게시물 또는 댓글 없음
    /// * `AppError::AuthorizationError` - 호출자가 댓글 작성자가 아님
    pub async fn remove_comment(
        &self,
        user_id: &ObjectId,
        post_id: &ObjectId,
        comment_id: &ObjectId,
    ) -> Result<Vec<CommentResponse>, AppError> {
        let mut post = self.require_post(post_id).await?;

        let comment = post
            .find_comment(comment_id)
            .ok_or_else(|| AppError::NotFound("Comment does not exist".to_string()))?;

        if comment.user != *user_id {
            return Err(AppError::AuthorizationError(
                "User not authorised".to_string(),
            ));
        }

        post.remove_comment(comment_id);
        self.posts.replace(&post).await?;

        Ok(post.comments.into_iter().map(Into::into).collect())
    }

    async fn require_post(&self, post_id: &ObjectId) -> Result<Post, AppError> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }
}

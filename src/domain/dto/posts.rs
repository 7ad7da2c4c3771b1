//! # 게시물 DTO
//!
//! 게시물/댓글 작성 요청과 피드 응답 구조를 정의합니다.
//! 응답의 작성자 이름/아바타는 작성 시점 스냅샷이며, 이후 사용자
//! 정보 변경과 무관하게 저장된 값을 그대로 반환합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Comment, Like, Post};

/// 게시물 작성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

/// 댓글 작성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

/// 좋아요 응답 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    pub id: String,
    pub user: String,
}

impl From<Like> for LikeResponse {
    fn from(like: Like) -> Self {
        Self {
            id: like.id.to_hex(),
            user: like.user.to_hex(),
        }
    }
}

/// 댓글 응답 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub user: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub text: String,
    pub date: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_hex(),
            user: comment.user.to_hex(),
            name: comment.name,
            avatar: comment.avatar,
            text: comment.text,
            date: comment.date.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// 게시물 응답 DTO
///
/// 좋아요/댓글 목록을 포함한 게시물 전체 표현입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub user: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub text: String,
    pub date: String,
    pub likes: Vec<LikeResponse>,
    pub comments: Vec<CommentResponse>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.map(|id| id.to_hex()).unwrap_or_default(),
            user: post.user.to_hex(),
            name: post.name,
            avatar: post.avatar,
            text: post.text,
            date: post.date.try_to_rfc3339_string().unwrap_or_default(),
            likes: post.likes.into_iter().map(Into::into).collect(),
            comments: post.comments.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_empty_text_rejected() {
        let request = CreatePostRequest {
            text: "".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("text"));
    }

    #[test]
    fn test_post_response_carries_author_snapshot() {
        let author = ObjectId::new();
        let mut post = Post::new(
            author,
            "A".to_string(),
            Some("https://gravatar.com/avatar/abc".to_string()),
            "hello".to_string(),
        );
        post.id = Some(ObjectId::new());
        post.add_like(ObjectId::new());
        post.add_comment(Comment::new(
            ObjectId::new(),
            "B".to_string(),
            None,
            "nice".to_string(),
        ));

        let response = PostResponse::from(post);

        assert_eq!(response.name, "A");
        assert_eq!(response.user, author.to_hex());
        assert_eq!(response.likes.len(), 1);
        assert_eq!(response.comments.len(), 1);
        assert_eq!(response.comments[0].text, "nice");
    }
}

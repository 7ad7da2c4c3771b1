//! Post Entity Implementation
//!
//! 게시물 문서와 좋아요/댓글 임베디드 목록을 정의합니다.
//!
//! 좋아요와 댓글은 목록 맨 앞에 삽입되고 ID 또는 작성자 기준 필터로
//! 제거됩니다. 문서 전체를 읽고-수정하고-다시 쓰는 방식이므로 동시 요청은
//! 마지막 쓰기가 이기는(last-write-wins) 동작을 가집니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 좋아요 임베디드 항목 (사용자 참조 하나)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 좋아요를 누른 사용자
    pub user: ObjectId,
}

/// 댓글 임베디드 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 댓글 작성자
    pub user: ObjectId,
    /// 작성 시점의 작성자 이름 스냅샷
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub text: String,
    pub date: DateTime,
}

impl Comment {
    /// 새 댓글 생성
    pub fn new(user: ObjectId, name: String, avatar: Option<String>, text: String) -> Self {
        Self {
            id: ObjectId::new(),
            user,
            name,
            avatar,
            text,
            date: DateTime::now(),
        }
    }
}

/// 게시물 엔티티
///
/// 작성자 참조와 함께 작성 시점의 작성자 이름/아바타 스냅샷을 보관합니다.
/// 이후 사용자가 이름을 변경해도 게시물 표시는 변하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 작성자 참조
    pub user: ObjectId,
    /// 작성자 이름 스냅샷
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub text: String,
    pub date: DateTime,
    /// 좋아요 목록 (최신 우선)
    #[serde(default)]
    pub likes: Vec<Like>,
    /// 댓글 목록 (최신 우선)
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// 새 게시물 생성
    pub fn new(user: ObjectId, name: String, avatar: Option<String>, text: String) -> Self {
        Self {
            id: None,
            user,
            name,
            avatar,
            text,
            date: DateTime::now(),
            likes: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// 호출자가 게시물 작성자인지 확인
    pub fn is_author(&self, user_id: &ObjectId) -> bool {
        self.user == *user_id
    }

    /// 해당 사용자가 이미 좋아요를 눌렀는지 확인
    pub fn liked_by(&self, user_id: &ObjectId) -> bool {
        self.likes.iter().any(|like| like.user == *user_id)
    }

    /// 좋아요를 목록 맨 앞에 추가합니다.
    ///
    /// 중복 여부는 호출자가 `liked_by`로 사전 확인해야 합니다.
    pub fn add_like(&mut self, user_id: ObjectId) {
        self.likes.insert(
            0,
            Like {
                id: ObjectId::new(),
                user: user_id,
            },
        );
    }

    /// 해당 사용자의 좋아요를 제거합니다.
    ///
    /// 제거된 항목이 있으면 `true`를 반환합니다.
    pub fn remove_like(&mut self, user_id: &ObjectId) -> bool {
        let before = self.likes.len();
        self.likes.retain(|like| like.user != *user_id);
        self.likes.len() < before
    }

    /// 댓글을 목록 맨 앞에 추가합니다.
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    /// 댓글 ID로 댓글을 조회합니다.
    pub fn find_comment(&self, comment_id: &ObjectId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == *comment_id)
    }

    /// 지정된 ID의 댓글을 제거합니다.
    ///
    /// 댓글 ID가 제거 기준입니다. 작성자 기준으로 제거하면 동일 작성자의
    /// 다른 댓글이 지워질 수 있습니다.
    pub fn remove_comment(&mut self, comment_id: &ObjectId) -> bool {
        let before = self.comments.len();
        self.comments.retain(|c| c.id != *comment_id);
        self.comments.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(author: ObjectId) -> Post {
        Post::new(
            author,
            "A".to_string(),
            None,
            "hello world".to_string(),
        )
    }

    #[test]
    fn test_liked_by_guards_duplicate_like() {
        let author = ObjectId::new();
        let liker = ObjectId::new();
        let mut post = sample_post(author);

        assert!(!post.liked_by(&liker));
        post.add_like(liker);
        assert!(post.liked_by(&liker));
    }

    #[test]
    fn test_likes_prepended_most_recent_first() {
        let mut post = sample_post(ObjectId::new());
        let first = ObjectId::new();
        let second = ObjectId::new();

        post.add_like(first);
        post.add_like(second);

        assert_eq!(post.likes[0].user, second);
        assert_eq!(post.likes[1].user, first);
    }

    #[test]
    fn test_remove_like_for_non_liker_is_noop() {
        let mut post = sample_post(ObjectId::new());
        let liker = ObjectId::new();
        post.add_like(liker);

        assert!(!post.remove_like(&ObjectId::new()));
        assert_eq!(post.likes.len(), 1);

        assert!(post.remove_like(&liker));
        assert!(post.likes.is_empty());
    }

    #[test]
    fn test_remove_comment_targets_comment_id_not_author() {
        let author = ObjectId::new();
        let commenter = ObjectId::new();
        let mut post = sample_post(author);

        let older = Comment::new(commenter, "B".to_string(), None, "first".to_string());
        let newer = Comment::new(commenter, "B".to_string(), None, "second".to_string());
        let newer_id = newer.id;
        post.add_comment(older);
        post.add_comment(newer);

        // 같은 작성자의 댓글이 둘이어도 지정된 댓글만 제거됨
        assert!(post.remove_comment(&newer_id));
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].text, "first");
    }

    #[test]
    fn test_is_author() {
        let author = ObjectId::new();
        let post = sample_post(author);

        assert!(post.is_author(&author));
        assert!(!post.is_author(&ObjectId::new()));
    }
}

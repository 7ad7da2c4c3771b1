//! # 게시물 리포지토리
//!
//! `posts` 컬렉션의 데이터 액세스 계층입니다.
//! 피드 조회는 작성 시각 내림차순으로 정렬됩니다.

use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{doc, oid::ObjectId},
};

use crate::db::Database;
use crate::domain::entities::Post;
use crate::errors::AppError;

/// 게시물 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct PostRepository {
    collection: Collection<Post>,
}

impl PostRepository {
    /// 데이터베이스 연결에서 `posts` 컬렉션 핸들을 획득합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection("posts"),
        }
    }

    /// 새 게시물 저장
    ///
    /// MongoDB가 할당한 ObjectId를 채워서 반환합니다.
    pub async fn insert(&self, mut post: Post) -> Result<Post, AppError> {
        let result = self
            .collection
            .insert_one(&post)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        post.id = result.inserted_id.as_object_id();

        Ok(post)
    }

    /// 전체 게시물 목록 조회 (최신 작성 우선)
    pub async fn find_all(&self) -> Result<Vec<Post>, AppError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "date": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 게시물 조회
    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, AppError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 게시물 문서 전체 교체
    ///
    /// 좋아요/댓글 목록을 메모리에서 수정한 뒤 저장할 때 사용합니다.
    /// 동시 수정은 마지막 쓰기가 이깁니다.
    pub async fn replace(&self, post: &Post) -> Result<(), AppError> {
        let id = post.id.ok_or_else(|| {
            AppError::InternalError("게시물 ID가 없습니다".to_string())
        })?;

        self.collection
            .replace_one(doc! { "_id": id }, post)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 게시물 삭제
    ///
    /// 삭제된 문서가 있으면 `true`를 반환합니다.
    pub async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}

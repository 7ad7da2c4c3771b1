//! # 프로필 리포지토리
//!
//! `profiles` 컬렉션의 데이터 액세스 계층입니다.
//!
//! ## 인덱스
//!
//! - `user` (unique): 사용자당 프로필 1개 보장
//!
//! upsert는 `find_one_and_update` + `upsert(true)`로 원자적으로 수행되고,
//! 경력/학력 같은 임베디드 목록 변경은 문서 전체를 읽고 수정한 뒤
//! `replace_one`으로 다시 쓰는 방식입니다. 동시 수정은 마지막 쓰기가
//! 이깁니다.

use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::{Document, doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
};

use crate::db::Database;
use crate::domain::entities::Profile;
use crate::errors::AppError;

/// 프로필 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct ProfileRepository {
    collection: Collection<Profile>,
}

impl ProfileRepository {
    /// 데이터베이스 연결에서 `profiles` 컬렉션 핸들을 획득합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection("profiles"),
        }
    }

    /// 소유 사용자 ID로 프로필 조회
    pub async fn find_by_user(&self, user_id: &ObjectId) -> Result<Option<Profile>, AppError> {
        self.collection
            .find_one(doc! { "user": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 전체 프로필 목록 조회
    pub async fn find_all(&self) -> Result<Vec<Profile>, AppError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 프로필 생성 또는 수정 (원자적 upsert)
    ///
    /// `fields`의 필드들을 `$set`으로 반영하며, 프로필이 없으면 새로
    /// 생성합니다. 반영 후의 문서를 반환합니다. 동일 입력의 반복 호출은
    /// 동일한 저장 상태를 만듭니다.
    pub async fn upsert(&self, user_id: &ObjectId, fields: Document) -> Result<Profile, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let profile = self
            .collection
            .find_one_and_update(doc! { "user": user_id }, doc! { "$set": fields })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        profile.ok_or_else(|| {
            AppError::DatabaseError("upsert returned no document".to_string())
        })
    }

    /// 프로필 문서 전체 교체
    ///
    /// 경력/학력 목록을 메모리에서 수정한 뒤 저장할 때 사용합니다.
    pub async fn replace(&self, profile: &Profile) -> Result<(), AppError> {
        let id = profile.id.ok_or_else(|| {
            AppError::InternalError("프로필 ID가 없습니다".to_string())
        })?;

        self.collection
            .replace_one(doc! { "_id": id }, profile)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 소유 사용자 ID로 프로필 삭제
    ///
    /// 삭제된 문서가 있으면 `true`를 반환합니다. 프로필이 없어도
    /// 에러가 아닙니다.
    pub async fn delete_by_user(&self, user_id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection
            .delete_one(doc! { "user": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// `profiles` 컬렉션 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(user_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

//! # 사용자 리포지토리
//!
//! `users` 컬렉션의 데이터 액세스 계층입니다.
//!
//! ## 인덱스
//!
//! - `email` (unique): 중복 가입 방지 및 로그인 조회 최적화
//!
//! ## 에러 처리
//!
//! 모든 메서드는 `Result<T, AppError>`를 반환하며 드라이버 에러는
//! `AppError::DatabaseError`로 변환됩니다. 중복 이메일 같은 비즈니스
//! 규칙 위반은 서비스 계층에서 판정합니다.

use mongodb::{
    Collection, IndexModel,
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
};

use crate::db::Database;
use crate::domain::entities::User;
use crate::errors::AppError;

/// 사용자 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    /// 데이터베이스 연결에서 `users` 컬렉션 핸들을 획득합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection("users"),
        }
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// 이메일은 유니크 인덱스가 걸려 있어 최대 1건만 반환됩니다.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 저장
    ///
    /// MongoDB가 할당한 ObjectId를 채워서 반환합니다.
    pub async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 사용자 삭제
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

    /// `users` 컬렉션 인덱스 생성
    ///
    /// 애플리케이션 초기화 시 한 번 호출합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/패스워드 로컬 인증 사용자 모델을 제공합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 가입 시 한 번 생성되며 이후 구조가 변경되지 않습니다.
/// API 응답에는 이 엔티티를 직접 노출하지 않고
/// `UserResponse` DTO를 사용하여 비밀번호 해시를 제외합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표시 이름
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 이메일에서 파생된 Gravatar URL
    pub avatar: String,
    /// 생성 시간
    pub created_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    pub fn new(name: String, email: String, password_hash: String, avatar: String) -> Self {
        Self {
            id: None,
            name,
            email,
            password_hash,
            avatar,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_id() {
        let user = User::new(
            "A".to_string(),
            "a@x.com".to_string(),
            "$2b$04$hash".to_string(),
            "https://gravatar.com/avatar/abc".to_string(),
        );

        assert!(user.id.is_none());
        assert!(user.id_string().is_none());
    }

    #[test]
    fn test_id_string_round_trip() {
        let mut user = User::new(
            "A".to_string(),
            "a@x.com".to_string(),
            "hash".to_string(),
            "avatar".to_string(),
        );
        let oid = ObjectId::new();
        user.id = Some(oid);

        assert_eq!(user.id_string(), Some(oid.to_hex()));
    }
}

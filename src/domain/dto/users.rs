//! # 사용자 등록 DTO
//!
//! 회원가입 요청과 사용자 응답 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.
//!
//! ## 검증 규칙
//!
//! - `name`: 필수 (공백만으로는 불가)
//! - `email`: RFC 5322 표준 이메일 형식. 중복 여부는 서비스 계층에서 검증
//! - `password`: 최소 6자
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "name": "A",
//!   "email": "a@x.com",
//!   "password": "secret1"
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;

/// 회원가입 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 표시 이름
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// 로그인 및 Gravatar 파생에 사용되는 이메일
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    /// 계정 비밀번호 (해싱 후 저장되므로 평문으로 유지하지 않음)
    #[validate(length(
        min = 6,
        message = "Please enter a password with 6 or more characters"
    ))]
    pub password: String,
}

/// 사용자 응답 DTO
///
/// 비밀번호 해시를 제외한 사용자 공개 정보입니다.
/// `GET /api/auth` 및 프로필 조인 응답에 사용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            created_at: user
                .created_at
                .try_to_rfc3339_string()
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_registration_passes() {
        let request = RegisterRequest {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let request = RegisterRequest {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("email"));
    }

    #[test]
    fn test_short_password_rejected() {
        let request = RegisterRequest {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "12345".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("password"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let request = RegisterRequest {
            name: "".to_string(),
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("name"));
    }

    #[test]
    fn test_user_response_omits_password_hash() {
        let user = User::new(
            "A".to_string(),
            "a@x.com".to_string(),
            "$2b$04$hash".to_string(),
            "https://gravatar.com/avatar/abc?s=200&r=pg&d=mm".to_string(),
        );
        let response = UserResponse::from(user);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["name"], "A");
    }
}

//! # 로그인 DTO
//!
//! 로그인 요청과 세션 토큰 응답 구조를 정의합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로그인 요청 DTO
///
/// 계정 열거(account enumeration)를 방지하기 위해 존재하지 않는 이메일과
/// 잘못된 비밀번호는 동일한 "Invalid credentials" 에러로 응답됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// 세션 토큰 응답
///
/// 회원가입과 로그인 성공 시 반환되는 유일한 페이로드입니다.
/// 사용자 정보는 이후 `GET /api/auth`로 조회합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_password_rejected() {
        let request = LoginRequest {
            email: "a@x.com".to_string(),
            password: "".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("password"));
    }

    #[test]
    fn test_valid_login_passes() {
        let request = LoginRequest {
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        };

        assert!(request.validate().is_ok());
    }
}

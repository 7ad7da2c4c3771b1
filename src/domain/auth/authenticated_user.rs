//! 인증 사용자 추출자
//!
//! Authorization 헤더의 Bearer 토큰을 검증하여 호출자의 사용자 ID를
//! 핸들러 파라미터로 주입합니다. 공개/보호 라우트가 같은 스코프에
//! 섞여 있으므로 스코프 미들웨어 대신 핸들러 시그니처에서 보호
//! 여부를 선언합니다.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use mongodb::bson::oid::ObjectId;

use crate::domain::auth::claims::{TokenClaims, extract_bearer_token};
use crate::errors::AppError;

/// 검증된 JWT에서 추출된 호출자 정보
///
/// 핸들러가 이 타입을 파라미터로 받으면 해당 라우트는 보호 라우트가
/// 됩니다. 토큰이 없거나 유효하지 않으면 핸들러 진입 전에 401로
/// 응답됩니다.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// 호출자의 사용자 ID
    pub user_id: ObjectId,
}

impl AuthenticatedUser {
    fn from_http_request(req: &HttpRequest) -> Result<Self, AppError> {
        let header = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::AuthenticationError("No token, authorization denied".to_string())
            })?;

        let token = extract_bearer_token(header)?;
        let claims = TokenClaims::decode(token)?;

        let user_id = ObjectId::parse_str(&claims.sub)
            .map_err(|_| AppError::AuthenticationError("Token is not valid".to_string()))?;

        Ok(Self { user_id })
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_http_request(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_missing_header_rejected() {
        let req = TestRequest::default().to_http_request();

        let result = AuthenticatedUser::from_http_request(&req);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_valid_token_extracts_user_id() {
        let user_id = ObjectId::new();
        let token = TokenClaims::new(user_id.to_hex(), 10).encode().unwrap();
        let req = TestRequest::default()
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_http_request();

        let user = AuthenticatedUser::from_http_request(&req).unwrap();
        assert_eq!(user.user_id, user_id);
    }

    #[test]
    fn test_malformed_subject_rejected() {
        let token = TokenClaims::new("not-an-object-id", 10).encode().unwrap();
        let req = TestRequest::default()
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_http_request();

        let result = AuthenticatedUser::from_http_request(&req);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }
}

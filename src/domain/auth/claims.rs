//! JWT 클레임 정의 및 인코딩/디코딩
//!
//! HMAC-SHA256 서명의 JWT를 생성하고 검증합니다.
//! 클레임은 사용자 ID(`sub`)와 발급/만료 시각만을 담습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::errors::AppError;

/// JWT 토큰 클레임
///
/// # Examples
///
/// ```rust,ignore
/// let claims = TokenClaims::new("64f1c0...", JwtConfig::expiration_hours());
/// let token = claims.encode()?;
/// let decoded = TokenClaims::decode(&token)?;
/// assert_eq!(decoded.sub, claims.sub);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID (MongoDB ObjectId 16진수 문자열)
    pub sub: String,
    /// 발급 시각 (Unix timestamp)
    pub iat: i64,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    /// 지정된 만료 시간(시간 단위)으로 새 클레임 생성
    pub fn new(user_id: impl Into<String>, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// 클레임을 서명된 JWT 문자열로 인코딩
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    pub fn encode(&self) -> Result<String, AppError> {
        let secret = JwtConfig::secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), self, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 문자열을 검증하고 클레임을 추출
    ///
    /// 서명 검증과 만료 확인을 수행합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 위조, 잘못된 형식
    pub fn decode(token: &str) -> Result<Self, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Token has expired".to_string())
                }
                _ => AppError::AuthenticationError("Token is not valid".to_string()),
            })
    }
}

/// Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만 추출
///
/// # Errors
///
/// * `AppError::AuthenticationError` - Bearer 접두사가 없는 헤더
pub fn extract_bearer_token(auth_header: &str) -> Result<&str, AppError> {
    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::AuthenticationError("No token, authorization denied".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip_preserves_subject() {
        let claims = TokenClaims::new("64f1c0ffee64f1c0ffee64f1", 10);
        let token = claims.encode().unwrap();

        let decoded = TokenClaims::decode(&token).unwrap();
        assert_eq!(decoded.sub, "64f1c0ffee64f1c0ffee64f1");
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn test_expired_token_rejected() {
        // 만료 시각이 과거인 토큰
        let claims = TokenClaims {
            sub: "64f1c0ffee64f1c0ffee64f1".to_string(),
            iat: Utc::now().timestamp() - 7200,
            exp: Utc::now().timestamp() - 3600,
        };
        let token = claims.encode().unwrap();

        let result = TokenClaims::decode(&token);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let claims = TokenClaims::new("64f1c0ffee64f1c0ffee64f1", 10);
        let mut token = claims.encode().unwrap();
        token.push('x');

        assert!(TokenClaims::decode(&token).is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extract_bearer_token("Basic abc").is_err());
        assert!(extract_bearer_token("abc.def.ghi").is_err());
    }
}

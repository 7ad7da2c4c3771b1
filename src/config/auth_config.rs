//! 인증 관련 설정 관리 모듈
//!
//! JWT 토큰 서명 및 만료 설정을 관리합니다.

use std::env;

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 시크릿 키를 반환합니다.
    ///
    /// `JWT_SECRET` 환경 변수를 읽으며, 설정되지 않은 경우 경고를
    /// 남기고 기본값으로 폴백합니다. 기본값은 개발 환경에서만
    /// 안전합니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "dev-only-insecure-secret".to_string()
        })
    }

    /// 액세스 토큰 만료 시간(시간 단위)을 반환합니다. 기본값: 10시간
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_hours_default() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 10);
        }
    }

    #[test]
    fn test_secret_falls_back_when_unset() {
        // JWT_SECRET 없이도 패닉 없이 기본값을 반환해야 함
        if env::var("JWT_SECRET").is_err() {
            assert_eq!(JwtConfig::secret(), "dev-only-insecure-secret");
        } else {
            assert!(!JwtConfig::secret().is_empty());
        }
    }
}

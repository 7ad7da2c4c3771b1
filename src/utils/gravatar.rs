//! Gravatar 아바타 URL 파생
//!
//! 회원가입 시 이메일에서 결정적으로 아바타 URL을 만듭니다.
//! 같은 이메일은 항상 같은 URL을 얻습니다.

use sha2::{Digest, Sha256};

/// 이메일 주소에서 Gravatar URL을 파생합니다.
///
/// 이메일은 트리밍 후 소문자로 정규화하여 SHA-256으로 해싱합니다.
/// 쿼리 파라미터: 크기 200px, 등급 pg, 기본 이미지 mm.
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();

    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    let hash: String = hasher
        .finalize()
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect();

    format!("https://www.gravatar.com/avatar/{}?s=200&r=pg&d=mm", hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_email_same_url() {
        assert_eq!(gravatar_url("a@x.com"), gravatar_url("a@x.com"));
    }

    #[test]
    fn test_email_normalized_before_hashing() {
        assert_eq!(gravatar_url("  A@X.Com  "), gravatar_url("a@x.com"));
    }

    #[test]
    fn test_url_shape() {
        let url = gravatar_url("a@x.com");

        assert!(url.starts_with("https://www.gravatar.com/avatar/"));
        assert!(url.ends_with("?s=200&r=pg&d=mm"));
    }

    #[test]
    fn test_distinct_emails_distinct_urls() {
        assert_ne!(gravatar_url("a@x.com"), gravatar_url("b@x.com"));
    }
}

//! 인증 도메인 모듈
//!
//! JWT 클레임 정의와 보호 라우트에서 사용하는 인증 사용자 추출자를
//! 제공합니다.

pub mod authenticated_user;
pub mod claims;

pub use authenticated_user::AuthenticatedUser;
pub use claims::{TokenClaims, extract_bearer_token};

//! HTTP 핸들러 계층
//!
//! 요청 DTO 검증 → 서비스 호출 → JSON 응답의 순서를 따릅니다.
//! 검증은 항상 서비스/저장소 호출보다 먼저 실행되어 잘못된 입력이
//! 영속 계층에 닿지 않습니다. 보호 라우트는 `AuthenticatedUser`
//! 파라미터로 선언됩니다.

pub mod auth;
pub mod posts;
pub mod profile;
pub mod users;

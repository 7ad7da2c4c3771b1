//! 서비스 계층
//!
//! 비즈니스 규칙을 담당합니다. 핸들러에서 검증이 끝난 DTO를 받아
//! 리포지토리를 조합하고, 규칙 위반을 적절한 `AppError`로 변환합니다.

pub mod posts;
pub mod profiles;
pub mod users;

pub use posts::PostService;
pub use profiles::ProfileService;
pub use users::UserService;

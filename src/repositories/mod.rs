//! 리포지토리 계층
//!
//! MongoDB 컬렉션에 대한 데이터 액세스를 담당합니다.
//! 각 리포지토리는 `Database`에서 컬렉션 핸들을 받아 생성되며,
//! 드라이버 에러를 `AppError::DatabaseError`로 변환합니다.

pub mod posts;
pub mod profiles;
pub mod users;

pub use posts::PostRepository;
pub use profiles::ProfileRepository;
pub use users::UserRepository;

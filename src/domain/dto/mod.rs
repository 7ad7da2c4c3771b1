//! 요청/응답 DTO 모듈
//!
//! HTTP 경계에서 사용되는 데이터 전송 객체들을 정의합니다.
//! 요청 DTO는 `validator` 파생 매크로로 선언적 검증 규칙을 가지며,
//! 응답 DTO는 엔티티에서 민감한 필드(비밀번호 해시)를 제외하고
//! BSON 타입을 JSON 친화적인 형태로 변환합니다.

pub mod auth;
pub mod posts;
pub mod profile;
pub mod users;

pub use auth::{LoginRequest, TokenResponse};
pub use posts::{CommentRequest, CommentResponse, CreatePostRequest, LikeResponse, PostResponse};
pub use profile::{
    EducationRequest, ExperienceRequest, ProfileResponse, ProfileUser, SkillsField,
    UpsertProfileRequest,
};
pub use users::{RegisterRequest, UserResponse};

//! 도메인 엔티티 모듈
//!
//! MongoDB 컬렉션에 저장되는 핵심 도메인 문서들을 정의합니다.
//!
//! - [`user`] - 사용자 계정 (users 컬렉션)
//! - [`profile`] - 사용자 프로필과 경력/학력 임베디드 목록 (profiles 컬렉션)
//! - [`post`] - 게시물과 좋아요/댓글 임베디드 목록 (posts 컬렉션)

pub mod post;
pub mod profile;
pub mod user;

pub use post::{Comment, Like, Post};
pub use profile::{Education, Experience, Profile};
pub use user::User;

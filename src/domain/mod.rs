//! 도메인 계층
//!
//! 영속 엔티티, HTTP 경계의 DTO, 인증 도메인 모델을 묶습니다.

pub mod auth;
pub mod dto;
pub mod entities;

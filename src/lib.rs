//! 데브링크 백엔드
//!
//! 개발자 커뮤니티 서비스의 REST API 백엔드입니다.
//! JWT 토큰 기반 인증, 프로필(경력/학력) 관리, 게시물 피드
//! (좋아요/댓글)를 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입, 로그인, 계정 삭제, Gravatar 아바타
//! - **JWT 인증**: HMAC-SHA256 액세스 토큰 기반 상태 없는 인증
//! - **프로필**: 사용자당 하나의 프로필, 경력/학력 임베디드 목록
//! - **게시물 피드**: 작성/삭제, 좋아요/취소, 댓글
//! - **MongoDB**: 모든 데이터의 영구 저장
//! - **클라이언트 모듈**: REST API의 타입 안전한 소비자와 상태 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 검증, 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use devlink_backend::db::Database;
//! use devlink_backend::repositories::UserRepository;
//! use devlink_backend::services::UserService;
//!
//! let database = Database::new().await?;
//! let user_service = UserService::new(UserRepository::new(&database));
//!
//! let token = user_service.register(request).await?;
//! ```

pub mod client;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;

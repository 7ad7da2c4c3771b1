//! 클라이언트 모듈
//!
//! REST API의 타입 안전한 소비자입니다. 싱글페이지 클라이언트의
//! 동작(세션 토큰 관리, 알림, 프로필/피드 상태)을 라이브러리
//! 형태로 모델링합니다.

pub mod api;
pub mod store;

pub use api::{ApiClient, ClientError};
pub use store::{Alert, AlertKind, AppStore, SessionState};

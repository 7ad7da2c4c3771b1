//! 유틸리티 모듈

pub mod gravatar;

pub use gravatar::gravatar_url;

//! # API 클라이언트
//!
//! 모든 REST 엔드포인트에 대한 타입 지정 메서드를 제공합니다.
//!
//! ## 토큰 관리
//!
//! 클라이언트는 불변이며 로그인/로그아웃 시 `with_token`/`without_token`
//! 으로 재구성됩니다. 프로세스 전역 가변 상태는 없습니다. 토큰이
//! 있으면 모든 요청에 `Authorization: Bearer` 헤더가 붙습니다.

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::dto::{
    CommentRequest, CommentResponse, CreatePostRequest, EducationRequest, ExperienceRequest,
    LikeResponse, LoginRequest, PostResponse, ProfileResponse, RegisterRequest, TokenResponse,
    UpsertProfileRequest, UserResponse,
};

/// API 호출 에러
#[derive(Error, Debug)]
pub enum ClientError {
    /// 전송 계층 실패 (연결, 타임아웃, 역직렬화)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// 서버가 에러 상태 코드로 응답한 경우
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

/// REST API 클라이언트
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// 지정된 베이스 URL로 익명 클라이언트를 생성합니다.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// 세션 토큰을 가진 클라이언트로 재구성합니다 (로그인 후).
    pub fn with_token(self, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..self
        }
    }

    /// 토큰 없는 클라이언트로 재구성합니다 (로그아웃 후).
    pub fn without_token(self) -> Self {
        Self {
            token: None,
            ..self
        }
    }

    /// 현재 세션 토큰
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    // --- 인증 ---

    /// `POST /api/users` 회원가입
    pub async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ClientError> {
        self.send_json(Method::POST, "/api/users", request).await
    }

    /// `POST /api/auth` 로그인
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ClientError> {
        self.send_json(Method::POST, "/api/auth", request).await
    }

    /// `GET /api/auth` 현재 사용자 조회 (토큰 재검증에도 사용)
    pub async fn current_user(&self) -> Result<UserResponse, ClientError> {
        self.send(Method::GET, "/api/auth").await
    }

    // --- 프로필 ---

    /// `GET /api/profile/me` 내 프로필 조회
    pub async fn my_profile(&self) -> Result<ProfileResponse, ClientError> {
        self.send(Method::GET, "/api/profile/me").await
    }

    /// `POST /api/profile` 프로필 생성/수정
    pub async fn upsert_profile(
        &self,
        request: &UpsertProfileRequest,
    ) -> Result<ProfileResponse, ClientError> {
        self.send_json(Method::POST, "/api/profile", request).await
    }

    /// `GET /api/profile` 전체 프로필 목록
    pub async fn list_profiles(&self) -> Result<Vec<ProfileResponse>, ClientError> {
        self.send(Method::GET, "/api/profile").await
    }

    /// `GET /api/profile/user/{user_id}` 특정 사용자 프로필
    pub async fn profile_by_user(&self, user_id: &str) -> Result<ProfileResponse, ClientError> {
        self.send(Method::GET, &format!("/api/profile/user/{}", user_id))
            .await
    }

    /// `DELETE /api/profile` 프로필과 계정 삭제
    pub async fn delete_account(&self) -> Result<(), ClientError> {
        let _: serde_json::Value = self.send(Method::DELETE, "/api/profile").await?;
        Ok(())
    }

    /// `PUT /api/profile/experience` 경력 추가
    pub async fn add_experience(
        &self,
        request: &ExperienceRequest,
    ) -> Result<ProfileResponse, ClientError> {
        self.send_json(Method::PUT, "/api/profile/experience", request)
            .await
    }

    /// `DELETE /api/profile/experience/{exp_id}` 경력 제거
    pub async fn remove_experience(&self, exp_id: &str) -> Result<ProfileResponse, ClientError> {
        self.send(Method::DELETE, &format!("/api/profile/experience/{}", exp_id))
            .await
    }

    /// `PUT /api/profile/education` 학력 추가
    pub async fn add_education(
        &self,
        request: &EducationRequest,
    ) -> Result<ProfileResponse, ClientError> {
        self.send_json(Method::PUT, "/api/profile/education", request)
            .await
    }

    /// `DELETE /api/profile/education/{edu_id}` 학력 제거
    pub async fn remove_education(&self, edu_id: &str) -> Result<ProfileResponse, ClientError> {
        self.send(Method::DELETE, &format!("/api/profile/education/{}", edu_id))
            .await
    }

    // --- 게시물 ---

    /// `POST /api/posts` 게시물 작성
    pub async fn create_post(
        &self,
        request: &CreatePostRequest,
    ) -> Result<PostResponse, ClientError> {
        self.send_json(Method::POST, "/api/posts", request).await
    }

    /// `GET /api/posts` 피드 조회 (최신 우선)
    pub async fn list_posts(&self) -> Result<Vec<PostResponse>, ClientError> {
        self.send(Method::GET, "/api/posts").await
    }

    /// `GET /api/posts/{id}` 게시물 단건 조회
    pub async fn get_post(&self, post_id: &str) -> Result<PostResponse, ClientError> {
        self.send(Method::GET, &format!("/api/posts/{}", post_id))
            .await
    }

    /// `DELETE /api/posts/{id}` 게시물 삭제
    pub async fn delete_post(&self, post_id: &str) -> Result<(), ClientError> {
        let _: serde_json::Value = self
            .send(Method::DELETE, &format!("/api/posts/{}", post_id))
            .await?;
        Ok(())
    }

    /// `PUT /api/posts/like/{id}` 좋아요
    pub async fn like_post(&self, post_id: &str) -> Result<Vec<LikeResponse>, ClientError> {
        self.send(Method::PUT, &format!("/api/posts/like/{}", post_id))
            .await
    }

    /// `PUT /api/posts/unlike/{id}` 좋아요 취소
    pub async fn unlike_post(&self, post_id: &str) -> Result<Vec<LikeResponse>, ClientError> {
        self.send(Method::PUT, &format!("/api/posts/unlike/{}", post_id))
            .await
    }

    /// `POST /api/posts/comment/{id}` 댓글 작성
    pub async fn add_comment(
        &self,
        post_id: &str,
        request: &CommentRequest,
    ) -> Result<Vec<CommentResponse>, ClientError> {
        self.send_json(Method::POST, &format!("/api/posts/comment/{}", post_id), request)
            .await
    }

    /// `DELETE /api/posts/comment/{id}/{comment_id}` 댓글 삭제
    pub async fn remove_comment(
        &self,
        post_id: &str,
        comment_id: &str,
    ) -> Result<Vec<CommentResponse>, ClientError> {
        self.send(
            Method::DELETE,
            &format!("/api/posts/comment/{}/{}", post_id, comment_id),
        )
        .await
    }

    // --- 내부 ---

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{}", self.base_url, path));

        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        builder
    }

    async fn send<R: DeserializeOwned>(&self, method: Method, path: &str) -> Result<R, ClientError> {
        let response = self.request(method, path).send().await?;
        Self::parse_response(response).await
    }

    async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<R, ClientError> {
        let response = self.request(method, path).json(body).send().await?;
        Self::parse_response(response).await
    }

    /// 에러 상태 코드의 본문에서 서버 메시지를 추출합니다.
    ///
    /// `{"error": msg}`와 검증 실패의 `{"errors": [{param, msg}]}` 형식을
    /// 모두 지원합니다.
    async fn parse_response<R: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<R, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => Self::error_message(&body),
            Err(_) => status.to_string(),
        };

        Err(ClientError::Api { status, message })
    }

    fn error_message(body: &serde_json::Value) -> String {
        if let Some(error) = body.get("error").and_then(|v| v.as_str()) {
            return error.to_string();
        }

        if let Some(errors) = body.get("errors").and_then(|v| v.as_array()) {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|e| e.get("msg").and_then(|m| m.as_str()))
                .collect();
            if !messages.is_empty() {
                return messages.join(", ");
            }
        }

        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_with_token_rebuilds_client() {
        let client = ApiClient::new("http://localhost:5000/");
        assert!(client.token().is_none());

        let client = client.with_token("abc");
        assert_eq!(client.token(), Some("abc"));

        let client = client.without_token();
        assert!(client.token().is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_error_message_single_error() {
        let body = json!({ "error": "Invalid credentials" });
        assert_eq!(ApiClient::error_message(&body), "Invalid credentials");
    }

    #[test]
    fn test_error_message_validation_list() {
        let body = json!({
            "errors": [
                { "param": "email", "msg": "Please include a valid email" },
                { "param": "password", "msg": "Password is required" }
            ]
        });

        assert_eq!(
            ApiClient::error_message(&body),
            "Please include a valid email, Password is required"
        );
    }
}

//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror` 기반의 에러 열거형을 Actix-Web의 `ResponseError`와 결합하여
//! 모든 핸들러에서 일관된 HTTP 에러 응답을 보장합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationFailed` | 400 Bad Request | 필드별 검증 실패 (구조화된 메시지 목록) |
//! | `BadRequest` | 400 Bad Request | 중복 이메일, 이미 좋아요한 게시물 등 비즈니스 조건 |
//! | `NotFound` | 404 Not Found | 게시물/댓글 없음 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 없음/만료/위조 |
//! | `AuthorizationError` | 401 Unauthorized | 리소스 소유자가 아님 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 검증 실패 응답은 필드별 메시지 배열을 포함합니다:
//!
//! ```json
//! { "errors": [ { "param": "email", "msg": "유효한 이메일 주소를 입력해주세요" } ] }
//! ```
//!
//! 그 외 모든 에러는 단일 메시지 형식을 따릅니다:
//!
//! ```json
//! { "error": "Invalid credentials" }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 요청 DTO 검증 실패 (400, 필드별 메시지 목록)
    #[error("Validation failed")]
    ValidationFailed(#[from] validator::ValidationErrors),

    /// 예상된 비즈니스 조건 위반 (400)
    ///
    /// 중복 이메일 가입, 이미 좋아요한 게시물, 프로필 없음 등
    /// 클라이언트가 스스로 해결할 수 있는 조건들입니다.
    #[error("{0}")]
    BadRequest(String),

    /// 리소스 찾을 수 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 인증 실패 (401) - 토큰 없음, 만료, 위조, 잘못된 로그인 정보
    #[error("{0}")]
    AuthenticationError(String),

    /// 권한 부족 (401) - 리소스 소유자가 아닌 호출자의 변경 시도
    #[error("{0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// 각 `AppError` 변형을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    ///
    /// 5xx 에러는 서버 로그에 기록하되 클라이언트에는 내부 정보를
    /// 노출하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        if let AppError::ValidationFailed(errors) = self {
            return actix_web::HttpResponse::BadRequest().json(serde_json::json!({
                "errors": collect_field_messages(errors),
            }));
        }

        let status = match self {
            AppError::ValidationFailed(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) | AppError::AuthorizationError(_) => {
                StatusCode::UNAUTHORIZED
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("서버 에러 응답: {}", self);
        }

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// 검증 에러를 필드별 메시지 목록으로 평탄화합니다.
///
/// 중첩 구조체의 에러는 재귀적으로 수집하며, 메시지가 지정되지 않은
/// 규칙은 규칙 코드를 그대로 사용합니다.
fn collect_field_messages(errors: &validator::ValidationErrors) -> Vec<serde_json::Value> {
    let mut messages = Vec::new();

    for (field, kind) in errors.errors() {
        match kind {
            validator::ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let msg = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    messages.push(serde_json::json!({ "param": field, "msg": msg }));
                }
            }
            validator::ValidationErrorsKind::Struct(nested) => {
                messages.extend(collect_field_messages(nested));
            }
            validator::ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    messages.extend(collect_field_messages(nested));
                }
            }
        }
    }

    messages
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::errors::{AppError, ErrorContext};
///
/// let result = collection.find_one(filter).await
///     .context("Failed to find user")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use validator::Validate;

    #[derive(Validate)]
    struct SampleRequest {
        #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
        email: String,
        #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
        password: String,
    }

    #[test]
    fn test_bad_request_response() {
        let error = AppError::BadRequest("User already exists".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_response() {
        let error = AppError::NotFound("Post not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_authorization_error_maps_to_401() {
        let error = AppError::AuthorizationError("User not authorised".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_failure_collects_field_messages() {
        let request = SampleRequest {
            email: "not-an-email".to_string(),
            password: "abc".to_string(),
        };
        let errors = request.validate().unwrap_err();
        let messages = collect_field_messages(&errors);

        assert_eq!(messages.len(), 2);
        let params: Vec<_> = messages
            .iter()
            .map(|m| m["param"].as_str().unwrap().to_string())
            .collect();
        assert!(params.contains(&"email".to_string()));
        assert!(params.contains(&"password".to_string()));

        let error = AppError::ValidationFailed(errors);
        let response = error.error_response();
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}

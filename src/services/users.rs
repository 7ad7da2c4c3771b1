//! # 사용자 서비스
//!
//! 회원가입, 로그인, 사용자 조회 비즈니스 로직을 담당합니다.
//!
//! ## 보안 규칙
//!
//! - 비밀번호는 bcrypt 해시로만 저장됩니다 (환경별 cost, `PasswordConfig`)
//! - 존재하지 않는 이메일과 잘못된 비밀번호는 동일한 "Invalid credentials"
//!   에러로 응답하여 계정 열거를 차단합니다
//! - 회원가입/로그인 성공 시 페이로드는 `{token}` 하나뿐입니다

use mongodb::bson::oid::ObjectId;

use crate::config::{JwtConfig, PasswordConfig};
use crate::domain::auth::TokenClaims;
use crate::domain::dto::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
use crate::domain::entities::User;
use crate::errors::AppError;
use crate::repositories::UserRepository;
use crate::utils::gravatar_url;

/// 사용자 비즈니스 로직 서비스
#[derive(Clone)]
pub struct UserService {
    users: UserRepository,
}

impl UserService {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// 새 사용자 등록
    ///
    /// 1. 이메일 중복 확인
    /// 2. 이메일에서 Gravatar 아바타 URL 파생
    /// 3. bcrypt 해싱 후 저장
    /// 4. 세션 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 이미 등록된 이메일
    pub async fn register(&self, request: RegisterRequest) -> Result<TokenResponse, AppError> {
        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::BadRequest("User already exists".to_string()));
        }

        let avatar = gravatar_url(&request.email);

        let password_hash = bcrypt::hash(&request.password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        let user = User::new(request.name, request.email, password_hash, avatar);
        let user = self.users.insert(user).await?;

        self.issue_token(&user)
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 실패 원인(미존재 이메일 / 비밀번호 불일치)과 무관하게 동일한
    /// 에러를 반환합니다.
    pub async fn authenticate(&self, request: LoginRequest) -> Result<TokenResponse, AppError> {
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid credentials".to_string()))?;

        let password_matches = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !password_matches {
            return Err(AppError::BadRequest("Invalid credentials".to_string()));
        }

        self.issue_token(&user)
    }

    /// ID로 사용자 공개 정보 조회 (비밀번호 해시 제외)
    pub async fn get_by_id(&self, user_id: &ObjectId) -> Result<UserResponse, AppError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserResponse::from(user))
    }

    fn issue_token(&self, user: &User) -> Result<TokenResponse, AppError> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let token = TokenClaims::new(user_id, JwtConfig::expiration_hours()).encode()?;

        Ok(TokenResponse { token })
    }
}

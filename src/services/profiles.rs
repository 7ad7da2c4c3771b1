//! # 프로필 서비스
//!
//! 프로필 upsert, 조회(사용자 정보 조인), 경력/학력 목록 관리,
//! 계정 삭제를 담당합니다.
//!
//! 응답의 사용자 이름/아바타는 저장된 참조가 아니라 조회 시점에
//! `users` 컬렉션에서 조인한 현재 값입니다.

use mongodb::bson::{Document, doc, oid::ObjectId, to_bson};

use crate::domain::dto::{
    EducationRequest, ExperienceRequest, ProfileResponse, UpsertProfileRequest,
};
use crate::domain::entities::{Profile, User};
use crate::errors::AppError;
use crate::repositories::{ProfileRepository, UserRepository};

/// 프로필 비즈니스 로직 서비스
#[derive(Clone)]
pub struct ProfileService {
    profiles: ProfileRepository,
    users: UserRepository,
}

impl ProfileService {
    pub fn new(profiles: ProfileRepository, users: UserRepository) -> Self {
        Self { profiles, users }
    }

    /// 호출자 본인의 프로필 조회
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 프로필이 아직 생성되지 않은 경우
    pub async fn get_me(&self, user_id: &ObjectId) -> Result<ProfileResponse, AppError> {
        let profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest("There is no profile for this user".to_string())
            })?;

        self.join_owner(profile).await
    }

    /// 프로필 생성 또는 수정 (소유자 기준 upsert)
    ///
    /// 제출된 필드만 반영되며, 동일 입력의 반복 호출은 동일한 저장
    /// 문서를 만듭니다.
    pub async fn upsert(
        &self,
        user_id: &ObjectId,
        request: UpsertProfileRequest,
    ) -> Result<ProfileResponse, AppError> {
        let fields = Self::build_profile_fields(user_id, request)?;
        let profile = self.profiles.upsert(user_id, fields).await?;

        self.join_owner(profile).await
    }

    /// 전체 프로필 목록 조회 (사용자 정보 조인)
    ///
    /// 소유 사용자가 더 이상 존재하지 않는 고아 프로필은 결과에서
    /// 제외됩니다.
    pub async fn list(&self) -> Result<Vec<ProfileResponse>, AppError> {
        let profiles = self.profiles.find_all().await?;

        let mut responses = Vec::with_capacity(profiles.len());
        for profile in profiles {
            if let Some(user) = self.users.find_by_id(&profile.user).await? {
                responses.push(ProfileResponse::from_parts(profile, &user));
            }
        }

        Ok(responses)
    }

    /// 특정 사용자의 프로필 조회
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 해당 사용자의 프로필이 없는 경우
    pub async fn get_by_user(&self, user_id: &ObjectId) -> Result<ProfileResponse, AppError> {
        let profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Profile not found".to_string()))?;

        self.join_owner(profile).await
    }

    /// 호출자의 프로필과 사용자 계정을 삭제합니다.
    ///
    /// 게시물은 삭제되지 않고 남습니다 (연쇄 삭제 없음). 프로필이
    /// 없어도 계정 삭제는 진행됩니다.
    pub async fn delete_account(&self, user_id: &ObjectId) -> Result<(), AppError> {
        self.profiles.delete_by_user(user_id).await?;
        self.users.delete(user_id).await?;

        Ok(())
    }

    /// 경력 항목을 호출자 프로필 맨 앞에 추가합니다.
    pub async fn add_experience(
        &self,
        user_id: &ObjectId,
        request: ExperienceRequest,
    ) -> Result<ProfileResponse, AppError> {
        let mut profile = self.require_profile(user_id).await?;

        let experience = request
            .into_entity()
            .map_err(|_| AppError::BadRequest("From date is required".to_string()))?;
        profile.add_experience(experience);

        self.profiles.replace(&profile).await?;
        self.join_owner(profile).await
    }

    /// 지정된 ID의 경력 항목을 제거합니다.
    ///
    /// 존재하지 않는 ID는 아무것도 제거하지 않으며 에러가 아닙니다.
    /// 실제로 제거된 경우에만 문서를 다시 씁니다.
    pub async fn remove_experience(
        &self,
        user_id: &ObjectId,
        exp_id: &ObjectId,
    ) -> Result<ProfileResponse, AppError> {
        let mut profile = self.require_profile(user_id).await?;

        if profile.remove_experience(exp_id) {
            self.profiles.replace(&profile).await?;
        }

        self.join_owner(profile).await
    }

    /// 학력 항목을 호출자 프로필 맨 앞에 추가합니다.
    pub async fn add_education(
        &self,
        user_id: &ObjectId,
        request: EducationRequest,
    ) -> Result<ProfileResponse, AppError> {
        let mut profile = self.require_profile(user_id).await?;

        let education = request
            .into_entity()
            .map_err(|_| AppError::BadRequest("From date is required".to_string()))?;
        profile.add_education(education);

        self.profiles.replace(&profile).await?;
        self.join_owner(profile).await
    }

    /// 지정된 ID의 학력 항목을 제거합니다.
    ///
    /// 실제로 제거된 경우에만 문서를 다시 씁니다.
    pub async fn remove_education(
        &self,
        user_id: &ObjectId,
        edu_id: &ObjectId,
    ) -> Result<ProfileResponse, AppError> {
        let mut profile = self.require_profile(user_id).await?;

        if profile.remove_education(edu_id) {
            self.profiles.replace(&profile).await?;
        }

        self.join_owner(profile).await
    }

    async fn require_profile(&self, user_id: &ObjectId) -> Result<Profile, AppError> {
        self.profiles.find_by_user(user_id).await?.ok_or_else(|| {
            AppError::BadRequest("There is no profile for this user".to_string())
        })
    }

    async fn require_owner(&self, profile: &Profile) -> Result<User, AppError> {
        self.users
            .find_by_id(&profile.user)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn join_owner(&self, profile: Profile) -> Result<ProfileResponse, AppError> {
        let user = self.require_owner(&profile).await?;
        Ok(ProfileResponse::from_parts(profile, &user))
    }

    /// upsert용 `$set` 필드 문서 구성
    ///
    /// 제출된 필드만 포함합니다. 생략된 선택 필드는 기존 저장 값이
    /// 유지됩니다.
    fn build_profile_fields(
        user_id: &ObjectId,
        request: UpsertProfileRequest,
    ) -> Result<Document, AppError> {
        let skills = to_bson(&request.skills.into_vec())
            .map_err(|e| AppError::InternalError(format!("skills 직렬화 실패: {}", e)))?;

        let mut fields = doc! {
            "user": user_id,
            "status": request.status,
            "skills": skills,
        };

        if let Some(website) = request.website {
            fields.insert("website", website);
        }
        if let Some(location) = request.location {
            fields.insert("location", location);
        }
        if let Some(bio) = request.bio {
            fields.insert("bio", bio);
        }
        if let Some(github_username) = request.github_username {
            fields.insert("github_username", github_username);
        }

        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::SkillsField;

    #[test]
    fn test_build_profile_fields_normalizes_skills_string() {
        let user_id = ObjectId::new();
        let request = UpsertProfileRequest {
            status: "Developer".to_string(),
            skills: SkillsField::Text("js, node , rust".to_string()),
            website: None,
            location: None,
            bio: Some("hello".to_string()),
            github_username: None,
        };

        let fields = ProfileService::build_profile_fields(&user_id, request).unwrap();

        let skills: Vec<String> = fields
            .get_array("skills")
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        assert_eq!(skills, vec!["js", "node", "rust"]);

        // 제출된 필드만 포함
        assert!(fields.contains_key("bio"));
        assert!(!fields.contains_key("website"));
        assert_eq!(fields.get_object_id("user").unwrap(), user_id);
    }

    #[test]
    fn test_build_profile_fields_is_deterministic() {
        let user_id = ObjectId::new();
        let make_request = || UpsertProfileRequest {
            status: "Developer".to_string(),
            skills: SkillsField::List(vec!["rust".to_string()]),
            website: Some("https://example.com".to_string()),
            location: None,
            bio: None,
            github_username: None,
        };

        let first = ProfileService::build_profile_fields(&user_id, make_request()).unwrap();
        let second = ProfileService::build_profile_fields(&user_id, make_request()).unwrap();

        // 동일 입력은 동일한 $set 문서를 만들어 upsert가 멱등이 됨
        assert_eq!(first, second);
    }
}

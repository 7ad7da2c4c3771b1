//! # 프로필 DTO
//!
//! 프로필 upsert, 경력/학력 추가 요청과 사용자 정보가 조인된
//! 프로필 응답 구조를 정의합니다.
//!
//! ## skills 필드의 이중 형식
//!
//! 클라이언트는 skills를 문자열(`"js, node"`) 또는 배열(`["js","node"]`)로
//! 제출할 수 있습니다. 문자열은 쉼표로 분리하고 각 항목을 트리밍하며,
//! 배열은 그대로 보존합니다.
//!
//! ## 날짜 범위 검증
//!
//! 경력/학력의 `from`은 필수이며, `to`가 함께 제출된 경우
//! `from`이 `to`보다 앞서야 합니다.

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{Education, Experience, Profile, User};

/// 문자열 또는 배열로 제출되는 skills 필드
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillsField {
    /// 이미 배열로 제출된 경우 (그대로 보존)
    List(Vec<String>),
    /// 쉼표 구분 문자열로 제출된 경우
    Text(String),
}

impl SkillsField {
    /// 저장용 기술 목록으로 정규화합니다.
    ///
    /// 문자열은 쉼표 분리 후 트리밍하고 빈 항목을 제거하며,
    /// 배열은 변경 없이 보존합니다.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            SkillsField::List(skills) => skills,
            SkillsField::Text(text) => text
                .split(',')
                .map(|skill| skill.trim().to_string())
                .filter(|skill| !skill.is_empty())
                .collect(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            SkillsField::List(skills) => skills.is_empty(),
            SkillsField::Text(text) => text.trim().is_empty(),
        }
    }
}

fn validate_skills(skills: &SkillsField) -> Result<(), ValidationError> {
    if skills.is_empty() {
        return Err(ValidationError::new("required").with_message("Skills is required".into()));
    }
    Ok(())
}

/// 프로필 생성/수정 요청 DTO
///
/// 호출자의 프로필 문서를 제출된 필드로 통째로 upsert합니다.
/// 동일 입력의 반복 제출은 동일한 저장 문서를 만듭니다 (멱등).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpsertProfileRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,

    #[validate(custom(function = "validate_skills"))]
    pub skills: SkillsField,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
}

/// 경력 추가 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_experience_dates"))]
pub struct ExperienceRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[validate(required(message = "From date is required"))]
    pub from: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,

    #[serde(default)]
    pub current: bool,
}

fn validate_experience_dates(req: &ExperienceRequest) -> Result<(), ValidationError> {
    validate_date_range(&req.from, &req.to)
}

/// 학력 추가 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_education_dates"))]
pub struct EducationRequest {
    #[validate(length(min = 1, message = "School is required"))]
    pub school: String,

    #[validate(length(min = 1, message = "Degree is required"))]
    pub degree: String,

    #[validate(length(min = 1, message = "Field of study is required"))]
    pub field_of_study: String,

    #[validate(required(message = "From date is required"))]
    pub from: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,

    #[serde(default)]
    pub current: bool,
}

fn validate_education_dates(req: &EducationRequest) -> Result<(), ValidationError> {
    validate_date_range(&req.from, &req.to)
}

/// `from`이 `to`보다 앞서는지 확인하는 공용 날짜 범위 검증
fn validate_date_range(
    from: &Option<NaiveDate>,
    to: &Option<NaiveDate>,
) -> Result<(), ValidationError> {
    if let (Some(from), Some(to)) = (from, to) {
        if from >= to {
            return Err(ValidationError::new("invalid_date_range")
                .with_message("From date must be before to date".into()));
        }
    }
    Ok(())
}

/// NaiveDate를 자정 UTC 기준 BSON DateTime으로 변환
fn date_to_bson(date: NaiveDate) -> mongodb::bson::DateTime {
    let millis = date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp_millis();
    mongodb::bson::DateTime::from_millis(millis)
}

/// BSON DateTime을 응답용 RFC 3339 문자열로 변환
fn bson_to_rfc3339(date: mongodb::bson::DateTime) -> String {
    date.try_to_rfc3339_string().unwrap_or_default()
}

impl ExperienceRequest {
    /// 검증 통과 후 임베디드 엔티티로 변환합니다.
    ///
    /// `from`은 `required` 규칙으로 검증이 끝난 상태여야 합니다.
    pub fn into_entity(self) -> Result<Experience, ValidationError> {
        let from = self.from.ok_or_else(|| ValidationError::new("required"))?;

        Ok(Experience {
            id: ObjectId::new(),
            title: self.title,
            company: self.company,
            location: self.location,
            from: date_to_bson(from),
            to: self.to.map(date_to_bson),
            current: self.current,
        })
    }
}

impl EducationRequest {
    /// 검증 통과 후 임베디드 엔티티로 변환합니다.
    pub fn into_entity(self) -> Result<Education, ValidationError> {
        let from = self.from.ok_or_else(|| ValidationError::new("required"))?;

        Ok(Education {
            id: ObjectId::new(),
            school: self.school,
            degree: self.degree,
            field_of_study: self.field_of_study,
            from: date_to_bson(from),
            to: self.to.map(date_to_bson),
            current: self.current,
        })
    }
}

/// 프로필에 조인되는 소유자 공개 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUser {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

/// 경력 응답 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub current: bool,
}

impl From<Experience> for ExperienceResponse {
    fn from(exp: Experience) -> Self {
        Self {
            id: exp.id.to_hex(),
            title: exp.title,
            company: exp.company,
            location: exp.location,
            from: bson_to_rfc3339(exp.from),
            to: exp.to.map(bson_to_rfc3339),
            current: exp.current,
        }
    }
}

/// 학력 응답 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationResponse {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub current: bool,
}

impl From<Education> for EducationResponse {
    fn from(edu: Education) -> Self {
        Self {
            id: edu.id.to_hex(),
            school: edu.school,
            degree: edu.degree,
            field_of_study: edu.field_of_study,
            from: bson_to_rfc3339(edu.from),
            to: edu.to.map(bson_to_rfc3339),
            current: edu.current,
        }
    }
}

/// 사용자 이름/아바타가 조인된 프로필 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user: ProfileUser,
    pub status: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    pub experience: Vec<ExperienceResponse>,
    pub education: Vec<EducationResponse>,
}

impl ProfileResponse {
    /// 프로필과 소유 사용자를 조인하여 응답을 구성합니다.
    pub fn from_parts(profile: Profile, user: &User) -> Self {
        Self {
            id: profile.id.map(|id| id.to_hex()).unwrap_or_default(),
            user: ProfileUser {
                id: user.id_string().unwrap_or_default(),
                name: user.name.clone(),
                avatar: user.avatar.clone(),
            },
            status: profile.status,
            skills: profile.skills,
            website: profile.website,
            location: profile.location,
            bio: profile.bio,
            github_username: profile.github_username,
            experience: profile.experience.into_iter().map(Into::into).collect(),
            education: profile.education.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_string_comma_split_and_trimmed() {
        let skills = SkillsField::Text("js, node".to_string());

        assert_eq!(
            skills.into_vec(),
            vec!["js".to_string(), "node".to_string()]
        );
    }

    #[test]
    fn test_skills_array_preserved_unchanged() {
        let skills = SkillsField::List(vec!["js".to_string(), " node ".to_string()]);

        assert_eq!(
            skills.into_vec(),
            vec!["js".to_string(), " node ".to_string()]
        );
    }

    #[test]
    fn test_skills_field_deserializes_both_forms() {
        let from_string: SkillsField = serde_json::from_str("\"js, node\"").unwrap();
        assert_eq!(
            from_string.into_vec(),
            vec!["js".to_string(), "node".to_string()]
        );

        let from_array: SkillsField = serde_json::from_str("[\"js\",\"node\"]").unwrap();
        assert_eq!(
            from_array.into_vec(),
            vec!["js".to_string(), "node".to_string()]
        );
    }

    #[test]
    fn test_empty_skills_rejected() {
        let request = UpsertProfileRequest {
            status: "Developer".to_string(),
            skills: SkillsField::Text("  ".to_string()),
            website: None,
            location: None,
            bio: None,
            github_username: None,
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("skills"));
    }

    #[test]
    fn test_experience_missing_from_rejected() {
        let request = ExperienceRequest {
            title: "Dev".to_string(),
            company: "ACME".to_string(),
            location: None,
            from: None,
            to: None,
            current: false,
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("from"));
    }

    #[test]
    fn test_experience_from_after_to_rejected() {
        let request = ExperienceRequest {
            title: "Dev".to_string(),
            company: "ACME".to_string(),
            location: None,
            from: NaiveDate::from_ymd_opt(2022, 1, 1),
            to: NaiveDate::from_ymd_opt(2020, 1, 1),
            current: false,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_experience_valid_date_range_passes() {
        let request = ExperienceRequest {
            title: "Dev".to_string(),
            company: "ACME".to_string(),
            location: None,
            from: NaiveDate::from_ymd_opt(2020, 1, 1),
            to: NaiveDate::from_ymd_opt(2022, 1, 1),
            current: false,
        };

        assert!(request.validate().is_ok());

        let entity = request.into_entity().unwrap();
        assert_eq!(entity.title, "Dev");
        assert!(entity.to.is_some());
    }

    #[test]
    fn test_education_requires_field_of_study() {
        let request = EducationRequest {
            school: "Uni".to_string(),
            degree: "BSc".to_string(),
            field_of_study: "".to_string(),
            from: NaiveDate::from_ymd_opt(2016, 9, 1),
            to: None,
            current: true,
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("field_of_study"));
    }
}

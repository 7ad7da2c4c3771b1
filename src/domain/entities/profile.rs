//! Profile Entity Implementation
//!
//! 사용자당 최대 하나 존재하는 프로필 문서와
//! 경력(Experience)/학력(Education) 임베디드 목록을 정의합니다.
//!
//! 임베디드 목록은 항상 앞쪽에 삽입되어 최신 항목이 먼저 옵니다.
//! 삽입 순서 외의 정렬 보장은 없습니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 경력 임베디드 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 직함
    pub title: String,
    /// 회사명
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// 시작일 (필수)
    pub from: DateTime,
    /// 종료일 (재직 중인 경우 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime>,
    /// 현재 재직 여부
    #[serde(default)]
    pub current: bool,
}

/// 학력 임베디드 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 학교명
    pub school: String,
    /// 학위
    pub degree: String,
    /// 전공
    pub field_of_study: String,
    /// 시작일 (필수)
    pub from: DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime>,
    #[serde(default)]
    pub current: bool,
}

/// 프로필 엔티티
///
/// 사용자의 일대일 확장 문서입니다. `user` 필드로 소유자를 참조하며
/// 소유자당 정확히 하나만 존재합니다 (유니크 인덱스로 보장).
/// 생성/수정은 소유자 기준 upsert로 수행됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소유 사용자 참조
    pub user: ObjectId,
    /// 현재 상태 (예: "Senior Developer")
    pub status: String,
    /// 보유 기술 목록
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    /// 경력 목록 (최신 항목 우선)
    #[serde(default)]
    pub experience: Vec<Experience>,
    /// 학력 목록 (최신 항목 우선)
    #[serde(default)]
    pub education: Vec<Education>,
}

impl Profile {
    /// 경력 항목을 목록 맨 앞에 추가합니다.
    pub fn add_experience(&mut self, experience: Experience) {
        self.experience.insert(0, experience);
    }

    /// 지정된 ID의 경력 항목을 제거합니다.
    ///
    /// 제거된 항목이 있으면 `true`, 해당 ID가 없으면 `false`를 반환합니다.
    pub fn remove_experience(&mut self, exp_id: &ObjectId) -> bool {
        let before = self.experience.len();
        self.experience.retain(|exp| exp.id != *exp_id);
        self.experience.len() < before
    }

    /// 학력 항목을 목록 맨 앞에 추가합니다.
    pub fn add_education(&mut self, education: Education) {
        self.education.insert(0, education);
    }

    /// 지정된 ID의 학력 항목을 제거합니다.
    pub fn remove_education(&mut self, edu_id: &ObjectId) -> bool {
        let before = self.education.len();
        self.education.retain(|edu| edu.id != *edu_id);
        self.education.len() < before
    }
}

//! # 애플리케이션 상태 저장소
//!
//! 클라이언트의 전체 상태(세션, 알림, 로드된 프로필/피드)를 하나의
//! 구조체로 모델링합니다. 상태는 정의된 액션 메서드로만 변경됩니다.
//!
//! ## 세션 수명주기
//!
//! 저장된 토큰은 신뢰하지 않고 `restore_session`에서
//! `GET /api/auth`로 재검증합니다. 검증 실패 시 익명 상태로
//! 전환됩니다.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::client::api::ApiClient;
use crate::domain::dto::{PostResponse, ProfileResponse, UserResponse};

/// 알림 종류 (UI 표시용)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

/// 자동 만료되는 일회성 알림
#[derive(Debug, Clone)]
pub struct Alert {
    pub id: Uuid,
    pub message: String,
    pub kind: AlertKind,
    pub expires_at: DateTime<Utc>,
}

/// 세션 상태
#[derive(Debug, Clone)]
pub enum SessionState {
    /// 저장된 토큰의 검증 전
    Unknown,
    /// 검증된 세션
    Authenticated { token: String, user: UserResponse },
    /// 로그아웃 또는 검증 실패
    Anonymous,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }
}

/// 클라이언트 애플리케이션 상태
#[derive(Debug)]
pub struct AppStore {
    pub session: SessionState,
    pub alerts: Vec<Alert>,
    pub profile: Option<ProfileResponse>,
    pub posts: Vec<PostResponse>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            session: SessionState::Unknown,
            alerts: Vec::new(),
            profile: None,
            posts: Vec::new(),
        }
    }

    /// 저장된 토큰을 서버에 재검증하고 세션을 복원합니다.
    ///
    /// 검증에 성공하면 토큰을 가진 클라이언트를, 실패하면 익명
    /// 클라이언트를 반환합니다.
    pub async fn restore_session(&mut self, client: ApiClient, token: String) -> ApiClient {
        let client = client.with_token(token.clone());

        match client.current_user().await {
            Ok(user) => {
                self.session_validated(token, Some(user));
                client
            }
            Err(_) => {
                self.session_validated(token, None);
                client.without_token()
            }
        }
    }

    /// 토큰 재검증 결과를 세션 상태에 반영합니다.
    ///
    /// 검증에 성공하면 인증 세션으로, 실패하면 익명 상태로 전환하고
    /// 개인 상태를 비웁니다.
    pub fn session_validated(&mut self, token: String, user: Option<UserResponse>) {
        match user {
            Some(user) => self.session = SessionState::Authenticated { token, user },
            None => self.logout(),
        }
    }

    /// 로그인/회원가입 성공 처리
    pub fn login_succeeded(&mut self, token: String, user: UserResponse) {
        self.session = SessionState::Authenticated { token, user };
    }

    /// 로그아웃: 세션과 개인 상태를 모두 비웁니다.
    pub fn logout(&mut self) {
        self.session = SessionState::Anonymous;
        self.profile = None;
        self.posts.clear();
    }

    /// 알림을 추가하고 ID를 반환합니다.
    ///
    /// 알림은 `ttl` 경과 후 `sweep_expired_alerts`에서 제거됩니다.
    pub fn push_alert(&mut self, message: impl Into<String>, kind: AlertKind, ttl: Duration) -> Uuid {
        let alert = Alert {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            expires_at: Utc::now() + ttl,
        };
        let id = alert.id;
        self.alerts.push(alert);

        id
    }

    /// 지정된 ID의 알림을 즉시 제거합니다.
    pub fn dismiss_alert(&mut self, id: &Uuid) {
        self.alerts.retain(|alert| alert.id != *id);
    }

    /// 만료된 알림을 제거합니다.
    pub fn sweep_expired_alerts(&mut self, now: DateTime<Utc>) {
        self.alerts.retain(|alert| alert.expires_at > now);
    }

    /// 프로필 로드 완료
    pub fn profile_loaded(&mut self, profile: ProfileResponse) {
        self.profile = Some(profile);
    }

    /// 피드 로드 완료
    pub fn posts_loaded(&mut self, posts: Vec<PostResponse>) {
        self.posts = posts;
    }

    /// 단일 게시물 갱신 (좋아요/댓글 변경 후)
    pub fn post_updated(&mut self, post: PostResponse) {
        if let Some(existing) = self.posts.iter_mut().find(|p| p.id == post.id) {
            *existing = post;
        } else {
            self.posts.insert(0, post);
        }
    }

    /// 게시물 삭제 반영
    pub fn post_removed(&mut self, post_id: &str) {
        self.posts.retain(|post| post.id != post_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> UserResponse {
        UserResponse {
            id: "64f1c0ffee64f1c0ffee64f1".to_string(),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            avatar: "https://www.gravatar.com/avatar/abc?s=200&r=pg&d=mm".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_login_then_logout_clears_private_state() {
        let mut store = AppStore::new();
        assert!(!store.session.is_authenticated());

        store.login_succeeded("token".to_string(), sample_user());
        assert!(store.session.is_authenticated());

        store.posts_loaded(vec![]);
        store.logout();

        assert!(!store.session.is_authenticated());
        assert!(store.profile.is_none());
        assert!(store.posts.is_empty());
    }

    #[test]
    fn test_session_validated_with_user_authenticates() {
        let mut store = AppStore::new();

        store.session_validated("stored-token".to_string(), Some(sample_user()));

        match &store.session {
            SessionState::Authenticated { token, user } => {
                assert_eq!(token, "stored-token");
                assert_eq!(user.email, "a@x.com");
            }
            other => panic!("Expected authenticated session, got {:?}", other),
        }
    }

    #[test]
    fn test_session_validation_failure_goes_anonymous() {
        let mut store = AppStore::new();
        store.login_succeeded("stale-token".to_string(), sample_user());
        store.posts_loaded(vec![]);

        // 서버가 토큰을 거부한 경우
        store.session_validated("stale-token".to_string(), None);

        assert!(matches!(store.session, SessionState::Anonymous));
        assert!(store.profile.is_none());
        assert!(store.posts.is_empty());
    }

    #[test]
    fn test_alert_expiry_sweep() {
        let mut store = AppStore::new();
        let short = store.push_alert("gone", AlertKind::Danger, Duration::seconds(1));
        let long = store.push_alert("kept", AlertKind::Success, Duration::seconds(600));

        store.sweep_expired_alerts(Utc::now() + Duration::seconds(5));

        assert_eq!(store.alerts.len(), 1);
        assert_eq!(store.alerts[0].id, long);
        assert_ne!(store.alerts[0].id, short);
    }

    #[test]
    fn test_dismiss_alert_by_id() {
        let mut store = AppStore::new();
        let id = store.push_alert("bye", AlertKind::Success, Duration::seconds(600));

        store.dismiss_alert(&id);
        assert!(store.alerts.is_empty());
    }

    #[test]
    fn test_post_updated_replaces_in_place() {
        let mut store = AppStore::new();
        let post = PostResponse {
            id: "p1".to_string(),
            user: "u1".to_string(),
            name: "A".to_string(),
            avatar: None,
            text: "old".to_string(),
            date: "2024-01-01T00:00:00Z".to_string(),
            likes: vec![],
            comments: vec![],
        };
        store.posts_loaded(vec![post.clone()]);

        let mut updated = post;
        updated.text = "new".to_string();
        store.post_updated(updated);

        assert_eq!(store.posts.len(), 1);
        assert_eq!(store.posts[0].text, "new");

        store.post_removed("p1");
        assert!(store.posts.is_empty());
    }
}

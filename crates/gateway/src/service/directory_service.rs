//! Directory service - the use cases behind every front end.
//!
//! Calls the resilient repository and records an activity for each
//! successful change. Requests arrive already validated.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use activity_feed_lib::ActivityLog;
use common::AppResult;
use domain::{Activity, NewActivity, User, PLACEHOLDER_AVATAR_URL};
use user_repository_lib::UserRepository;

use crate::types::{CreateUserRequest, UpdateUserRequest, UserListResponse};

/// Directory service trait for dependency injection.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Current members plus headline stats; never fails
    async fn list_users(&self) -> UserListResponse;

    /// Add a member and announce the join
    async fn create_user(&self, request: CreateUserRequest) -> AppResult<User>;

    /// Edit a member and announce the update
    async fn update_user(&self, id: &str, request: UpdateUserRequest) -> AppResult<User>;

    /// Remove a member; always reports success
    async fn delete_user(&self, id: &str) -> bool;

    /// Recent activity, newest first
    async fn activity(&self) -> Vec<Activity>;

    /// Empty the activity feed
    async fn clear_activity(&self);
}

/// Concrete implementation of DirectoryService.
pub struct Directory {
    users: Arc<dyn UserRepository>,
    activity: Arc<ActivityLog>,
}

impl Directory {
    pub fn new(users: Arc<dyn UserRepository>, activity: Arc<ActivityLog>) -> Self {
        Self { users, activity }
    }

    async fn announce(&self, activity: NewActivity) {
        let recorded = self.activity.record(activity).await;
        debug!(kind = ?recorded.kind, "{}", recorded.message);
    }
}

/// Members without an avatar are shown with the placeholder image.
fn with_avatar(mut user: User) -> User {
    if user.avatar_url.as_deref().map_or(true, str::is_empty) {
        user.avatar_url = Some(PLACEHOLDER_AVATAR_URL.to_string());
    }
    user
}

#[async_trait]
impl DirectoryService for Directory {
    async fn list_users(&self) -> UserListResponse {
        let list = self.users.list_users().await;
        if let Some(diagnostic) = &list.diagnostic {
            debug!("{}", diagnostic);
        }
        UserListResponse::new(list, Utc::now())
    }

    async fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        let user = self.users.create_user(request.into_draft()).await?;
        self.announce(NewActivity::joined(&with_avatar(user.clone())))
            .await;
        Ok(user)
    }

    async fn update_user(&self, id: &str, request: UpdateUserRequest) -> AppResult<User> {
        let user = self.users.update_user(id, request.into_patch()).await?;
        self.announce(NewActivity::updated(&user)).await;
        Ok(user)
    }

    async fn delete_user(&self, id: &str) -> bool {
        let known = self.users.find_user(id).await;
        let deleted = self.users.delete_user(id).await;

        match known {
            Some(user) => self.announce(NewActivity::removed(&user)).await,
            None => debug!(id = %id, "Deleted user unknown locally, no activity recorded"),
        }
        deleted
    }

    async fn activity(&self) -> Vec<Activity> {
        self.activity.list().await
    }

    async fn clear_activity(&self) {
        self.activity.clear().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use common::AppError;
    use domain::{sample_users, ActivityKind, ACTIVITY_CAPACITY};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::Instant;
    use user_repository_lib::{
        ApiRequest, FallbackStore, MockUserRepository, RawResponse, ResilientUserRepository,
        UserList, UsersApi,
    };

    fn directory(repo: MockUserRepository) -> (Directory, Arc<ActivityLog>) {
        let log = Arc::new(ActivityLog::in_memory(ACTIVITY_CAPACITY));
        (Directory::new(Arc::new(repo), log.clone()), log)
    }

    fn listing(users: Vec<User>) -> UserList {
        UserList {
            users,
            diagnostic: None,
            raw_response_text: String::new(),
        }
    }

    fn create_request() -> CreateUserRequest {
        CreateUserRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            bio: None,
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn test_list_users_computes_stats() {
        let mut repo = MockUserRepository::new();
        repo.expect_list_users().returning(|| {
            let mut users = sample_users(Utc::now());
            users[0].created_at = Utc::now() - Duration::days(1);
            UserList {
                diagnostic: Some("Network error: refused. Using mock data instead.".into()),
                ..listing(users)
            }
        });

        let (directory, _) = directory(repo);
        let response = directory.list_users().await;

        assert_eq!(response.stats.total_members, 3);
        assert_eq!(response.stats.new_this_week, 1);
        assert!(response.diagnostic.is_some());
    }

    #[tokio::test]
    async fn test_create_records_join_with_placeholder_avatar() {
        let mut repo = MockUserRepository::new();
        repo.expect_create_user()
            .withf(|draft| draft.name == "Jane Doe" && draft.avatar_url.is_none())
            .times(1)
            .returning(|draft| Ok(User::from_draft(draft)));

        let (directory, log) = directory(repo);
        let user = directory.create_user(create_request()).await.unwrap();

        assert!(user.avatar_url.is_none());
        let activity = log.list().await;
        assert_eq!(activity.len(), 1);
        assert_eq!(activity[0].kind, ActivityKind::Join);
        assert_eq!(activity[0].message, "Jane Doe joined the community");
        assert_eq!(
            activity[0].user.as_ref().and_then(|u| u.avatar_url.as_deref()),
            Some(PLACEHOLDER_AVATAR_URL)
        );
    }

    #[tokio::test]
    async fn test_rejected_create_records_nothing() {
        let mut repo = MockUserRepository::new();
        repo.expect_create_user()
            .returning(|_| Err(AppError::domain(409, "Email in use")));

        let (directory, log) = directory(repo);
        let result = directory.create_user(create_request()).await;

        assert_eq!(result, Err(AppError::domain(409, "Email in use")));
        assert!(log.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_records_activity() {
        let mut repo = MockUserRepository::new();
        repo.expect_update_user()
            .withf(|id, patch| id == "2" && patch.bio.as_deref() == Some("Hello"))
            .returning(|_, patch| Ok(sample_users(Utc::now())[1].apply(&patch)));

        let (directory, log) = directory(repo);
        let request = UpdateUserRequest {
            bio: Some("Hello".to_string()),
            ..UpdateUserRequest::default()
        };
        let user = directory.update_user("2", request).await.unwrap();

        assert_eq!(user.bio.as_deref(), Some("Hello"));
        assert_eq!(log.list().await[0].message, "Sarah Williams's profile was updated");
    }

    #[tokio::test]
    async fn test_update_unknown_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_update_user()
            .returning(|id, _| Err(AppError::NotFound(id.to_string())));

        let (directory, log) = directory(repo);
        let result = directory
            .update_user("missing", UpdateUserRequest::default())
            .await;

        assert_eq!(result, Err(AppError::NotFound("missing".into())));
        assert!(log.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_names_the_removed_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_user()
            .withf(|id| id == "3")
            .returning(|id| sample_users(Utc::now()).into_iter().find(|u| u.id == id));
        repo.expect_list_users().never();
        repo.expect_delete_user()
            .withf(|id| id == "3")
            .times(1)
            .returning(|_| true);

        let (directory, log) = directory(repo);
        assert!(directory.delete_user("3").await);

        let activity = log.list().await;
        assert_eq!(activity[0].kind, ActivityKind::Delete);
        assert_eq!(activity[0].message, "Michael Chen was removed from the community");
    }

    /// Remote API that never answers, counting every request it receives
    struct HungApi {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl UsersApi for HungApi {
        async fn send(&self, _request: ApiRequest) -> AppResult<RawResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_delete_makes_a_single_remote_call() {
        let deadline = std::time::Duration::from_millis(200);
        let calls = Arc::new(AtomicUsize::new(0));
        let api = HungApi {
            calls: calls.clone(),
        };
        let repo = ResilientUserRepository::new(api, FallbackStore::seeded(), deadline);
        let log = Arc::new(ActivityLog::in_memory(ACTIVITY_CAPACITY));
        let directory = Directory::new(Arc::new(repo), log.clone());

        let started = Instant::now();
        assert!(directory.delete_user("1").await);
        let elapsed = started.elapsed();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(elapsed < deadline * 2, "delete took {:?}", elapsed);
        assert_eq!(log.list().await[0].message, "Alex Johnson was removed from the community");
    }

    #[tokio::test]
    async fn test_delete_unknown_user_still_succeeds() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_user().returning(|_| None);
        repo.expect_delete_user().returning(|_| true);

        let (directory, log) = directory(repo);
        assert!(directory.delete_user("ghost").await);
        assert!(log.is_empty().await);
    }

    #[tokio::test]
    async fn test_clear_activity() {
        let (directory, log) = directory(MockUserRepository::new());
        log.record(NewActivity::other("Welcome!")).await;

        directory.clear_activity().await;
        assert!(directory.activity().await.is_empty());
    }
}

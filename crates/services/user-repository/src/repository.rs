//! Resilient user repository.
//!
//! Talks to the remote users API and falls back to the in-memory store
//! whenever the API cannot be reached, times out, or answers with something
//! unusable. Reads never fail; writes fail only when a reachable server
//! explicitly rejects them (or, for updates, when the id is unknown locally).

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use common::{ApiConfig, AppError, AppResult, OptionExt};
use domain::{NewUser, User, UserPatch, LOGGED_BODY_CHARS};

use crate::fallback::FallbackStore;
use crate::outcome::{diagnostic, Outcome};
use crate::remote::{with_deadline, ApiRequest, HttpUsersApi, RawResponse, UsersApi};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const USERS_PATH: &str = "/users";

/// Result of listing users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserList {
    pub users: Vec<User>,
    /// Set when the fallback store answered instead of the remote API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
    /// Body text received from the API, empty if none arrived
    pub raw_response_text: String,
}

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List users. Never fails.
    async fn list_users(&self) -> UserList;

    /// Create a user. Fails only on an explicit remote rejection.
    async fn create_user(&self, draft: NewUser) -> AppResult<User>;

    /// Apply a partial update to a user known to the fallback store.
    async fn update_user(&self, id: &str, patch: UserPatch) -> AppResult<User>;

    /// Delete a user. Always reports success.
    async fn delete_user(&self, id: &str) -> bool;

    /// Look a user up in the fallback store. Never touches the network.
    async fn find_user(&self, id: &str) -> Option<User>;
}

/// Repository backed by a remote API with an in-memory fallback store.
pub struct ResilientUserRepository<A: UsersApi = HttpUsersApi> {
    api: A,
    store: FallbackStore,
    timeout: Duration,
}

impl ResilientUserRepository<HttpUsersApi> {
    /// Repository talking HTTP to the API described by `config`,
    /// with a freshly seeded fallback store.
    pub fn from_config(config: ApiConfig) -> AppResult<Self> {
        let timeout = config.request_timeout;
        let api = HttpUsersApi::new(config)?;
        Ok(Self::new(api, FallbackStore::seeded(), timeout))
    }
}

impl<A: UsersApi> ResilientUserRepository<A> {
    pub fn new(api: A, store: FallbackStore, timeout: Duration) -> Self {
        Self {
            api,
            store,
            timeout,
        }
    }

    /// The fallback store
    pub fn store(&self) -> &FallbackStore {
        &self.store
    }

    /// One attempt, bounded by the deadline.
    async fn call(&self, request: ApiRequest) -> AppResult<RawResponse> {
        with_deadline(self.timeout, self.api.send(request)).await
    }

    fn user_path(id: &str) -> String {
        format!("{}/{}", USERS_PATH, id)
    }
}

#[async_trait]
impl<A: UsersApi> UserRepository for ResilientUserRepository<A> {
    async fn list_users(&self) -> UserList {
        debug!("Fetching users from API");

        let (attempt, raw_response_text) = match self.call(ApiRequest::get(USERS_PATH)).await {
            Ok(response) => {
                debug!(
                    status = response.status,
                    body = %preview(&response.body),
                    "Users API responded"
                );
                (parse_user_list(&response.body), response.body)
            }
            Err(err) => (Err(err), String::new()),
        };

        let outcome = match attempt {
            Ok(users) => Outcome::Remote(users),
            Err(err) => {
                warn!(error = %err, "Listing users failed, falling back to mock data");
                Outcome::Fallback {
                    value: self.store.snapshot().await,
                    diagnostic: diagnostic(&err),
                }
            }
        };

        let (users, diagnostic) = outcome.into_parts();
        UserList {
            users,
            diagnostic,
            raw_response_text,
        }
    }

    async fn create_user(&self, draft: NewUser) -> AppResult<User> {
        debug!(name = %draft.name, "Creating user via API");

        // Built up front so a fallback record is always ready.
        let candidate = User::from_draft(draft.clone());

        let body = serde_json::to_value(&draft)?;
        let attempt = match self.call(ApiRequest::post(USERS_PATH, body)).await {
            Ok(response) => read_user(response, create_rejected),
            Err(err) => Err(err),
        };

        match Outcome::settle(attempt, || candidate)? {
            Outcome::Remote(user) => {
                info!(id = %user.id, "Created user via API");
                Ok(user)
            }
            Outcome::Fallback { value, diagnostic } => {
                warn!(id = %value.id, reason = %diagnostic, "Created user in fallback store");
                self.store.prepend(value.clone()).await;
                Ok(value)
            }
        }
    }

    async fn update_user(&self, id: &str, patch: UserPatch) -> AppResult<User> {
        debug!(id = %id, "Updating user via API");

        let existing = self.store.find(id).await.ok_or_not_found(id)?;
        let candidate = existing.apply(&patch);

        let body = serde_json::to_value(&patch)?;
        let attempt = match self.call(ApiRequest::patch(Self::user_path(id), body)).await {
            Ok(response) => read_user(response, update_rejected),
            Err(err) => Err(err),
        };

        match Outcome::settle(attempt, || candidate)? {
            Outcome::Remote(user) => {
                info!(id = %id, "Updated user via API");
                Ok(user)
            }
            Outcome::Fallback { value, diagnostic } => {
                warn!(id = %id, reason = %diagnostic, "Updated user in fallback store");
                if !self.store.replace(value.clone()).await {
                    debug!(id = %id, "User vanished from fallback store during update");
                }
                Ok(value)
            }
        }
    }

    async fn delete_user(&self, id: &str) -> bool {
        debug!(id = %id, "Deleting user via API");

        if !self.store.contains(id).await {
            warn!(id = %id, "User not found in fallback store");
        }

        match self.call(ApiRequest::delete(Self::user_path(id))).await {
            Ok(response) if response.is_success() => {
                info!(id = %id, "Deleted user via API");
            }
            Ok(response) => {
                warn!(
                    id = %id,
                    status = response.status,
                    "API refused delete, removing from fallback store"
                );
            }
            Err(err) => {
                warn!(id = %id, error = %err, "Delete failed, removing from fallback store");
            }
        }

        self.store.remove(id).await;
        true
    }

    async fn find_user(&self, id: &str) -> Option<User> {
        self.store.find(id).await
    }
}

/// Parse a list body. Any status is accepted; only the body matters.
fn parse_user_list(body: &str) -> AppResult<Vec<User>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|_| AppError::parse("API response is not valid JSON"))?;

    if !value.is_array() {
        return Err(AppError::parse("API response is not a user list"));
    }

    serde_json::from_value(value).map_err(|e| {
        debug!(error = %e, "User list has malformed entries");
        AppError::parse("API response is not a user list")
    })
}

/// Interpret a create/update response.
///
/// A non-2xx status with a JSON body is a rejection carrying the server's
/// message, or `unexplained(status)` when it gives none; a 2xx status must
/// carry a user.
fn read_user(response: RawResponse, unexplained: fn(u16) -> String) -> AppResult<User> {
    debug!(
        status = response.status,
        body = %preview(&response.body),
        "Users API responded"
    );

    let value: Value = serde_json::from_str(&response.body)
        .map_err(|_| AppError::parse("API response is not valid JSON"))?;

    if !response.is_success() {
        return Err(AppError::domain(
            response.status,
            rejection_message(&value).unwrap_or_else(|| unexplained(response.status)),
        ));
    }

    serde_json::from_value(value).map_err(|_| AppError::parse("API response is not a user"))
}

fn rejection_message(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}

fn create_rejected(status: u16) -> String {
    format!("Server responded with status: {}", status)
}

fn update_rejected(status: u16) -> String {
    format!("Error: {}", status)
}

fn preview(body: &str) -> String {
    body.chars().take(LOGGED_BODY_CHARS).collect()
}

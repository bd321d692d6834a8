//! In-memory fallback store.
//!
//! Degraded-mode copy of the directory served whenever the remote API is
//! unusable. It lives as long as the process and is never synchronised with
//! the remote; most recent users come first.

use chrono::Utc;
use tokio::sync::RwLock;

use domain::{sample_users, User};

/// Users served while the remote API is unavailable.
///
/// Ids are unique at all times. Shared across tasks, so every access goes
/// through the lock; the lock is never held across a network call.
#[derive(Debug)]
pub struct FallbackStore {
    users: RwLock<Vec<User>>,
}

impl FallbackStore {
    /// Store holding `users`. Later duplicates of an id are dropped.
    pub fn new(users: Vec<User>) -> Self {
        let mut unique: Vec<User> = Vec::with_capacity(users.len());
        for user in users {
            if !unique.iter().any(|u| u.id == user.id) {
                unique.push(user);
            }
        }
        Self {
            users: RwLock::new(unique),
        }
    }

    /// Store seeded with the three sample users.
    pub fn seeded() -> Self {
        Self::new(sample_users(Utc::now()))
    }

    /// Copy of every stored user, newest first.
    pub async fn snapshot(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    pub async fn find(&self, id: &str) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.users.read().await.iter().any(|u| u.id == id)
    }

    /// Insert at the front. An existing record with the same id is dropped.
    pub async fn prepend(&self, user: User) {
        let mut users = self.users.write().await;
        users.retain(|u| u.id != user.id);
        users.insert(0, user);
    }

    /// Replace the record with the same id in place.
    ///
    /// Returns `false` (and stores nothing) when no such record exists.
    pub async fn replace(&self, user: User) -> bool {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user;
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`. Returns whether one was present.
    pub async fn remove(&self, id: &str) -> bool {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        users.len() != before
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Default for FallbackStore {
    fn default() -> Self {
        Self::seeded()
    }
}

//! Capped, persisted activity log.

use std::path::{Path, PathBuf};

use tokio::sync::RwLock;
use tracing::{debug, warn};

use common::{ActivityConfig, AppResult};
use domain::{Activity, NewActivity};

/// Most recent community activity, newest first.
///
/// Every change rewrites the whole list to the configured file while the
/// lock is held. A failed write is logged and otherwise ignored; the
/// in-memory list stays authoritative for the life of the process.
#[derive(Debug)]
pub struct ActivityLog {
    entries: RwLock<Vec<Activity>>,
    capacity: usize,
    path: Option<PathBuf>,
}

impl ActivityLog {
    /// Empty log that never touches disk.
    pub fn in_memory(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            capacity,
            path: None,
        }
    }

    /// Load the log described by `config`.
    ///
    /// A missing file yields an empty log. An unreadable or corrupt file is
    /// logged and also yields an empty log; startup never fails here.
    pub async fn load(config: &ActivityConfig) -> Self {
        let mut entries = match &config.path {
            Some(path) => read_entries(path).await,
            None => Vec::new(),
        };
        entries.truncate(config.capacity);

        Self {
            entries: RwLock::new(entries),
            capacity: config.capacity,
            path: config.path.clone(),
        }
    }

    /// Stamp, prepend and persist an activity.
    pub async fn record(&self, activity: NewActivity) -> Activity {
        let activity = activity.stamp();
        debug!(kind = ?activity.kind, message = %activity.message, "Recording activity");

        // Held across the write so the file never lags behind a later record.
        let mut entries = self.entries.write().await;
        entries.insert(0, activity.clone());
        entries.truncate(self.capacity);
        self.persist_quietly(&entries).await;
        drop(entries);

        activity
    }

    /// Current entries, newest first.
    pub async fn list(&self) -> Vec<Activity> {
        self.entries.read().await.clone()
    }

    /// Remove every entry.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
        self.persist_quietly(&entries).await;
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    async fn persist_quietly(&self, entries: &[Activity]) {
        if let Err(e) = self.write(entries).await {
            warn!(error = %e, "Failed to save activities");
        }
    }

    async fn write(&self, entries: &[Activity]) -> AppResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let json = serde_json::to_vec(entries)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

async fn read_entries(path: &Path) -> Vec<Activity> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load activities");
            return Vec::new();
        }
    };

    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "Ignoring corrupt activity file");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain::{sample_users, ActivityKind, ACTIVITY_CAPACITY};

    #[tokio::test]
    async fn test_record_prepends() {
        let log = ActivityLog::in_memory(ACTIVITY_CAPACITY);
        let users = sample_users(Utc::now());

        log.record(NewActivity::joined(&users[0])).await;
        let latest = log.record(NewActivity::updated(&users[1])).await;

        let entries = log.list().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], latest);
        assert_eq!(entries[0].kind, ActivityKind::Update);
        assert_eq!(entries[1].kind, ActivityKind::Join);
    }

    #[tokio::test]
    async fn test_capped_at_capacity() {
        let log = ActivityLog::in_memory(ACTIVITY_CAPACITY);

        for i in 0..25 {
            log.record(NewActivity::other(format!("event {}", i))).await;
        }

        let entries = log.list().await;
        assert_eq!(entries.len(), 20);
        assert_eq!(entries[0].message, "event 24");
        assert_eq!(entries[19].message, "event 5");
    }

    #[tokio::test]
    async fn test_clear() {
        let log = ActivityLog::in_memory(5);
        log.record(NewActivity::other("hello")).await;
        log.clear().await;

        assert!(log.is_empty().await);
    }

    #[tokio::test]
    async fn test_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let config = ActivityConfig::at(dir.path().join("activities.json"));

        let log = ActivityLog::load(&config).await;
        log.record(NewActivity::other("first")).await;
        log.record(NewActivity::other("second")).await;
        drop(log);

        let reloaded = ActivityLog::load(&config).await;
        let entries = reloaded.list().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "second");
    }

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = ActivityConfig::at(dir.path().join("nope.json"));

        assert!(ActivityLog::load(&config).await.is_empty().await);
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activities.json");
        std::fs::write(&path, "{ definitely not a list").unwrap();

        let log = ActivityLog::load(&ActivityConfig::at(&path)).await;
        assert!(log.is_empty().await);

        log.record(NewActivity::other("fresh")).await;
        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.contains("fresh"));
    }

    #[tokio::test]
    async fn test_unwritable_path_keeps_memory() {
        let dir = tempfile::tempdir().unwrap();
        let config = ActivityConfig::at(dir.path().join("missing-dir").join("a.json"));

        let log = ActivityLog::load(&config).await;
        log.record(NewActivity::other("kept")).await;

        assert_eq!(log.len().await, 1);
        assert!(!dir.path().join("missing-dir").exists());
    }

    #[tokio::test]
    async fn test_clear_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let config = ActivityConfig::at(dir.path().join("activities.json"));

        let log = ActivityLog::load(&config).await;
        log.record(NewActivity::other("gone soon")).await;
        log.clear().await;

        assert!(ActivityLog::load(&config).await.is_empty().await);
    }
}

//! Activity Feed
//!
//! Rolling log of community events (joins, profile updates, removals),
//! capped to the most recent entries and persisted as JSON so that the
//! feed survives restarts. Entries are recorded by the gateway after a
//! repository operation succeeds; the repository never records them itself.

mod feed;

pub use feed::ActivityLog;

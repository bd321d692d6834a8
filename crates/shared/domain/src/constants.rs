//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum display name length (in characters)
pub const MIN_NAME_LENGTH: u64 = 2;

/// Maximum display name length (in characters)
pub const MAX_NAME_LENGTH: u64 = 50;

// =============================================================================
// Avatars
// =============================================================================

/// Placeholder image used when a user has no avatar
pub const PLACEHOLDER_AVATAR_URL: &str = "/placeholder.svg";

/// Sized placeholder used by the seed users
pub const SAMPLE_AVATAR_URL: &str = "/placeholder.svg?height=200&width=200";

// =============================================================================
// Remote API
// =============================================================================

/// Base URL used when no API URL is configured
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Deadline for every remote call, in milliseconds
pub const REQUEST_TIMEOUT_MS: u64 = 5_000;

/// Number of response characters kept when logging a body
pub const LOGGED_BODY_CHARS: usize = 200;

// =============================================================================
// Activity feed
// =============================================================================

/// Number of activities kept in the feed (newest first)
pub const ACTIVITY_CAPACITY: usize = 20;

/// File name under which the activity feed is persisted
pub const DEFAULT_ACTIVITY_FILE: &str = "community-activities.json";

/// Window used for "new this week" statistics
pub const NEW_MEMBER_WINDOW_DAYS: i64 = 7;

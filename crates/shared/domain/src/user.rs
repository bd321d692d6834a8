//! User domain entity and related types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::SAMPLE_AVATAR_URL;

/// Community member.
///
/// Field names follow the remote API's camelCase wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque unique identifier
    #[cfg_attr(feature = "openapi", schema(example = "1"))]
    pub id: String,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Alex Johnson"))]
    pub name: String,
    /// Email address
    #[cfg_attr(feature = "openapi", schema(example = "alex@example.com"))]
    pub email: String,
    /// Free-form biography
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Creation timestamp, never changed after creation
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a locally-owned user from a draft.
    ///
    /// Assigns a fresh random id and stamps the creation time.
    pub fn from_draft(draft: NewUser) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            email: draft.email,
            bio: draft.bio,
            avatar_url: draft.avatar_url,
            created_at: Utc::now(),
        }
    }

    /// Return a copy with every field supplied by `patch` overwritten.
    pub fn apply(&self, patch: &UserPatch) -> Self {
        let mut merged = self.clone();
        if let Some(name) = &patch.name {
            merged.name = name.clone();
        }
        if let Some(email) = &patch.email {
            merged.email = email.clone();
        }
        if let Some(bio) = &patch.bio {
            merged.bio = Some(bio.clone());
        }
        if let Some(avatar_url) = &patch.avatar_url {
            merged.avatar_url = Some(avatar_url.clone());
        }
        merged
    }

    /// Whether the user joined within `window` of `now`.
    pub fn joined_within(&self, window: Duration, now: DateTime<Utc>) -> bool {
        self.created_at > now - window
    }
}

/// User creation payload (sent as-is to the remote API).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Partial user update. Only the fields that are `Some` are sent and applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserPatch {
    /// Patch that only renames the user
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// The deterministic seed users served while the remote API is unavailable.
pub fn sample_users(now: DateTime<Utc>) -> Vec<User> {
    let seed = |id: &str, name: &str, email: &str, bio: &str, days_ago: i64| User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        bio: Some(bio.to_string()),
        avatar_url: Some(SAMPLE_AVATAR_URL.to_string()),
        created_at: now - Duration::days(days_ago),
    };

    vec![
        seed(
            "1",
            "Alex Johnson",
            "alex@example.com",
            "Community leader and tech enthusiast",
            7,
        ),
        seed(
            "2",
            "Sarah Williams",
            "sarah@example.com",
            "Product designer with a passion for UX",
            14,
        ),
        seed(
            "3",
            "Michael Chen",
            "michael@example.com",
            "Software engineer and open source contributor",
            30,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewUser {
        NewUser {
            name: "Jamie Rivera".to_string(),
            email: "jamie@example.com".to_string(),
            bio: None,
            avatar_url: None,
        }
    }

    #[test]
    fn test_from_draft_assigns_unique_ids() {
        let a = User::from_draft(draft());
        let b = User::from_draft(draft());

        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Jamie Rivera");
        assert!(a.created_at <= Utc::now());
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let user = sample_users(Utc::now()).remove(0);
        let updated = user.apply(&UserPatch::name("X"));

        assert_eq!(updated.name, "X");
        assert_eq!(updated.id, user.id);
        assert_eq!(updated.email, user.email);
        assert_eq!(updated.bio, user.bio);
        assert_eq!(updated.created_at, user.created_at);
    }

    #[test]
    fn test_sample_users_are_deterministic() {
        let now = Utc::now();
        let users = sample_users(now);

        let ids: Vec<_> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(users[0].created_at, now - Duration::days(7));
        assert_eq!(users[2].created_at, now - Duration::days(30));
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let user = sample_users(Utc::now()).remove(0);
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("avatarUrl").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("avatar_url").is_none());
    }

    #[test]
    fn test_patch_omits_missing_fields() {
        let json = serde_json::to_string(&UserPatch::name("X")).unwrap();
        assert_eq!(json, r#"{"name":"X"}"#);
    }

    #[test]
    fn test_user_deserializes_without_optional_fields() {
        let user: User = serde_json::from_str(
            r#"{"id":"9","name":"Ana","email":"ana@example.com","createdAt":"2024-05-01T10:00:00.000Z"}"#,
        )
        .unwrap();

        assert_eq!(user.id, "9");
        assert!(user.bio.is_none());
        assert!(user.avatar_url.is_none());
    }
}

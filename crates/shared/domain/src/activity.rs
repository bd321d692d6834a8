//! Activity feed entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::User;

/// Kind of community event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Join,
    Update,
    Delete,
    Other,
}

/// Compact user summary embedded in an activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ActivityUser {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl From<&User> for ActivityUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}

/// Recorded activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ActivityUser>,
}

/// Activity before it is stamped with an id and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub kind: ActivityKind,
    pub message: String,
    pub user: Option<ActivityUser>,
}

impl NewActivity {
    /// "{name} joined the community"
    pub fn joined(user: &User) -> Self {
        Self {
            kind: ActivityKind::Join,
            message: format!("{} joined the community", user.name),
            user: Some(ActivityUser::from(user)),
        }
    }

    /// "{name}'s profile was updated"
    pub fn updated(user: &User) -> Self {
        Self {
            kind: ActivityKind::Update,
            message: format!("{}'s profile was updated", user.name),
            user: Some(ActivityUser::from(user)),
        }
    }

    /// "{name} was removed from the community"
    pub fn removed(user: &User) -> Self {
        Self {
            kind: ActivityKind::Delete,
            message: format!("{} was removed from the community", user.name),
            user: Some(ActivityUser::from(user)),
        }
    }

    /// Free-form announcement with no user attached
    pub fn other(message: impl Into<String>) -> Self {
        Self {
            kind: ActivityKind::Other,
            message: message.into(),
            user: None,
        }
    }

    /// Stamp with a fresh id and the current time
    pub fn stamp(self) -> Activity {
        Activity {
            id: Uuid::new_v4().to_string(),
            kind: self.kind,
            message: self.message,
            timestamp: Utc::now(),
            user: self.user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::sample_users;

    #[test]
    fn test_messages() {
        let user = sample_users(Utc::now()).remove(0);

        assert_eq!(NewActivity::joined(&user).message, "Alex Johnson joined the community");
        assert_eq!(
            NewActivity::updated(&user).message,
            "Alex Johnson's profile was updated"
        );
        assert_eq!(
            NewActivity::removed(&user).message,
            "Alex Johnson was removed from the community"
        );
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let activity = NewActivity::other("Welcome!").stamp();
        let json = serde_json::to_value(&activity).unwrap();

        assert_eq!(json["type"], "other");
        assert!(json.get("user").is_none());
    }
}

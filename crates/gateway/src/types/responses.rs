//! Response bodies.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use domain::{User, NEW_MEMBER_WINDOW_DAYS};
use user_repository_lib::UserList;

/// Headline numbers shown above the member list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryStats {
    pub total_members: usize,
    /// Members created within the last seven days
    pub new_this_week: usize,
}

impl DirectoryStats {
    pub fn compute(users: &[User], now: DateTime<Utc>) -> Self {
        let window = Duration::days(NEW_MEMBER_WINDOW_DAYS);
        Self {
            total_members: users.len(),
            new_this_week: users.iter().filter(|u| u.joined_within(window, now)).count(),
        }
    }
}

/// Member listing
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    pub users: Vec<User>,
    /// Present when the remote API was unusable and sample data is shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
    /// Raw remote response body, empty when nothing was received
    pub raw_response_text: String,
    pub stats: DirectoryStats,
}

impl UserListResponse {
    pub fn new(list: UserList, now: DateTime<Utc>) -> Self {
        let stats = DirectoryStats::compute(&list.users, now);
        Self {
            users: list.users,
            diagnostic: list.diagnostic,
            raw_response_text: list.raw_response_text,
            stats,
        }
    }
}

/// Delete acknowledgement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::sample_users;

    #[test]
    fn test_stats_for_sample_users() {
        let now = Utc::now();
        let users = sample_users(now);

        let stats = DirectoryStats::compute(&users, now + Duration::seconds(1));
        assert_eq!(stats.total_members, 3);
        assert_eq!(stats.new_this_week, 0);

        let stats = DirectoryStats::compute(&users, now - Duration::hours(1));
        assert_eq!(stats.new_this_week, 1);
    }

    #[test]
    fn test_list_response_shape() {
        let list = UserList {
            users: Vec::new(),
            diagnostic: None,
            raw_response_text: "[]".to_string(),
        };
        let json = serde_json::to_value(UserListResponse::new(list, Utc::now())).unwrap();

        assert_eq!(json["rawResponseText"], "[]");
        assert_eq!(json["stats"]["totalMembers"], 0);
        assert!(json.get("diagnostic").is_none());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::{ObjectExpiration, Range, UserInfo};

/// A user group
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: UserInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<UserInfo>,
    /// Number of members
    pub cnt_users: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<DateTime<Utc>>,
}

/// Group list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupList {
    pub range: Range,
    pub items: Vec<Group>,
}

/// Create group request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<ObjectExpiration>,
}

impl CreateGroupRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), expiration: None }
    }
}

/// Update group request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<ObjectExpiration>,
}

/// Membership entry returned when listing a group's users
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupUser {
    pub user_info: UserInfo,
    pub is_member: bool,
}

/// Group user list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupUserList {
    pub range: Range,
    pub items: Vec<GroupUser>,
}

/// User ids to add to or remove from a group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeGroupMembersRequest {
    pub ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_parses_wire_fixture() {
        let json = r#"{
            "id": 7,
            "name": "finance",
            "createdAt": "2026-01-12T09:30:00Z",
            "createdBy": {"id": 1, "userName": "admin"},
            "cntUsers": 3
        }"#;
        let group: Group = serde_json::from_str(json).unwrap();
        assert_eq!(group.id, 7);
        assert_eq!(group.name, "finance");
        assert_eq!(group.created_by.user_name.as_deref(), Some("admin"));
        assert_eq!(group.cnt_users, 3);
        assert!(group.expire_at.is_none());
    }

    #[test]
    fn create_request_omits_unset_expiration() {
        let body = serde_json::to_value(CreateGroupRequest::new("ops")).unwrap();
        assert_eq!(body, serde_json::json!({"name": "ops"}));
    }
}

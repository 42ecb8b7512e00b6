use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pagination window echoed by every list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Range {
    pub offset: i64,
    pub limit: i64,
    pub total: i64,
}

/// Reference to the user that created or last touched a resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_uuid: Option<String>,
}

/// Expiration settings attached to groups and shares
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectExpiration {
    pub enable_expiration: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<DateTime<Utc>>,
}

/// Filter operators understood by list endpoints
pub mod filter_op {
    pub const CONTAINS: &str = "cn";
    pub const EQUALS: &str = "eq";
    pub const GREATER_EQUALS: &str = "ge";
    pub const LESS_EQUALS: &str = "le";
}

/// Build a `field:op:value` filter expression
pub fn filter_expr(field: &str, op: &str, value: &str) -> String {
    format!("{}:{}:{}", field, op, value)
}

/// Common query parameters for list endpoints.
///
/// Offset and limit mirror the remote API; page caps are enforced
/// server-side. Filter and sort values are percent-encoded when the query
/// string is rendered.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub filter: Option<String>,
    pub sort: Option<String>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Render as a query string, empty when nothing is set
    pub fn to_query(&self) -> String {
        let mut query_params = vec![];
        if let Some(offset) = self.offset {
            query_params.push(format!("offset={}", offset));
        }
        if let Some(limit) = self.limit {
            query_params.push(format!("limit={}", limit));
        }
        if let Some(filter) = &self.filter {
            query_params.push(format!("filter={}", urlencoding::encode(filter)));
        }
        if let Some(sort) = &self.sort {
            query_params.push(format!("sort={}", urlencoding::encode(sort)));
        }

        if query_params.is_empty() {
            String::new()
        } else {
            format!("?{}", query_params.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_render_no_query() {
        assert_eq!(ListParams::new().to_query(), "");
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let params = ListParams::new()
            .with_offset(10)
            .with_limit(25)
            .with_filter(filter_expr("name", filter_op::CONTAINS, "spam&eggs=2?"));

        let query = params.to_query();
        assert_eq!(query, "?offset=10&limit=25&filter=name%3Acn%3Aspam%26eggs%3D2%3F");
    }

    #[test]
    fn sort_value_is_encoded() {
        let query = ListParams::new().with_sort("name:asc").to_query();
        assert_eq!(query, "?sort=name%3Aasc");
    }
}

use chrono::{DateTime, Utc};
use percent_encoding::{percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use crate::models::common::{ObjectExpiration, Range, UserInfo};

/// Characters escaped when an access key is embedded in a URL path segment
const PATH_SEGMENT_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// A download share exposing one node to external recipients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadShare {
    pub id: i64,
    pub node_id: i64,
    pub access_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: UserInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<UserInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<DateTime<Utc>>,
    pub cnt_downloads: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_downloads: Option<i64>,
    pub is_protected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_creator_name: Option<bool>,
}

impl DownloadShare {
    /// Public URL recipients open in a browser
    pub fn public_url(&self, base_url: &str) -> String {
        format!(
            "{}/public/download-shares/{}",
            base_url.trim_end_matches('/'),
            percent_encode(self.access_key.as_bytes(), PATH_SEGMENT_SET)
        )
    }
}

/// Download share list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadShareList {
    pub range: Range,
    pub items: Vec<DownloadShare>,
}

/// Create download share request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDownloadShareRequest {
    pub node_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<ObjectExpiration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_downloads: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_creator_name: Option<bool>,
}

impl CreateDownloadShareRequest {
    pub fn new(node_id: i64) -> Self {
        Self {
            node_id,
            name: None,
            password: None,
            expiration: None,
            max_downloads: None,
            notes: None,
            internal_notes: None,
            show_creator_name: None,
        }
    }
}

/// Update download share request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDownloadShareRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<ObjectExpiration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_downloads: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,
    /// Remove the download cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_max_downloads: Option<bool>,
}

/// An upload share collecting files from external senders
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadShare {
    pub id: i64,
    pub target_id: i64,
    pub access_key: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: UserInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<UserInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<DateTime<Utc>>,
    pub cnt_files: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_slots: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i64>,
    pub is_protected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_uploaded_files: Option<bool>,
}

impl UploadShare {
    /// Public URL senders open in a browser
    pub fn public_url(&self, base_url: &str) -> String {
        format!(
            "{}/public/upload-shares/{}",
            base_url.trim_end_matches('/'),
            percent_encode(self.access_key.as_bytes(), PATH_SEGMENT_SET)
        )
    }
}

/// Upload share list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadShareList {
    pub range: Range,
    pub items: Vec<UploadShare>,
}

/// Create upload share request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUploadShareRequest {
    pub target_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<ObjectExpiration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_slots: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_uploaded_files: Option<bool>,
}

impl CreateUploadShareRequest {
    pub fn new(target_id: i64, name: impl Into<String>) -> Self {
        Self {
            target_id,
            name: name.into(),
            password: None,
            expiration: None,
            max_slots: None,
            max_size: None,
            notes: None,
            internal_notes: None,
            show_uploaded_files: None,
        }
    }
}

/// Update upload share request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUploadShareRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<ObjectExpiration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_slots: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,
}

/// Request to notify recipients of a share by email
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareEmailRequest {
    pub recipients: Vec<String>,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_language: Option<String>,
}

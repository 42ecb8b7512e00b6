use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::{Range, UserInfo};

/// Report execution mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Single,
    Periodic,
}

/// Report content category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportSubType {
    General,
    UserAudit,
    PermissionAudit,
    #[serde(other)]
    Unknown,
}

/// Output format of a generated report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    CsvPlain,
    CsvSemicolon,
    Pdf,
    #[serde(other)]
    Unknown,
}

/// Server-side execution state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportState {
    Waiting,
    Processing,
    Finished,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Time and scope constraints for a report run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// A report job
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub sub_type: ReportSubType,
    pub state: ReportState,
    pub formats: Vec<ReportFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ReportFilter>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_error: Option<String>,
}

/// Report list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportList {
    pub range: Range,
    pub items: Vec<Report>,
}

/// Create report request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub sub_type: ReportSubType,
    pub formats: Vec<ReportFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ReportFilter>,
}

impl CreateReportRequest {
    pub fn new(name: impl Into<String>, sub_type: ReportSubType) -> Self {
        Self {
            name: name.into(),
            report_type: ReportType::Single,
            sub_type,
            formats: vec![ReportFormat::CsvPlain],
            filter: None,
        }
    }
}

/// Report ids to delete in one call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteReportsRequest {
    pub ids: Vec<i64>,
}

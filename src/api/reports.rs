use async_trait::async_trait;

use crate::client::{Client, RequestOptions};
use crate::error::ApiResult;
use crate::models::common::ListParams;
use crate::models::reports::*;

/// Reporting API methods
#[async_trait]
pub trait ReportsApi {
    /// List report jobs
    async fn list_reports(&self, params: &ListParams) -> ApiResult<ReportList>;

    /// Create a report job
    async fn create_report(&self, request: &CreateReportRequest) -> ApiResult<Report>;

    /// Delete a report job
    async fn delete_report(&self, report_id: i64) -> ApiResult<()>;

    /// Delete several report jobs in one call
    async fn delete_reports(&self, request: &DeleteReportsRequest) -> ApiResult<()>;
}

#[async_trait]
impl ReportsApi for Client {
    async fn list_reports(&self, params: &ListParams) -> ApiResult<ReportList> {
        self.get(
            &format!("/reports{}", params.to_query()),
            RequestOptions::new().reports(),
        )
        .await
    }

    async fn create_report(&self, request: &CreateReportRequest) -> ApiResult<Report> {
        self.post("/reports", request, RequestOptions::new().reports())
            .await
    }

    async fn delete_report(&self, report_id: i64) -> ApiResult<()> {
        self.delete(
            &format!("/reports/{}", report_id),
            RequestOptions::new().reports(),
        )
        .await
    }

    async fn delete_reports(&self, request: &DeleteReportsRequest) -> ApiResult<()> {
        self.delete_with_body("/reports", request, RequestOptions::new().reports())
            .await
    }
}

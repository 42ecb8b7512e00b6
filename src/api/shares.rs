use async_trait::async_trait;

use crate::client::{Client, RequestOptions};
use crate::error::ApiResult;
use crate::models::common::ListParams;
use crate::models::shares::*;

/// Share API methods, covering download and upload share families
#[async_trait]
pub trait SharesApi {
    /// List download shares
    async fn list_download_shares(&self, params: &ListParams) -> ApiResult<DownloadShareList>;

    /// Create a download share for a node
    async fn create_download_share(
        &self,
        request: &CreateDownloadShareRequest,
    ) -> ApiResult<DownloadShare>;

    /// Get a download share by id
    async fn get_download_share(&self, share_id: i64) -> ApiResult<DownloadShare>;

    /// Update a download share
    async fn update_download_share(
        &self,
        share_id: i64,
        request: &UpdateDownloadShareRequest,
    ) -> ApiResult<DownloadShare>;

    /// Delete a download share
    async fn delete_download_share(&self, share_id: i64) -> ApiResult<()>;

    /// Send a download share link by email
    async fn send_download_share_email(
        &self,
        share_id: i64,
        request: &ShareEmailRequest,
    ) -> ApiResult<()>;

    /// List upload shares
    async fn list_upload_shares(&self, params: &ListParams) -> ApiResult<UploadShareList>;

    /// Create an upload share targeting a container node
    async fn create_upload_share(
        &self,
        request: &CreateUploadShareRequest,
    ) -> ApiResult<UploadShare>;

    /// Get an upload share by id
    async fn get_upload_share(&self, share_id: i64) -> ApiResult<UploadShare>;

    /// Update an upload share
    async fn update_upload_share(
        &self,
        share_id: i64,
        request: &UpdateUploadShareRequest,
    ) -> ApiResult<UploadShare>;

    /// Delete an upload share
    async fn delete_upload_share(&self, share_id: i64) -> ApiResult<()>;

    /// Send an upload share link by email
    async fn send_upload_share_email(
        &self,
        share_id: i64,
        request: &ShareEmailRequest,
    ) -> ApiResult<()>;
}

#[async_trait]
impl SharesApi for Client {
    async fn list_download_shares(&self, params: &ListParams) -> ApiResult<DownloadShareList> {
        self.get(
            &format!("/shares/downloads{}", params.to_query()),
            RequestOptions::new(),
        )
        .await
    }

    async fn create_download_share(
        &self,
        request: &CreateDownloadShareRequest,
    ) -> ApiResult<DownloadShare> {
        self.post("/shares/downloads", request, RequestOptions::new())
            .await
    }

    async fn get_download_share(&self, share_id: i64) -> ApiResult<DownloadShare> {
        self.get(
            &format!("/shares/downloads/{}", share_id),
            RequestOptions::new(),
        )
        .await
    }

    async fn update_download_share(
        &self,
        share_id: i64,
        request: &UpdateDownloadShareRequest,
    ) -> ApiResult<DownloadShare> {
        self.put(
            &format!("/shares/downloads/{}", share_id),
            request,
            RequestOptions::new(),
        )
        .await
    }

    async fn delete_download_share(&self, share_id: i64) -> ApiResult<()> {
        self.delete(
            &format!("/shares/downloads/{}", share_id),
            RequestOptions::new(),
        )
        .await
    }

    async fn send_download_share_email(
        &self,
        share_id: i64,
        request: &ShareEmailRequest,
    ) -> ApiResult<()> {
        self.post(
            &format!("/shares/downloads/{}/email", share_id),
            request,
            RequestOptions::new(),
        )
        .await
    }

    async fn list_upload_shares(&self, params: &ListParams) -> ApiResult<UploadShareList> {
        self.get(
            &format!("/shares/uploads{}", params.to_query()),
            RequestOptions::new(),
        )
        .await
    }

    async fn create_upload_share(
        &self,
        request: &CreateUploadShareRequest,
    ) -> ApiResult<UploadShare> {
        self.post("/shares/uploads", request, RequestOptions::new())
            .await
    }

    async fn get_upload_share(&self, share_id: i64) -> ApiResult<UploadShare> {
        self.get(
            &format!("/shares/uploads/{}", share_id),
            RequestOptions::new(),
        )
        .await
    }

    async fn update_upload_share(
        &self,
        share_id: i64,
        request: &UpdateUploadShareRequest,
    ) -> ApiResult<UploadShare> {
        self.put(
            &format!("/shares/uploads/{}", share_id),
            request,
            RequestOptions::new(),
        )
        .await
    }

    async fn delete_upload_share(&self, share_id: i64) -> ApiResult<()> {
        self.delete(
            &format!("/shares/uploads/{}", share_id),
            RequestOptions::new(),
        )
        .await
    }

    async fn send_upload_share_email(
        &self,
        share_id: i64,
        request: &ShareEmailRequest,
    ) -> ApiResult<()> {
        self.post(
            &format!("/shares/uploads/{}/email", share_id),
            request,
            RequestOptions::new(),
        )
        .await
    }
}

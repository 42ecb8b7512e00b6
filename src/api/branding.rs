use async_trait::async_trait;
use bytes::Bytes;

use crate::client::{Client, RequestOptions};
use crate::error::ApiResult;
use crate::models::branding::*;

/// Branding API methods
#[async_trait]
pub trait BrandingApi {
    /// Get the full branding configuration
    async fn get_branding(&self) -> ApiResult<BrandingConfig>;

    /// Update the branding configuration
    async fn update_branding(&self, request: &UpdateBrandingRequest) -> ApiResult<BrandingConfig>;

    /// Get the branding subset served without authentication
    async fn get_public_branding(&self) -> ApiResult<PublicBranding>;

    /// Download one branding image variant as raw bytes
    async fn get_branding_image(&self, kind: ImageKind, size: ImageSize)
        -> ApiResult<BrandingImage>;

    /// Upload an image for a later branding update
    async fn upload_branding_image(&self, kind: ImageKind, data: Bytes) -> ApiResult<ImageUpload>;
}

#[async_trait]
impl BrandingApi for Client {
    async fn get_branding(&self) -> ApiResult<BrandingConfig> {
        self.get("/branding", RequestOptions::new().branding()).await
    }

    async fn update_branding(&self, request: &UpdateBrandingRequest) -> ApiResult<BrandingConfig> {
        self.put("/branding", request, RequestOptions::new().branding())
            .await
    }

    async fn get_public_branding(&self) -> ApiResult<PublicBranding> {
        self.get(
            "/public/branding",
            RequestOptions::new().branding().no_credential(),
        )
        .await
    }

    async fn get_branding_image(
        &self,
        kind: ImageKind,
        size: ImageSize,
    ) -> ApiResult<BrandingImage> {
        let query = format!(
            "?type={}&size={}",
            kind.as_query_value(),
            size.as_query_value()
        );
        let (bytes, content_type) = self
            .get_bytes(
                &format!("/branding/image{}", query),
                RequestOptions::new().branding().no_credential(),
            )
            .await?;
        Ok(BrandingImage { bytes, content_type })
    }

    async fn upload_branding_image(&self, kind: ImageKind, data: Bytes) -> ApiResult<ImageUpload> {
        self.post_bytes(
            &format!("/branding/files?type={}", kind.as_query_value()),
            data,
            RequestOptions::new().branding(),
        )
        .await
    }
}

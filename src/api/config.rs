use async_trait::async_trait;

use crate::client::{Client, RequestOptions};
use crate::error::ApiResult;
use crate::models::config::*;

/// System configuration API methods. All endpoints are read-only.
#[async_trait]
pub trait ConfigApi {
    /// Get general feature switches
    async fn get_general_settings(&self) -> ApiResult<GeneralSettings>;

    /// Get infrastructure properties
    async fn get_infrastructure_properties(&self) -> ApiResult<InfrastructureProperties>;

    /// Get defaults applied to new resources
    async fn get_system_defaults(&self) -> ApiResult<SystemDefaults>;

    /// Get password policies
    async fn get_password_policies(&self) -> ApiResult<PasswordPoliciesConfig>;

    /// Get classification policies
    async fn get_classification_policies(&self) -> ApiResult<ClassificationPoliciesConfig>;
}

#[async_trait]
impl ConfigApi for Client {
    async fn get_general_settings(&self) -> ApiResult<GeneralSettings> {
        self.get("/config/info/general", RequestOptions::new()).await
    }

    async fn get_infrastructure_properties(&self) -> ApiResult<InfrastructureProperties> {
        self.get("/config/info/infrastructure", RequestOptions::new())
            .await
    }

    async fn get_system_defaults(&self) -> ApiResult<SystemDefaults> {
        self.get("/config/info/defaults", RequestOptions::new()).await
    }

    async fn get_password_policies(&self) -> ApiResult<PasswordPoliciesConfig> {
        self.get("/config/info/policies/passwords", RequestOptions::new())
            .await
    }

    async fn get_classification_policies(&self) -> ApiResult<ClassificationPoliciesConfig> {
        self.get("/config/info/policies/classifications", RequestOptions::new())
            .await
    }
}

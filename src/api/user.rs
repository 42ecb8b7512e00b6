use async_trait::async_trait;

use crate::client::{Client, RequestOptions};
use crate::error::ApiResult;
use crate::models::user::*;

/// Account API methods
#[async_trait]
pub trait UserApi {
    /// Get the authenticated user's account
    async fn get_account_info(&self) -> ApiResult<UserAccount>;

    /// Update the authenticated user's account
    async fn update_account(&self, request: &UpdateAccountRequest) -> ApiResult<UserAccount>;
}

#[async_trait]
impl UserApi for Client {
    async fn get_account_info(&self) -> ApiResult<UserAccount> {
        self.get("/user/account", RequestOptions::new()).await
    }

    async fn update_account(&self, request: &UpdateAccountRequest) -> ApiResult<UserAccount> {
        self.put("/user/account", request, RequestOptions::new()).await
    }
}

use async_trait::async_trait;

use crate::client::{Client, RequestOptions};
use crate::error::ApiResult;
use crate::models::common::ListParams;
use crate::models::groups::*;

/// Group API methods
#[async_trait]
pub trait GroupsApi {
    /// List groups
    async fn list_groups(&self, params: &ListParams) -> ApiResult<GroupList>;

    /// Create a new group
    async fn create_group(&self, request: &CreateGroupRequest) -> ApiResult<Group>;

    /// Get a group by id
    async fn get_group(&self, group_id: i64) -> ApiResult<Group>;

    /// Update a group
    async fn update_group(&self, group_id: i64, request: &UpdateGroupRequest) -> ApiResult<Group>;

    /// Delete a group
    async fn delete_group(&self, group_id: i64) -> ApiResult<()>;

    /// List users of a group
    async fn get_group_users(&self, group_id: i64, params: &ListParams)
        -> ApiResult<GroupUserList>;

    /// Add users to a group
    async fn add_group_users(
        &self,
        group_id: i64,
        request: &ChangeGroupMembersRequest,
    ) -> ApiResult<Group>;

    /// Remove users from a group
    async fn remove_group_users(
        &self,
        group_id: i64,
        request: &ChangeGroupMembersRequest,
    ) -> ApiResult<Group>;
}

#[async_trait]
impl GroupsApi for Client {
    async fn list_groups(&self, params: &ListParams) -> ApiResult<GroupList> {
        self.get(&format!("/groups{}", params.to_query()), RequestOptions::new())
            .await
    }

    async fn create_group(&self, request: &CreateGroupRequest) -> ApiResult<Group> {
        self.post("/groups", request, RequestOptions::new()).await
    }

    async fn get_group(&self, group_id: i64) -> ApiResult<Group> {
        self.get(&format!("/groups/{}", group_id), RequestOptions::new())
            .await
    }

    async fn update_group(&self, group_id: i64, request: &UpdateGroupRequest) -> ApiResult<Group> {
        self.put(&format!("/groups/{}", group_id), request, RequestOptions::new())
            .await
    }

    async fn delete_group(&self, group_id: i64) -> ApiResult<()> {
        self.delete(&format!("/groups/{}", group_id), RequestOptions::new())
            .await
    }

    async fn get_group_users(
        &self,
        group_id: i64,
        params: &ListParams,
    ) -> ApiResult<GroupUserList> {
        self.get(
            &format!("/groups/{}/users{}", group_id, params.to_query()),
            RequestOptions::new(),
        )
        .await
    }

    async fn add_group_users(
        &self,
        group_id: i64,
        request: &ChangeGroupMembersRequest,
    ) -> ApiResult<Group> {
        self.post(
            &format!("/groups/{}/users", group_id),
            request,
            RequestOptions::new(),
        )
        .await
    }

    async fn remove_group_users(
        &self,
        group_id: i64,
        request: &ChangeGroupMembersRequest,
    ) -> ApiResult<Group> {
        self.delete_with_body(
            &format!("/groups/{}/users", group_id),
            request,
            RequestOptions::new(),
        )
        .await
    }
}

//! End-to-end adapter flows against a mock server.

use filegate_api::api::{BrandingApi, GroupsApi, ReportsApi, SharesApi};
use filegate_api::models::branding::{ImageKind, ImageSize};
use filegate_api::models::common::{filter_expr, filter_op, ListParams};
use filegate_api::models::groups::CreateGroupRequest;
use filegate_api::models::reports::{CreateReportRequest, ReportState, ReportSubType};
use filegate_api::models::shares::CreateDownloadShareRequest;
use filegate_api::{ApiError, Client, ClientConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn connected_client(server: &MockServer) -> Client {
    let config = ClientConfig::new(server.uri()).unwrap();
    let client = Client::new(config);
    client.set_tokens("integration-token", None).await;
    client
}

fn group_json(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "createdAt": "2026-05-01T12:00:00Z",
        "createdBy": {"id": 1, "userName": "admin"},
        "cntUsers": 0
    })
}

fn group_list_json(groups: &[serde_json::Value]) -> serde_json::Value {
    serde_json::json!({
        "range": {"offset": 0, "limit": 100, "total": groups.len()},
        "items": groups
    })
}

#[tokio::test]
async fn list_groups_round_trips_fixture_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/groups"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(group_list_json(&[group_json(7, "finance"), group_json(9, "ops")])),
        )
        .mount(&server)
        .await;

    let client = connected_client(&server).await;
    let groups = client.list_groups(&ListParams::new()).await.unwrap();

    assert_eq!(groups.range.total, 2);
    assert_eq!(groups.items.len(), 2);
    assert_eq!(groups.items[0].id, 7);
    assert_eq!(groups.items[0].name, "finance");
    assert_eq!(groups.items[0].created_by.user_name.as_deref(), Some("admin"));
    assert_eq!(groups.items[1].id, 9);
}

#[tokio::test]
async fn deleted_group_disappears_from_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/groups"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(group_list_json(&[group_json(1, "finance"), group_json(2, "ops")])),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v4/groups/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v4/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(group_list_json(&[group_json(2, "ops")])))
        .mount(&server)
        .await;

    let client = connected_client(&server).await;

    let before = client.list_groups(&ListParams::new()).await.unwrap();
    assert!(before.items.iter().any(|g| g.id == 1));

    client.delete_group(1).await.unwrap();

    let after = client.list_groups(&ListParams::new()).await.unwrap();
    assert!(after.items.iter().all(|g| g.id != 1));
    assert!(after.items.iter().any(|g| g.id == 2));
}

#[tokio::test]
async fn duplicate_group_name_is_a_conflict() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v4/groups"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(serde_json::json!({"message": "A group with this name already exists"})),
        )
        .mount(&server)
        .await;

    let client = connected_client(&server).await;
    let err = client
        .create_group(&CreateGroupRequest::new("finance"))
        .await
        .unwrap_err();

    assert!(err.is_conflict());
    assert!(err.to_string().contains("already exists"));
}

#[tokio::test]
async fn missing_group_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/groups/999"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "Group not found"})),
        )
        .mount(&server)
        .await;

    let client = connected_client(&server).await;
    let err = client.get_group(999).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn filter_values_reach_the_server_decoded() {
    let server = MockServer::start().await;

    // wiremock compares against the decoded query value, so a match proves the
    // reserved characters survived the encode/decode round trip.
    Mock::given(method("GET"))
        .and(path("/api/v4/groups"))
        .and(query_param("filter", "name:cn:spam&eggs"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(group_list_json(&[])))
        .expect(1)
        .mount(&server)
        .await;

    let client = connected_client(&server).await;
    let params = ListParams::new()
        .with_limit(10)
        .with_filter(filter_expr("name", filter_op::CONTAINS, "spam&eggs"));
    let groups = client.list_groups(&params).await.unwrap();
    assert!(groups.items.is_empty());
}

#[tokio::test]
async fn download_share_create_and_email_flow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v4/shares/downloads"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 31,
            "nodeId": 500,
            "accessKey": "k31",
            "createdAt": "2026-05-02T09:00:00Z",
            "createdBy": {"id": 1},
            "cntDownloads": 0,
            "isProtected": true
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v4/shares/downloads/31/email"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = connected_client(&server).await;

    let mut request = CreateDownloadShareRequest::new(500);
    request.password = Some("s3cret!".to_string());
    let share = client.create_download_share(&request).await.unwrap();
    assert_eq!(share.id, 31);
    assert!(share.is_protected);
    assert_eq!(
        share.public_url(client.base_url()),
        format!("{}/public/download-shares/k31", server.uri())
    );

    client
        .send_download_share_email(
            share.id,
            &filegate_api::models::shares::ShareEmailRequest {
                recipients: vec!["mia@example.com".to_string()],
                body: "Here is the file".to_string(),
                receiver_language: None,
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn report_lifecycle_uses_reports_prefix() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reports/api/v1/reports"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 5,
            "name": "q2-audit",
            "type": "single",
            "subType": "user-audit",
            "state": "waiting",
            "formats": ["csv-plain"],
            "createdAt": "2026-05-03T10:00:00Z"
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/reports/api/v1/reports"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = connected_client(&server).await;

    let report = client
        .create_report(&CreateReportRequest::new("q2-audit", ReportSubType::UserAudit))
        .await
        .unwrap();
    assert_eq!(report.state, ReportState::Waiting);

    client
        .delete_reports(&filegate_api::models::reports::DeleteReportsRequest { ids: vec![report.id] })
        .await
        .unwrap();
}

#[tokio::test]
async fn branding_image_returns_bytes_and_content_type() {
    let server = MockServer::start().await;

    let png = vec![0x89u8, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    Mock::given(method("GET"))
        .and(path("/branding/api/v1/branding/image"))
        .and(query_param("type", "logo"))
        .and(query_param("size", "large"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(png.clone(), "image/png"))
        .mount(&server)
        .await;

    // Public endpoint: no session required
    let client = Client::new(ClientConfig::new(server.uri()).unwrap());
    let image = client
        .get_branding_image(ImageKind::Logo, ImageSize::Large)
        .await
        .unwrap();

    assert_eq!(image.bytes.as_ref(), png.as_slice());
    assert_eq!(image.content_type.as_deref(), Some("image/png"));
}

#[tokio::test]
async fn transport_failure_is_a_connection_error() {
    // Nothing listens here; the request fails before any status exists
    let client = Client::new(ClientConfig::new("http://127.0.0.1:1").unwrap());
    client.set_tokens("t", None).await;

    let err = client.list_groups(&ListParams::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::Connection(_)));
}

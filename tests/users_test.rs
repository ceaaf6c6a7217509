//! Integration tests for user and group listings.

mod common;

use common::{logged_in_client, ACCOUNT_ID};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_active_users_sends_status_filter() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("/restapi/v2/accounts/{}/users", ACCOUNT_ID)))
        .and(query_param("status", "Active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": [
                {"userId": "u-1", "userName": "Ada Lovelace"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let users = client.users().list(true).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users["u-1"], "Ada Lovelace");
}

#[tokio::test]
async fn test_list_all_users_sends_no_filter() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("/restapi/v2/accounts/{}/users", ACCOUNT_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": [
                {"userId": "u-1", "userName": "Ada Lovelace"},
                {"userId": "u-2", "userName": "Closed Account"}
            ]
        })))
        .mount(&server)
        .await;

    let users = client.users().list(false).await.unwrap();
    assert_eq!(users.len(), 2);

    let listing = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .find(|r| r.url.path().ends_with("/users"))
        .unwrap();
    assert!(listing.url.query().map_or(true, |q| !q.contains("status")));
}

#[tokio::test]
async fn test_groups_for_user() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/restapi/v2/accounts/{}/users/u-1",
            ACCOUNT_ID
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "userName": "Ada Lovelace",
            "groupList": [
                {"groupId": "g-1", "groupName": "Administrators"},
                {"groupId": "g-2", "groupName": "Everyone"}
            ]
        })))
        .mount(&server)
        .await;

    let groups = client.users().groups("u-1").await.unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups["g-1"], "Administrators");
    assert_eq!(groups["g-2"], "Everyone");
}

//! Integration tests for response normalization over real HTTP.
//!
//! Covers status-code dispatch, pagination hints, request ids, and
//! transport failures against a local stub server.

mod common;

use common::{setup, TEST_AUTH};
use fd_api::{AgentFilter, ApiError, FreshdeskClient};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

// ---- Success paths ----

#[tokio::test]
async fn success_without_link_is_last_page_and_empty_request_id() {
    let (server, client) = setup().await;
    let res = json!([{"id": 1, "label": "Search a requester", "type": "default_requester"}]);

    Mock::given(method("GET"))
        .and(path("/api/v2/ticket_fields"))
        .and(header("authorization", TEST_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(&res))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.list_all_ticket_fields(None).await.unwrap();
    assert_eq!(resp.data, Some(res));
    assert!(resp.extra.page_is_last);
    assert_eq!(resp.extra.request_id, "");
}

#[tokio::test]
async fn link_header_marks_more_pages() {
    let (server, client) = setup().await;
    let res = json!([{"id": 22000991607u64, "contact": {"name": "Donna Example"}}]);

    Mock::given(method("GET"))
        .and(path("/api/v2/agents"))
        .and(query_param("page", "12"))
        .and(query_param("per_page", "10"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&res)
                .insert_header(
                    "link",
                    r#"< https://test.freshdesk.com/api/v2/agents?page=13&per_page=10>;rel="next""#,
                )
                .insert_header("x-request-id", "a1b2c3"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let filter = AgentFilter {
        page: Some(12),
        per_page: Some(10),
        ..Default::default()
    };
    let resp = client.list_all_agents(&filter).await.unwrap();
    assert_eq!(resp.data, Some(res));
    assert!(!resp.extra.page_is_last);
    assert_eq!(resp.extra.request_id, "a1b2c3");
    assert_eq!(
        resp.extra.next_page.as_deref(),
        Some("https://test.freshdesk.com/api/v2/agents?page=13&per_page=10")
    );
}

#[tokio::test]
async fn no_content_is_empty_success() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/tickets/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.delete_ticket(1).await.unwrap();
    assert!(resp.is_empty());
    assert!(resp.extra.page_is_last);
}

// ---- Error paths ----

#[tokio::test]
async fn bad_request_without_description_uses_generic_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/companies/2139"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"msg": "err 123"})))
        .mount(&server)
        .await;

    let err = client.get_company(2139).await.unwrap_err();
    let fd = err.freshdesk().expect("expected FreshdeskError");
    assert_eq!(fd.status, 400);
    assert_eq!(fd.message, "Error in Freshdesk's client API");
    assert_eq!(fd.data, json!({"msg": "err 123"}));
    assert_eq!(fd.api_target, "GET /api/v2/companies/2139");
}

#[tokio::test]
async fn not_found_has_fixed_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/contacts/5"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"foo": "bar"}))
                .insert_header("x-request-id", "nf-1"),
        )
        .mount(&server)
        .await;

    let err = client.get_contact(5).await.unwrap_err();
    assert!(err.is_not_found());
    let fd = err.freshdesk().unwrap();
    assert_eq!(fd.message, "The requested entity was not found");
    assert_eq!(fd.data, json!({"foo": "bar"}));
    assert_eq!(fd.request_id, "nf-1");
}

#[tokio::test]
async fn conflict_uses_description_and_target_excludes_query() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/companies"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"description": "X not unique"})),
        )
        .mount(&server)
        .await;

    let err = client
        .create_company(&json!({"name": "Acme"}))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "X not unique");
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.freshdesk().unwrap().api_target, "POST /api/v2/companies");
}

#[tokio::test]
async fn success_status_with_html_body_is_not_json_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/settings/helpdesk"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html>maintenance</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let err = client.get_settings().await.unwrap_err();
    let fd = err.freshdesk().unwrap();
    assert_eq!(fd.message, "Not a JSON response from API");
    assert_eq!(fd.data, json!("<html>maintenance</html>"));
}

#[tokio::test]
async fn rate_limit_exposes_retry_hint_without_retrying() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/roles"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"description": "Too many requests"}))
                .insert_header("retry-after", "30"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client.list_all_roles().await.unwrap_err();
    let fd = err.freshdesk().unwrap();
    assert!(fd.is_rate_limited());
    assert_eq!(fd.retry_after, Some(30));
    assert_eq!(fd.message, "Too many requests");
}

#[tokio::test]
async fn server_error_is_never_retried() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/111"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.get_ticket(111).await.unwrap_err();
    let fd = err.freshdesk().unwrap();
    assert_eq!(fd.status, 503);
    assert_eq!(fd.data, json!("unavailable"));
}

// ---- Transport failures ----

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = FreshdeskClient::from_api_key(&format!("http://{addr}"), "TESTKEY").unwrap();
    let err = client.get_ticket(111).await.unwrap_err();

    match &err {
        ApiError::Transport(e) => assert!(e.is_connect()),
        other => panic!("expected transport error, got {other:?}"),
    }
    assert!(err.freshdesk().is_none());
}

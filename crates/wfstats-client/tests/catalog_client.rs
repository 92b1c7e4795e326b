//! Integration tests for CatalogClient.
//!
//! Uses wiremock for HTTP mocking. Covers the success path, status mapping
//! and the catalog → report table hand-off.

use wfstats_client::{CatalogClient, ClientError, USER_AGENT_VALUE};
use wfstats_core::{build_table, CUSTOM_ENTRIES, EXCLUDED_NAMES};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CATALOG: &str = include_str!("fixtures/catalog.json");

fn client(mock_server: &MockServer) -> CatalogClient {
    CatalogClient::new(&format!("{}/warframes", mock_server.uri()), 5)
        .expect("failed to create client")
}

#[tokio::test]
async fn test_fetch_catalog_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/warframes"))
        .and(header("user-agent", USER_AGENT_VALUE))
        .respond_with(ResponseTemplate::new(200).set_body_string(CATALOG))
        .expect(1)
        .mount(&mock_server)
        .await;

    let records = client(&mock_server).fetch().await.expect("fetch failed");
    assert_eq!(records.len(), 7);
    assert_eq!(records[1].name, "Hildryn");
    assert_eq!(records[1].sprint_speed, 0.95);
    assert_eq!(records[5].shield, 0.0, "absent field reads as zero");
}

#[tokio::test]
async fn test_fetch_catalog_server_error_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/warframes"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).fetch().await;
    match result {
        Err(ClientError::Http {
            status, message, ..
        }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_catalog_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/warframes"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).fetch().await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound { .. }));
    assert_eq!(err.exit_code(), 5);
}

#[tokio::test]
async fn test_fetch_catalog_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/warframes"))
        .respond_with(ResponseTemplate::new(401).set_body_string("missing key"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).fetch().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[tokio::test]
async fn test_fetch_catalog_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/warframes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"a list\"}"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).fetch().await;
    assert!(matches!(result, Err(ClientError::InvalidResponse { .. })));
}

#[tokio::test]
async fn test_fetched_catalog_builds_report() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/warframes"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CATALOG))
        .mount(&mock_server)
        .await;

    let records = client(&mock_server).fetch().await.expect("fetch failed");
    let table = build_table(&records, CUSTOM_ENTRIES, EXCLUDED_NAMES);

    // Archwing and Helminth dropped, second Excalibur dropped, Caliban Prime appended.
    assert_eq!(
        table.names().collect::<Vec<_>>(),
        vec!["Caliban Prime", "Excalibur", "Harrow", "Hildryn", "Inaros"]
    );

    let by_name = |name: &str| table.rows.iter().find(|r| r.name == name).unwrap();
    assert_eq!(by_name("Excalibur").health, 370.0);
    assert_eq!(by_name("Harrow").max_overshields, 2400.0);
    assert_eq!(by_name("Hildryn").shields, 1100.0);
    assert_eq!(by_name("Inaros").health, 750.0);
    assert_eq!(by_name("Inaros").max_overshields, 0.0);
    assert_eq!(by_name("Caliban Prime").energy_at_spawn, 100.0);
    assert_eq!(by_name("Caliban Prime").shields, 100.0);
    assert_eq!(by_name("Caliban Prime").energy_cap, 50.0);

    // Five health values: 370, 370, 470, 275, 750 → median 370.
    assert_eq!(table.median.health, 370.0);
    // Shields: 370, 600, 1100, 0, 100 → median 370.
    assert_eq!(table.median.shields, 370.0);
}

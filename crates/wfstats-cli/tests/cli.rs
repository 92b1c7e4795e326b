//! End-to-end tests of the `wfstats` binary against mocked APIs.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_KEY: &str = include_str!("fixtures/test_key.pem");

fn wfstats() -> Command {
    let mut cmd = Command::cargo_bin("wfstats").unwrap();
    cmd.env_clear().env("RUST_LOG", "warn");
    cmd
}

async fn catalog_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/warframes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "uniqueName": "/Lotus/Powersuits/Excalibur/Excalibur",
                "name": "Excalibur",
                "health": 270,
                "shield": 270,
                "armor": 225,
                "power": 100,
                "sprintSpeed": 1,
                "type": "Warframe"
            },
            {
                "uniqueName": "/Lotus/Powersuits/Devil/Helminth",
                "name": "Helminth",
                "type": "Warframe"
            }
        ])))
        .mount(&server)
        .await;
    server
}

#[test]
fn test_version() {
    wfstats()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_api_url_is_usage_error() {
    wfstats()
        .args(["run", "--dry-run"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--api-url"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dry_run_text() {
    let server = catalog_server().await;

    wfstats()
        .env("API_URL", format!("{}/warframes", server.uri()))
        .args(["run", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Excalibur"))
        .stdout(predicate::str::contains("Caliban Prime"))
        .stdout(predicate::str::contains("Helminth").not())
        .stdout(predicate::str::contains("2 frames"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_catalog_error_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    wfstats()
        .args(["run", "--dry-run", "--api-url"])
        .arg(format!("{}/warframes", server.uri()))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("fatal:"));
}

#[test]
fn test_unreadable_credentials_exit_code() {
    wfstats()
        .args([
            "run",
            "--api-url",
            "http://127.0.0.1:9/warframes",
            "--credentials",
            "/nonexistent/wfstats-key.json",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("credentials error"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_writes_spreadsheet() {
    let server = catalog_server().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "ya29.cli",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [{ "id": "sheet-abc" }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/spreadsheets/sheet-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sheets": [{ "properties": { "sheetId": 0, "title": "Sheet1", "index": 0 } }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path_regex(r"^/v4/spreadsheets/sheet-abc/values/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/v4/spreadsheets/sheet-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let key_file = tempfile::NamedTempFile::new().unwrap();
    let key = json!({
        "type": "service_account",
        "client_email": "report@wfstats.iam.gserviceaccount.com",
        "private_key": TEST_KEY,
        "token_uri": format!("{}/token", server.uri()),
    });
    std::fs::write(key_file.path(), key.to_string()).unwrap();

    wfstats()
        .env("API_URL", format!("{}/warframes", server.uri()))
        .env("CRED_FILE", key_file.path())
        .env("WFSTATS_SHEETS_URL", format!("{}/v4", server.uri()))
        .env("WFSTATS_DRIVE_URL", format!("{}/drive/v3", server.uri()))
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "wrote 2 frames to spreadsheet sheet-abc",
        ));
}

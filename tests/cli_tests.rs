//! Integration tests for CLI functionality

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Binary with a clean environment
fn logplex_cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("logplex-cli"));
    cmd.env_clear();
    cmd
}

/// Binary configured against a mock endpoint
fn logplex_cli_at(endpoint: &str) -> Command {
    let mut cmd = logplex_cli();
    cmd.env("LOGPLEX_ENDPOINT", endpoint)
        .env("LOGPLEX_AUTH_KEY", "it-key")
        .arg("--batch");
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).expect("stdout json")
}

#[test]
fn test_help_flag() {
    logplex_cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("channel"))
        .stdout(predicate::str::contains("drain"));
}

#[test]
fn test_version_flag() {
    logplex_cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("logplex-cli"));
}

#[test]
fn test_usage_error_exits_non_zero() {
    logplex_cli()
        .args(["channel", "create", "only-a-name"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_auth_key() {
    logplex_cli()
        .env("LOGPLEX_ENDPOINT", "http://127.0.0.1:1")
        .args(["channel", "destroy", "42"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("LOGPLEX_AUTH_KEY is not set"));
}

#[test]
fn test_missing_endpoint_and_cloud() {
    logplex_cli()
        .env("LOGPLEX_AUTH_KEY", "it-key")
        .args(["drain", "remove", "1", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Either $HEROKU_CLOUD or $LOGPLEX_ENDPOINT must be set",
        ));
}

#[test]
fn test_invalid_bool_setting() {
    logplex_cli()
        .env("LOGPLEX_ENDPOINT", "http://127.0.0.1:1")
        .env("LOGPLEX_AUTH_KEY", "it-key")
        .env("SSL_INSECURE", "maybe")
        .args(["channel", "destroy", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SSL_INSECURE"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_channel_create_prints_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/channels"))
        .and(header("authorization", "Basic it-key"))
        .and(body_json(serde_json::json!({
            "name": "my-app",
            "tokens": ["t1"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "channel_id": 42,
            "tokens": { "t1": "abc" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = logplex_cli_at(&mock_server.uri())
        .args(["channel", "create", "my-app", "t1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\"channel_id\":42,\"tokens\":{\"t1\":\"abc\"}}\n"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_channel_destroy_prints_empty_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/channels/42"))
        .and(header("authorization", "Basic it-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = logplex_cli_at(&mock_server.uri())
        .args(["channel", "destroy", "42"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output), serde_json::json!({}));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_drain_add_prints_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/channels/42/drains"))
        .and(header("authorization", "Basic it-key"))
        .and(body_json(serde_json::json!({ "url": "syslog://sink.example.com:514" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 7,
            "token": "d.seven",
            "url": "syslog://sink.example.com:514"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = logplex_cli_at(&mock_server.uri())
        .args(["drain", "add", "42", "syslog://sink.example.com:514"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["id"], 7);
    assert_eq!(value["token"], "d.seven");
    assert_eq!(value["url"], "syslog://sink.example.com:514");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_drain_remove_prints_empty_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/channels/42/drains/7"))
        .and(header("authorization", "Basic it-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = logplex_cli_at(&mock_server.uri())
        .args(["drain", "remove", "42", "7"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_json(&output), serde_json::json!({}));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_not_found_reports_status_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/channels/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let output = logplex_cli_at(&mock_server.uri())
        .args(["channel", "destroy", "99"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("404 Not Found"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_server_error_reports_status_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/channels/42/drains"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let output = logplex_cli_at(&mock_server.uri())
        .args(["drain", "add", "42", "https://sink.example.com"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("500 Internal Server Error"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_malformed_json_is_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/channels"))
        .respond_with(ResponseTemplate::new(201).set_body_string("{\"channel_id\": "))
        .mount(&mock_server)
        .await;

    let output = logplex_cli_at(&mock_server.uri())
        .args(["channel", "create", "my-app", "t1"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("JSON error"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_debug_flag_logs_to_stderr_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/channels/5"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let output = logplex_cli_at(&mock_server.uri())
        .env("DEBUG", "true")
        .args(["channel", "destroy", "5"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_json(&output), serde_json::json!({}));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config =>"));
    assert!(!stderr.contains("it-key"));
}

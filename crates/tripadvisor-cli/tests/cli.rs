use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// `tripcli` isolated from the user's environment and config file
fn tripcli(config: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("tripcli");
    cmd.env_remove("TRIPADVISOR_API_KEY")
        .env_remove("TRIPADVISOR_BASE_URL")
        .env_remove("RUST_LOG")
        .env("TRIPCLI_CONFIG", config)
        .arg("--no-color");
    cmd
}

fn config_file() -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    (dir, path)
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_lists_commands() {
    let (_dir, config) = config_file();
    tripcli(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("nearby"))
        .stdout(predicate::str::contains("details"))
        .stdout(predicate::str::contains("reviews"))
        .stdout(predicate::str::contains("photos"));
}

#[test]
fn test_version_flag() {
    let (_dir, config) = config_file();
    tripcli(&config)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tripcli"));
}

#[test]
fn test_missing_api_key_is_explained() {
    let (_dir, config) = config_file();
    tripcli(&config)
        .args(["search", "Paris"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key required"));
}

#[test]
fn test_invalid_category_rejected() {
    let (_dir, config) = config_file();
    tripcli(&config)
        .args(["--api-key", "k", "search", "Paris", "--category", "museums"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("museums"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_set_then_show_masks_key() {
    let (_dir, config) = config_file();

    tripcli(&config)
        .args(["config", "set", "api_key", "0123456789abcdef"])
        .assert()
        .success();
    tripcli(&config)
        .args(["config", "set", "language", "fr"])
        .assert()
        .success();

    tripcli(&config)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0123...cdef"))
        .stdout(predicate::str::contains("\"language\": \"fr\""))
        .stdout(predicate::str::contains("0123456789abcdef").not());
}

#[test]
fn test_config_path_honours_override() {
    let (_dir, config) = config_file();
    tripcli(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(config.to_string_lossy().as_ref()));
}

#[test]
fn test_config_unknown_key() {
    let (_dir, config) = config_file();
    tripcli(&config)
        .args(["config", "set", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

// ============================================================================
// API Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_search_uses_config_file_settings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/location/search"))
        .and(query_param("key", "file-key"))
        .and(query_param("searchQuery", "Louvre"))
        .and(query_param("category", "attractions"))
        .and(query_param("language", "fr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "location_id": "188757",
                "name": "Musée du Louvre",
                "address_obj": {"city": "Paris", "country": "France"}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, config) = config_file();
    std::fs::write(&config, "api_key = \"file-key\"\nlanguage = \"fr\"\n").unwrap();

    tripcli(&config)
        .args(["--base-url", server.uri().as_str(), "-o", "json"])
        .args(["search", "Louvre", "--category", "attractions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Musée du Louvre"))
        .stdout(predicate::str::contains("\"location_id\": \"188757\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_flag_key_beats_config_file() {
    let server = MockServer::start().await;
    Mock::given(path("/location/60745/details"))
        .and(query_param("key", "flag-key"))
        .and(query_param("currency", "EUR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "location_id": 60745,
            "name": "Eiffel Tower",
            "rating": "4.6",
            "num_reviews": "140000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, config) = config_file();
    std::fs::write(&config, "api_key = \"file-key\"\n").unwrap();

    tripcli(&config)
        .args(["--api-key", "flag-key", "--base-url", server.uri().as_str()])
        .args(["details", "60745", "--currency", "EUR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Eiffel Tower"))
        .stdout(predicate::str::contains("4.6"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_rejection_is_reported() {
    let server = MockServer::start().await;
    Mock::given(path("/location/1/reviews"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "Message": "User is not authorized to access this resource"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, config) = config_file();

    tripcli(&config)
        .args(["--api-key", "k", "--base-url", server.uri().as_str()])
        .args(["reviews", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not authorized"));
}

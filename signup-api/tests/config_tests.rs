use pretty_assertions::assert_eq;
use signup_api::ApiConfig;
use std::time::Duration;

#[test]
fn api_config_default() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.base_url, "https://jsonplaceholder.typicode.com");
    assert_eq!(cfg.accounts_path, "/users");
    assert_eq!(cfg.timeout_secs, 30);
    assert_eq!(cfg.accounts_url(), "https://jsonplaceholder.typicode.com/users");
}

#[test]
fn accounts_url_tolerates_trailing_slash() {
    let cfg = ApiConfig::with_base_url("http://127.0.0.1:8080/");
    assert_eq!(cfg.accounts_url(), "http://127.0.0.1:8080/users");
}

#[test]
fn accounts_url_without_leading_slash_on_path() {
    let cfg = ApiConfig {
        accounts_path: "api/accounts".to_string(),
        ..ApiConfig::with_base_url("http://directory.local")
    };
    assert_eq!(cfg.accounts_url(), "http://directory.local/api/accounts");
}

#[test]
fn timeout_duration() {
    let cfg = ApiConfig {
        timeout_secs: 5,
        ..Default::default()
    };
    assert_eq!(cfg.timeout(), Duration::from_secs(5));
}

#[test]
fn api_config_partial_json_uses_defaults() {
    let cfg: ApiConfig = serde_json::from_str(r#"{"base_url": "http://localhost:9000"}"#).unwrap();
    assert_eq!(cfg.base_url, "http://localhost:9000");
    assert_eq!(cfg.accounts_path, "/users");
    assert_eq!(cfg.timeout_secs, 30);
}

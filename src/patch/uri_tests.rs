//! Tests for absolute URI validation.

use super::{PatchError, validate_uri};

#[test]
fn accepts_http_with_port_and_path() {
    let url = validate_uri("http://host.example.com:33333/api/").unwrap();

    assert_eq!(url.scheme(), "http");
    assert_eq!(url.host_str(), Some("host.example.com"));
    assert_eq!(url.port(), Some(33333));
    assert_eq!(url.path(), "/api/");
}

#[test]
fn accepts_https_and_single_label_hosts() {
    assert!(validate_uri("https://gb-dev:33333/api/").is_ok());
    assert!(validate_uri("http://localhost:33333/api/").is_ok());
}

#[test]
fn rejects_plain_text() {
    let err = validate_uri("not a url").unwrap_err();
    assert!(matches!(err, PatchError::InvalidUri { ref value, .. } if value == "not a url"));
}

#[test]
fn rejects_relative_reference() {
    assert!(validate_uri("/api/").is_err());
    assert!(validate_uri("localhost:33333/api/").is_err());
}

#[test]
fn rejects_empty_value() {
    assert!(validate_uri("").is_err());
}

#[test]
fn rejects_uri_without_host() {
    let err = validate_uri("mailto:ops@example.com").unwrap_err();
    assert!(matches!(err, PatchError::InvalidUri { ref reason, .. } if reason == "missing host"));
}

#[test]
fn is_distinct_from_not_found() {
    assert!(!validate_uri("not a url").unwrap_err().is_not_found());
}

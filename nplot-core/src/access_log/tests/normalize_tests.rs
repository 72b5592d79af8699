use crate::access_log::extract::{normalize_endpoint, parse_timestamp};

#[test]
fn protocol_token_and_method_are_stripped() {
    assert_eq!(
        normalize_endpoint("GET /widgets HTTP"),
        Some("/widgets".to_string())
    );
}

#[test]
fn field_without_method_is_kept() {
    assert_eq!(normalize_endpoint("/widgets"), Some("/widgets".to_string()));
}

#[test]
fn whitespace_only_field_is_rejected() {
    assert_eq!(normalize_endpoint(" HTTP "), None);
}

#[test]
fn epoch_zero_parses_to_zero() {
    assert_eq!(parse_timestamp("[01/Jan/1970:00:00:00 +0000]"), Ok(0));
}

#[test]
fn brackets_are_optional() {
    assert_eq!(parse_timestamp("01/Jan/1970:00:00:10 +0000"), Ok(10));
}

#[test]
fn lowercase_protocol_is_not_an_endpoint() {
    assert_eq!(
        normalize_endpoint("get /widgets http"),
        Some("/widgets".to_string())
    );
}

#[test]
fn bare_method_is_rejected() {
    assert_eq!(normalize_endpoint("GET "), None);
}

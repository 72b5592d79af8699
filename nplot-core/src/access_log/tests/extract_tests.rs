use crate::access_log::{ExtractError, ParsedRecord, extract};

fn line(date: &str, request: &str) -> String {
    format!("192.168.1.20 - - [{date}] \"{request}\" 200 612 \"-\" \"curl/8.4.0\"")
}

#[test]
fn extracts_endpoint_and_timestamp() {
    // Arrange
    let raw = line("10/Oct/2023:13:55:36 +0000", "GET /widgets HTTP/1.1");

    // Act
    let record = extract(&raw).unwrap();

    // Assert
    assert_eq!(
        record,
        ParsedRecord {
            endpoint: "/widgets".to_string(),
            timestamp: 1_696_946_136,
        }
    );
}

#[test]
fn path_variables_are_dropped() {
    let raw = line("10/Oct/2023:13:55:36 +0000", "GET /widgets/42 HTTP/1.1");

    let record = extract(&raw).unwrap();

    assert_eq!(record.endpoint, "/widgets");
}

#[test]
fn query_params_are_dropped() {
    let raw = line("10/Oct/2023:13:55:36 +0000", "GET /widgets?x=1 HTTP/1.1");

    let record = extract(&raw).unwrap();

    assert_eq!(record.endpoint, "/widgets");
}

#[test]
fn numeric_segment_terminates_nested_path() {
    let raw = line("10/Oct/2023:13:55:36 +0000", "POST /api/v2/users HTTP/1.1");

    let record = extract(&raw).unwrap();

    assert_eq!(record.endpoint, "/api");
}

#[test]
fn root_path_is_kept() {
    let raw = line("10/Oct/2023:13:55:36 +0000", "GET / HTTP/1.1");

    let record = extract(&raw).unwrap();

    assert_eq!(record.endpoint, "/");
}

#[test]
fn timezone_offset_is_normalized() {
    // Arrange
    let utc = line("10/Oct/2023:13:55:36 +0000", "GET /a HTTP/1.1");
    let east = line("10/Oct/2023:15:55:36 +0200", "GET /a HTTP/1.1");

    // Act
    let utc = extract(&utc).unwrap();
    let east = extract(&east).unwrap();

    // Assert
    assert_eq!(utc.timestamp, east.timestamp);
}

#[test]
fn method_is_matched_case_insensitively() {
    let raw = line("10/Oct/2023:13:55:36 +0000", "get /widgets HTTP/1.1");

    let record = extract(&raw).unwrap();

    assert_eq!(record.endpoint, "/widgets");
}

#[test]
fn missing_separator_is_no_match() {
    let raw = "192.168.1.20 [10/Oct/2023:13:55:36 +0000] \"GET /a HTTP/1.1\" 200 1";

    assert_eq!(extract(raw), Err(ExtractError::NoMatch));
}

#[test]
fn hostname_client_address_is_no_match() {
    let raw = "client.example.com - - [10/Oct/2023:13:55:36 +0000] \"GET /a HTTP/1.1\" 200 1";

    assert_eq!(extract(raw), Err(ExtractError::NoMatch));
}

#[test]
fn empty_line_is_no_match() {
    assert_eq!(extract(""), Err(ExtractError::NoMatch));
}

#[test]
fn dash_request_is_no_match() {
    // Nginx logs "-" when the client closes before sending a request line.
    let raw = "192.168.1.20 - - [10/Oct/2023:13:55:36 +0000] \"-\" 400 0 \"-\" \"-\"";

    assert_eq!(extract(raw), Err(ExtractError::NoMatch));
}

#[test]
fn unparsable_date_is_bad_timestamp() {
    // Arrange
    let raw = line("yesterday at noon", "GET /a HTTP/1.1");

    // Act
    let result = extract(&raw);

    // Assert
    assert_eq!(
        result,
        Err(ExtractError::BadTimestamp {
            raw: "yesterday at noon".to_string()
        })
    );
}

#[test]
fn out_of_range_day_is_bad_timestamp() {
    let raw = line("31/Feb/2023:10:00:00 +0000", "GET /a HTTP/1.1");

    assert!(matches!(
        extract(&raw),
        Err(ExtractError::BadTimestamp { .. })
    ));
}

#[test]
fn lowercase_protocol_keeps_the_path() {
    let raw = line("10/Oct/2023:13:55:36 +0000", "get /widgets http/1.1");

    let record = extract(&raw).unwrap();

    assert_eq!(record.endpoint, "/widgets");
}

#[test]
fn request_without_protocol_is_no_match() {
    // The pattern can only terminate after the method here.
    let raw = line("10/Oct/2023:13:55:36 +0000", "GET /widgets");

    assert_eq!(extract(&raw), Err(ExtractError::NoMatch));
}

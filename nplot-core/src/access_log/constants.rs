/// Matches only up to the endpoint. The request field class is deliberately
/// narrow so path variables and query params terminate the match.
pub const LINE_PATTERN: &str = r#"(?i)^([0-9\.]+)(\s-\s-\s)(\[.*\])(\s")([\-a-zA-Z3.\s/]+)(\s|/|\?)"#;

pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Protocol token removed from the captured request field.
pub const PROTOCOL_TOKEN: &str = "HTTP";

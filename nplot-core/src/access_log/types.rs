use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub endpoint: String,
    /// Seconds since the unix epoch, offset already applied.
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("line does not match the access log layout")]
    NoMatch,

    #[error("invalid timestamp field '{raw}'")]
    BadTimestamp { raw: String },
}

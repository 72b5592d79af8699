//! Access log record extraction.
//!
//! Each line of an Nginx-style access log is reduced to the two fields the
//! series pipeline needs: the endpoint the request hit and the time it
//! happened. Everything after the leading path token (query strings, numeric
//! ids, protocol version) is dropped so that `/widgets/42` and `/widgets?x=1`
//! land under the same key.
//!
//! ```text
//! 10.0.0.1 - - [10/Oct/2023:13:55:36 +0000] "GET /widgets/42 HTTP/1.1" 200 512
//! ^addr    ^sep ^timestamp                   ^request (method + path prefix)
//! ```

mod constants;
mod extract;
#[cfg(test)]
mod tests;
mod types;

pub use extract::extract;
pub use types::{ExtractError, ParsedRecord};

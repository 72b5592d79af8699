//! Per-endpoint hit series.
//!
//! The aggregator owns a single streaming pass over the log:
//!
//! raw line
//! extract
//! ParsedRecord
//! SeriesAggregator (hit count, time range, timestamps per endpoint)
//! finalize
//! BucketPlan + SeriesReport
//!
//! Finalizing consumes the aggregator, so a finished pass can neither be fed
//! more lines nor finalized twice.

mod aggregator;
mod bucket;
pub mod constants;
mod types;

pub use aggregator::SeriesAggregator;
pub use bucket::{BucketPlan, format_label, round_up_to_multiple_of_ten};
pub use types::{IngestOutcome, Series, SeriesError, SeriesReport, SkipCounts, TimeRange};

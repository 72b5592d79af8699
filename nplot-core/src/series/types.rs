use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Endpoint -> one hit count per bucket.
pub type Series = BTreeMap<String, Vec<u64>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum IngestOutcome {
    Continue,
    /// The endpoint cap was hit; the caller must stop feeding lines.
    CapReached,
}

/// Streaming min/max over every accepted timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

impl TimeRange {
    pub fn at(timestamp: i64) -> Self {
        Self {
            start: timestamp,
            end: timestamp,
        }
    }

    pub fn observe(&mut self, timestamp: i64) {
        self.start = self.start.min(timestamp);
        self.end = self.end.max(timestamp);
    }

    pub fn duration(&self) -> u64 {
        self.end.abs_diff(self.start)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    pub no_match: u64,
    pub bad_timestamp: u64,
}

impl SkipCounts {
    pub fn total(&self) -> u64 {
        self.no_match + self.bad_timestamp
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesReport {
    pub total_hits: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub interval: u64,
    /// `BUCKET_COUNT + 1` points, the first one is `start_time`.
    pub boundaries: Vec<i64>,
    /// Display form of `boundaries`, local time.
    pub labels: Vec<String>,
    pub series: Series,
    pub skipped: SkipCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("no line out of {total_hits} matched the access log layout")]
    NoRecords { total_hits: u64 },
}

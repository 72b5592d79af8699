use crate::access_log::{ExtractError, ParsedRecord, extract};
use crate::series::bucket::BucketPlan;
use crate::series::constants::DEFAULT_MAX_ENDPOINTS;
use crate::series::types::{IngestOutcome, SeriesError, SeriesReport, SkipCounts, TimeRange};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use tracing::{debug, info, warn};

pub struct SeriesAggregator {
    max_endpoints: NonZeroUsize,
    total_hits: u64,
    /// `None` until the first record; epoch zero is a legitimate timestamp.
    time_range: Option<TimeRange>,
    endpoint_timestamps: HashMap<String, Vec<i64>>,
    skipped: SkipCounts,
    cap_reached: bool,
}

impl Default for SeriesAggregator {
    fn default() -> Self {
        let max = NonZeroUsize::new(DEFAULT_MAX_ENDPOINTS).unwrap_or(NonZeroUsize::MIN);
        Self::new(max)
    }
}

impl SeriesAggregator {
    pub fn new(max_endpoints: NonZeroUsize) -> Self {
        Self {
            max_endpoints,
            total_hits: 0,
            time_range: None,
            endpoint_timestamps: HashMap::new(),
            skipped: SkipCounts::default(),
            cap_reached: false,
        }
    }

    /// Feeds one raw line.
    ///
    /// Every line counts towards `total_hits`, including the ones that do not
    /// match and the one that hits the endpoint cap. Malformed lines are
    /// skipped.
    pub fn ingest_line(&mut self, line: &str) -> IngestOutcome {
        if self.cap_reached {
            warn!("line fed after endpoint cap was reached; ignoring");
            return IngestOutcome::CapReached;
        }

        self.total_hits += 1;

        match extract(line) {
            Ok(record) => self.record(record),
            Err(ExtractError::NoMatch) => {
                self.skipped.no_match += 1;
                debug!(line = self.total_hits, "skipping line: no match");
                IngestOutcome::Continue
            }
            Err(ExtractError::BadTimestamp { raw }) => {
                self.skipped.bad_timestamp += 1;
                debug!(line = self.total_hits, raw = %raw, "skipping line: bad timestamp");
                IngestOutcome::Continue
            }
        }
    }

    pub(crate) fn record(&mut self, record: ParsedRecord) -> IngestOutcome {
        let ParsedRecord {
            endpoint,
            timestamp,
        } = record;

        self.time_range
            .get_or_insert(TimeRange::at(timestamp))
            .observe(timestamp);

        self.endpoint_timestamps
            .entry(endpoint)
            .or_default()
            .push(timestamp);

        if self.endpoint_timestamps.len() >= self.max_endpoints.get() {
            self.cap_reached = true;
            info!(
                max_endpoints = self.max_endpoints.get(),
                total_hits = self.total_hits,
                "endpoint cap reached; stopping ingestion"
            );
            return IngestOutcome::CapReached;
        }

        IngestOutcome::Continue
    }

    pub fn total_hits(&self) -> u64 {
        self.total_hits
    }

    pub fn time_range(&self) -> Option<TimeRange> {
        self.time_range
    }

    pub fn endpoint_count(&self) -> usize {
        self.endpoint_timestamps.len()
    }

    pub fn skipped(&self) -> SkipCounts {
        self.skipped
    }

    pub fn is_capped(&self) -> bool {
        self.cap_reached
    }

    /// Ends the pass and buckets every endpoint's timestamps.
    pub fn finalize(self) -> Result<SeriesReport, SeriesError> {
        let range = self.time_range.ok_or(SeriesError::NoRecords {
            total_hits: self.total_hits,
        })?;

        let plan = BucketPlan::new(range);

        let series = self
            .endpoint_timestamps
            .iter()
            .map(|(endpoint, timestamps)| (endpoint.clone(), plan.count(timestamps)))
            .collect();

        info!(
            total_hits = self.total_hits,
            endpoints = self.endpoint_timestamps.len(),
            skipped = self.skipped.total(),
            interval = plan.interval,
            "series finalized"
        );

        Ok(SeriesReport {
            total_hits: self.total_hits,
            start_time: range.start,
            end_time: range.end,
            interval: plan.interval,
            labels: plan.labels(),
            boundaries: plan.boundaries,
            series,
            skipped: self.skipped,
        })
    }
}

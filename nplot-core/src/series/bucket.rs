use crate::series::TimeRange;
use crate::series::constants::{BUCKET_COUNT, LABEL_FORMAT};
use chrono::{Local, TimeZone};

/// Rounds up to the nearest multiple of ten (`0` stays `0`).
pub fn round_up_to_multiple_of_ten(x: u64) -> u64 {
    x.div_ceil(10) * 10
}

/// Boundaries of the ten equal-width buckets covering a time range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketPlan {
    pub interval: u64,
    pub boundaries: Vec<i64>,
}

impl BucketPlan {
    pub fn new(range: TimeRange) -> Self {
        // ceil(duration / 10), then rounded up to a multiple of ten for a cleaner axis.
        let interval = round_up_to_multiple_of_ten(range.duration().div_ceil(BUCKET_COUNT as u64));
        let step = i64::try_from(interval).unwrap_or(i64::MAX);

        let boundaries = (0..=BUCKET_COUNT as i64)
            .map(|i| range.start.saturating_add(step.saturating_mul(i)))
            .collect();

        Self {
            interval,
            boundaries,
        }
    }

    /// Counts timestamps per bucket.
    ///
    /// Bucket `k` holds every `ts` with `lower < ts <= boundaries[k]`, where
    /// `lower` is the previous boundary and starts at `0` for the first
    /// bucket. A timestamp sitting exactly on a boundary belongs to the bucket
    /// that boundary closes. Note the strict lower bound: a timestamp of
    /// exactly `0` is never counted.
    pub fn count(&self, timestamps: &[i64]) -> Vec<u64> {
        let mut lower = 0;

        self.boundaries[..BUCKET_COUNT]
            .iter()
            .map(|&upper| {
                let hits = timestamps
                    .iter()
                    .filter(|&&ts| lower < ts && ts <= upper)
                    .count() as u64;
                lower = upper;
                hits
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.boundaries.iter().map(|&ts| format_label(ts)).collect()
    }
}

/// Local date/time rendering of an epoch timestamp.
pub fn format_label(timestamp: i64) -> String {
    match Local.timestamp_opt(timestamp, 0).single() {
        Some(dt) => dt.format(LABEL_FORMAT).to_string(),
        None => timestamp.to_string(),
    }
}

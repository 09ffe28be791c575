use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

pub const SCHEMA_VERSION: u32 = 1;

/// Rolling window, in days, covered by the graph.
pub const MAX_DAYS: usize = 180;
/// Number of full week columns drawn left of the current one.
pub const MAX_WEEKS: usize = 25;
pub const DAYS_PER_WEEK: usize = 7;

/// Author email and zoned author time of a single commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub author_email: String,
    pub author_timestamp: DateTime<FixedOffset>,
}

impl CommitRecord {
    pub fn new(author_email: impl Into<String>, author_timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            author_email: author_email.into(),
            author_timestamp,
        }
    }
}

/// Commit count per day bucket. Every bucket in `0..=window_days` exists
/// from construction on; counts only ever grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitCounts {
    window_days: usize,
    buckets: BTreeMap<usize, u32>,
}

impl CommitCounts {
    pub fn new(window_days: usize) -> Self {
        Self {
            window_days,
            buckets: (0..=window_days).map(|day| (day, 0)).collect(),
        }
    }

    pub fn window_days(&self) -> usize {
        self.window_days
    }

    /// Adds one commit to `bucket`. Returns `false` when the bucket lies
    /// outside the window and nothing was counted.
    pub fn increment(&mut self, bucket: usize) -> bool {
        match self.buckets.get_mut(&bucket) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, bucket: usize) -> Option<u32> {
        self.buckets.get(&bucket).copied()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.buckets.values().map(|&c| c as u64).sum()
    }

    /// Buckets in increasing day order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.buckets.iter().map(|(&day, &count)| (day, count))
    }
}

/// Counts of one week, indexed by day-of-week on the days-ago axis.
pub type WeekColumn = Vec<u32>;

/// Week index (0 = most recent) to its column.
pub type WeekMap = BTreeMap<usize, WeekColumn>;

#[derive(Debug, Clone, Serialize)]
pub struct SkippedRepo {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub email: String,
    pub window_days: usize,
    pub missing_days: usize,
    pub repositories: Vec<String>,
    pub skipped: Vec<SkippedRepo>,
    pub counts: BTreeMap<usize, u32>,
    pub weeks: WeekMap,
}

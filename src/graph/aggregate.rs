use crate::model::{CommitCounts, CommitRecord, DAYS_PER_WEEK};
use chrono::{DateTime, Datelike, FixedOffset, TimeZone};
use tracing::trace;

/// Number of placeholder cells needed so that "today" lands on its
/// weekday row in the newest column: Sunday 7, Monday 6, ..., Saturday 1.
pub fn missing_days_offset<Tz: TimeZone>(now: &DateTime<Tz>) -> usize {
    DAYS_PER_WEEK - now.weekday().num_days_from_sunday() as usize
}

/// Whole calendar days between the commit's date and `now`'s date, both
/// taken in the commit's own offset. Negative for commits after `now`.
pub fn days_since(timestamp: &DateTime<FixedOffset>, now: &DateTime<FixedOffset>) -> i64 {
    let offset = timestamp.offset();
    let commit_day = timestamp.date_naive();
    let today = now.with_timezone(offset).date_naive();
    today.signed_duration_since(commit_day).num_days()
}

/// Bucket key for a commit, or `None` if it falls outside `0..=window_days`.
pub fn day_bucket(
    timestamp: &DateTime<FixedOffset>,
    now: &DateTime<FixedOffset>,
    window_days: usize,
    missing_days: usize,
) -> Option<usize> {
    let days = days_since(timestamp, now);
    if days < 0 {
        return None;
    }
    let bucket = days as usize + missing_days;
    (bucket <= window_days).then_some(bucket)
}

/// Folds one repository's commits into `counts`. Returns how many records
/// were counted.
pub fn accumulate<'a, I>(
    counts: &mut CommitCounts,
    commits: I,
    filter_email: &str,
    now: &DateTime<FixedOffset>,
) -> usize
where
    I: IntoIterator<Item = &'a CommitRecord>,
{
    let window_days = counts.window_days();
    let missing_days = missing_days_offset(now);
    let mut counted = 0;

    for record in commits {
        if record.author_email != filter_email {
            continue;
        }
        let Some(bucket) = day_bucket(&record.author_timestamp, now, window_days, missing_days)
        else {
            trace!(timestamp = %record.author_timestamp, "commit outside window");
            continue;
        };
        if counts.increment(bucket) {
            counted += 1;
        }
    }

    counted
}

pub fn aggregate<'a, I>(
    window_days: usize,
    commits: I,
    filter_email: &str,
    now: &DateTime<FixedOffset>,
) -> CommitCounts
where
    I: IntoIterator<Item = &'a CommitRecord>,
{
    let mut counts = CommitCounts::new(window_days);
    accumulate(&mut counts, commits, filter_email, now);
    counts
}

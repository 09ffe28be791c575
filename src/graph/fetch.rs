use super::aggregate::accumulate;
use crate::error::Result;
use crate::git::GitRepo;
use crate::model::{CommitCounts, CommitRecord, SkippedRepo};
use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Supplies the commit history of one repository.
pub trait CommitSource {
    fn commit_records(&self, path: &Path) -> Result<Vec<CommitRecord>>;
}

/// Reads history from disk with gix.
pub struct GitSource {
    pub progress: bool,
}

impl CommitSource for GitSource {
    fn commit_records(&self, path: &Path) -> Result<Vec<CommitRecord>> {
        GitRepo::open(path)?.commit_records(self.progress)
    }
}

#[derive(Debug)]
pub struct FetchReport {
    pub counts: CommitCounts,
    pub repositories: Vec<PathBuf>,
    pub skipped: Vec<SkippedRepo>,
}

/// Aggregates every repository into one set of counts. A repository that
/// cannot be read is skipped with a warning, or aborts the whole run when
/// `strict` is set.
pub fn fetch_counts<S: CommitSource>(
    source: &S,
    repos: &[PathBuf],
    window_days: usize,
    email: &str,
    now: &DateTime<FixedOffset>,
    strict: bool,
) -> anyhow::Result<FetchReport> {
    let mut report = FetchReport {
        counts: CommitCounts::new(window_days),
        repositories: Vec::with_capacity(repos.len()),
        skipped: Vec::new(),
    };

    for path in repos {
        let records = match source.commit_records(path) {
            Ok(records) => records,
            Err(e) if strict => {
                return Err(e).with_context(|| format!("Failed to read repository {}", path.display()));
            }
            Err(e) => {
                warn!("skipping {}: {e}", path.display());
                report.skipped.push(SkippedRepo {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let counted = accumulate(&mut report.counts, &records, email, now);
        info!(repo = %path.display(), total = records.len(), counted, "aggregated repository");
        report.repositories.push(path.clone());
    }

    Ok(report)
}

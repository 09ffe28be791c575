use crate::error::{GitGraphError, Result};
use crate::model::CommitRecord;
use chrono::{DateTime, FixedOffset};
use gix::{ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository rooted at `path`. Parent directories are not
    /// searched.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = gix::open(path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Author email and author time of every commit reachable from `HEAD`.
    pub fn commit_records(&self, progress: bool) -> Result<Vec<CommitRecord>> {
        let mut head = self.repo.head()?;
        if head.is_unborn() {
            return Err(GitGraphError::GitRepo(format!(
                "{}: HEAD has no commits yet",
                self.path().display()
            )));
        }
        let head_commit = head.peel_to_commit_in_place()?;

        let mut records = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        let pb = if progress {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} ({pos})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Reading {}", self.path.display()));

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let author = commit.author()?;
            let time = author
                .time()
                .map_err(|e| GitGraphError::InvalidDate(format!("{commit_id}: {e}")))?;

            records.push(CommitRecord {
                author_email: author.email.to_string(),
                author_timestamp: zoned_timestamp(time.seconds, time.offset)?,
            });

            for pid in commit.parent_ids() {
                stack.push_back(pid.detach());
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        debug!(repo = %self.path().display(), commits = records.len(), "walked history");
        Ok(records)
    }
}

/// Seconds since the epoch plus the signature's UTC offset, as a zoned time.
fn zoned_timestamp(seconds: i64, offset: i32) -> Result<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(offset)
        .ok_or_else(|| GitGraphError::InvalidDate(format!("Invalid UTC offset: {offset}s")))?;
    DateTime::from_timestamp(seconds, 0)
        .map(|utc| utc.with_timezone(&offset))
        .ok_or_else(|| GitGraphError::InvalidDate(format!("Invalid timestamp: {seconds}")))
}

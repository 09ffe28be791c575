use crate::error::Result;
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_IGNORE: &[&str] = &["node_modules"];

const GIT_DIR: &str = ".git";

/// Every directory under `root` (including `root` itself) that holds a
/// `.git` directory. Directories named in `ignore` are not entered.
pub fn find_repositories(root: &Path, ignore: &[String]) -> Result<Vec<PathBuf>> {
    let root = root.canonicalize()?;
    let skip: BTreeSet<String> = ignore.iter().cloned().collect();

    let walker = WalkBuilder::new(&root)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if !is_dir || entry.depth() == 0 {
                return true;
            }
            let name = entry.file_name();
            name != OsStr::new(GIT_DIR) && !skip.iter().any(|s| name == OsStr::new(s))
        })
        .build();

    let mut repos = BTreeSet::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth().is_some_and(|d| d > 0) => {
                warn!("skipping unreadable entry: {err}");
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }
        if entry.path().join(GIT_DIR).is_dir() {
            debug!(repo = %entry.path().display(), "found repository");
            repos.insert(entry.into_path());
        }
    }

    Ok(repos.into_iter().collect())
}

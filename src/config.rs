//! Registration store: a flat text file listing the default email, folder
//! names skipped while scanning, and the repositories to graph.
//!
//! ```text
//! # gitgraph
//! email: me@example.com
//! ignore: node_modules
//! repo: /home/me/src/project
//! ```
//!
//! Only `email`, `ignore` and `repo` are keys; any other line, such as
//! `src:old` or `C:\src\repo`, is taken as a bare repository path.

use crate::error::{GitGraphError, Result};
use crate::scan::DEFAULT_IGNORE;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = ".gitgraph";

const KEYS: [&str; 3] = ["email", "ignore", "repo"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub email: Option<String>,
    pub ignore: Vec<String>,
    pub repos: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            email: None,
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            repos: Vec::new(),
        }
    }
}

/// `~/.gitgraph`
pub fn default_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE_NAME))
        .ok_or(GitGraphError::NoHome)
}

impl Config {
    /// Reads the store at `path`. A missing file yields the default config.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text, path),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let mut config = Config {
            email: None,
            ignore: Vec::new(),
            repos: Vec::new(),
        };
        let mut saw_ignore = false;

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match split_key(line) {
                Some((key, "")) => {
                    return Err(GitGraphError::ConfigParse {
                        path: path.to_path_buf(),
                        line: idx + 1,
                        message: format!("empty value for `{key}`"),
                    });
                }
                Some(("email", value)) => config.email = Some(value.to_string()),
                Some(("ignore", value)) => {
                    saw_ignore = true;
                    config.push_ignore(value);
                }
                // only `repo` remains
                Some((_, value)) => {
                    config.push_repo(PathBuf::from(value));
                }
                None => {
                    config.push_repo(PathBuf::from(line));
                }
            }
        }

        if !saw_ignore {
            config.ignore = Config::default().ignore;
        }
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.render())?;
        debug!(path = %path.display(), repos = self.repos.len(), "saved config");
        Ok(())
    }

    pub fn render(&self) -> String {
        let mut out = String::from("# gitgraph\n");
        if let Some(email) = &self.email {
            out.push_str(&format!("email: {email}\n"));
        }
        for name in &self.ignore {
            out.push_str(&format!("ignore: {name}\n"));
        }
        for repo in &self.repos {
            out.push_str(&format!("repo: {}\n", repo.display()));
        }
        out
    }

    /// Appends unseen repositories in order. Returns how many were added.
    pub fn add_repos<I>(&mut self, repos: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut added = 0;
        for repo in repos {
            if self.push_repo(repo) {
                added += 1;
            }
        }
        added
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
    }

    /// Returns `false` if `name` was already ignored.
    pub fn add_ignore(&mut self, name: &str) -> bool {
        self.push_ignore(name)
    }

    pub fn clear_repos(&mut self) {
        self.repos.clear();
    }

    fn push_repo(&mut self, repo: PathBuf) -> bool {
        if self.repos.contains(&repo) {
            return false;
        }
        self.repos.push(repo);
        true
    }

    fn push_ignore(&mut self, name: &str) -> bool {
        if self.ignore.iter().any(|n| n == name) {
            return false;
        }
        self.ignore.push(name.to_string());
        true
    }
}

/// `key: value` for one of the known keys; `None` for anything else.
fn split_key(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    KEYS.contains(&key).then(|| (key, value.trim()))
}

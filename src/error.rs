use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitGraphError>;

#[derive(Error, Debug)]
pub enum GitGraphError {
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("Git repository error: {0}")]
    GitRepo(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error at {path}:{line}: {message}")]
    ConfigParse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[error("Scan error: {0}")]
    Scan(#[from] ignore::Error),
    #[error("No home directory found; pass --config to choose a config file")]
    NoHome,
    #[error("No email configured; pass --email or run `gitgraph email <address>`")]
    NoEmail,
    #[error("No repositories registered; run `gitgraph add <folder>` first")]
    NoRepositories,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::open::Error> for GitGraphError {
    fn from(err: gix::open::Error) -> Self {
        GitGraphError::Git(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for GitGraphError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        GitGraphError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for GitGraphError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        GitGraphError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for GitGraphError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        GitGraphError::HeadPeel(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for GitGraphError {
    fn from(err: gix::objs::decode::Error) -> Self {
        GitGraphError::ObjectDecode(Box::new(err))
    }
}

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod graph;
pub mod logging;
pub mod model;
pub mod register;
pub mod scan;

//! Contribution graph: commits are bucketed by days ago, folded into week
//! columns and drawn as a weekday by week grid.

pub mod aggregate;
pub mod band;
pub mod calendar;
pub mod exec;
pub mod fetch;
pub mod output;
pub mod render;

pub use aggregate::{accumulate, aggregate, day_bucket, days_since, missing_days_offset};
pub use band::{format_cell, tier_for, Band, Tier, BANDS};
pub use calendar::fold;
pub use exec::exec;
pub use fetch::{fetch_counts, CommitSource, FetchReport, GitSource};
pub use output::{build_output, output_graph, output_json};
pub use render::{day_label, month_row, render};

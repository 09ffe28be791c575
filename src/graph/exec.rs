use super::{fetch_counts, fold, output_graph, output_json, GitSource};
use crate::cli::CommonArgs;
use crate::config::Config;
use crate::error::GitGraphError;
use crate::model::MAX_DAYS;
use anyhow::Context;
use chrono::Local;
use console::Term;

pub fn exec(
    common: CommonArgs,
    email: Option<String>,
    json: bool,
    no_color: bool,
    strict: bool,
) -> anyhow::Result<()> {
    let config_path = common.config_path()?;
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let email = email.or(config.email).ok_or(GitGraphError::NoEmail)?;
    if config.repos.is_empty() {
        return Err(GitGraphError::NoRepositories.into());
    }

    let now = Local::now().fixed_offset();
    let source = GitSource {
        progress: !json && Term::stderr().is_term(),
    };
    let report = fetch_counts(&source, &config.repos, MAX_DAYS, &email, &now, strict)?;
    let weeks = fold(&report.counts);

    if json {
        output_json(&report, &weeks, &email, &now)?;
    } else {
        let color = !no_color && console::colors_enabled();
        output_graph(&report, &weeks, &email, &now, color)?;
    }

    Ok(())
}

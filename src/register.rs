use crate::cli::CommonArgs;
use crate::config::Config;
use crate::scan::find_repositories;
use anyhow::Context;
use console::style;
use std::path::Path;
use tracing::info;

fn load(common: &CommonArgs) -> anyhow::Result<(Config, std::path::PathBuf)> {
    let path = common.config_path()?;
    let config = Config::load(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    Ok((config, path))
}

fn store(config: &Config, path: &Path) -> anyhow::Result<()> {
    config
        .save(path)
        .with_context(|| format!("Failed to save config to {}", path.display()))
}

pub fn add(common: &CommonArgs, folder: &Path) -> anyhow::Result<()> {
    let (mut config, path) = load(common)?;

    let repos = find_repositories(folder, &config.ignore)
        .with_context(|| format!("Failed to scan {}", folder.display()))?;

    println!("{}", style("Repositories found:").bold());
    for repo in &repos {
        println!("  {}", repo.display());
    }

    let found = repos.len();
    let added = config.add_repos(repos);
    store(&config, &path)?;
    info!(found, added, config = %path.display(), "registered repositories");

    println!("\n{added} new of {found} found, {} registered", config.repos.len());
    Ok(())
}

pub fn set_email(common: &CommonArgs, address: &str) -> anyhow::Result<()> {
    let (mut config, path) = load(common)?;
    config.set_email(address);
    store(&config, &path)?;
    println!("Email set to {address}");
    Ok(())
}

pub fn ignore(common: &CommonArgs, name: &str) -> anyhow::Result<()> {
    let (mut config, path) = load(common)?;
    if config.add_ignore(name) {
        store(&config, &path)?;
        println!("Ignoring folders named {name}");
    } else {
        println!("{name} is already ignored");
    }
    Ok(())
}

pub fn list(common: &CommonArgs) -> anyhow::Result<()> {
    let (config, _) = load(common)?;
    if config.repos.is_empty() {
        println!("No repositories registered");
    }
    for repo in &config.repos {
        println!("{}", repo.display());
    }
    Ok(())
}

pub fn clear(common: &CommonArgs) -> anyhow::Result<()> {
    let (mut config, path) = load(common)?;
    config.clear_repos();
    store(&config, &path)?;
    println!("Repositories cleared");
    Ok(())
}

use assert_cmd::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const EMAIL: &str = "you@example.com";

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn init_git_repo(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    git(dir, &["init"]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "user.email", EMAIL]);
    git(dir, &["config", "user.name", "Your Name"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

fn commit_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();
    git(dir, &["add", "."]);
    git(dir, &["commit", "-m", &format!("add {name}")]);
}

fn gitgraph(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gitgraph").unwrap();
    cmd.env_remove("GITGRAPH_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config);
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).unwrap()
}

fn graph_json(config: &Path, email: &str) -> serde_json::Value {
    let out = stdout_of(gitgraph(config).args(["graph", "--json", "--email", email]));
    serde_json::from_str(&out).unwrap()
}

fn total_commits(v: &serde_json::Value) -> u64 {
    v["counts"]
        .as_object()
        .unwrap()
        .values()
        .map(|c| c.as_u64().unwrap())
        .sum()
}

/// Workspace with two committed repositories and one under node_modules.
fn workspace() -> (tempfile::TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap().join("src");
    init_git_repo(&root.join("alpha"));
    init_git_repo(&root.join("beta"));
    commit_file(&root.join("alpha"), "lib.rs", "pub fn a() {}\n");
    commit_file(&root.join("alpha"), "main.rs", "fn main() {}\n");
    commit_file(&root.join("beta"), "README", "beta\n");

    // created after alpha's commits so alpha never tracks it
    let dep = root.join("alpha/node_modules/dep");
    init_git_repo(&dep);
    commit_file(&dep, "index.js", "x\n");
    (dir, root)
}

#[test]
fn add_registers_discovered_repositories() {
    if !has_git() {
        return;
    }
    let (dir, root) = workspace();
    let config = dir.path().join("gitgraph.cfg");

    let out = stdout_of(gitgraph(&config).arg("add").arg(&root));
    assert!(out.contains(&root.join("alpha").display().to_string()));
    assert!(out.contains(&root.join("beta").display().to_string()));
    assert!(!out.contains("node_modules"));
    assert!(out.contains("2 new of 2 found"));

    let again = stdout_of(gitgraph(&config).arg("add").arg(&root));
    assert!(again.contains("0 new of 2 found"));

    let listed = stdout_of(gitgraph(&config).arg("list"));
    assert_eq!(listed.lines().count(), 2);

    stdout_of(gitgraph(&config).arg("clear"));
    let listed = stdout_of(gitgraph(&config).arg("list"));
    assert!(listed.contains("No repositories registered"));
}

#[test]
fn graph_json_counts_commits_across_repositories() {
    if !has_git() {
        return;
    }
    let (dir, root) = workspace();
    let config = dir.path().join("gitgraph.cfg");
    stdout_of(gitgraph(&config).arg("add").arg(&root));

    let v = graph_json(&config, EMAIL);
    assert_eq!(v["window_days"], 180);
    assert_eq!(v["counts"].as_object().unwrap().len(), 181);
    assert_eq!(v["repositories"].as_array().unwrap().len(), 2);
    assert_eq!(total_commits(&v), 3);

    // today's bucket, or the next one if midnight passed since committing
    let missing = v["missing_days"].as_u64().unwrap();
    let around_today: u64 = [missing, missing + 1]
        .iter()
        .map(|day| v["counts"][day.to_string()].as_u64().unwrap_or(0))
        .sum();
    assert_eq!(around_today, 3);

    let other = graph_json(&config, "someone-else@example.com");
    assert_eq!(total_commits(&other), 0);
}

#[test]
fn graph_uses_configured_email() {
    if !has_git() {
        return;
    }
    let (dir, root) = workspace();
    let config = dir.path().join("gitgraph.cfg");
    stdout_of(gitgraph(&config).arg("add").arg(&root));

    gitgraph(&config).arg("graph").assert().failure();

    stdout_of(gitgraph(&config).args(["email", EMAIL]));
    let out = stdout_of(gitgraph(&config).args(["graph", "--no-color"]));
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], format!("User: {EMAIL}"));
    assert_eq!(lines.len(), 9);
    assert!(lines[3].starts_with(" Fri "));
    assert!(lines[7].starts_with(" Mon "));
    assert!(!out.contains('\u{1b}'));
}

#[test]
fn unreadable_repository_is_skipped_unless_strict() {
    if !has_git() {
        return;
    }
    let (dir, root) = workspace();
    let config = dir.path().join("gitgraph.cfg");
    let broken = dir.path().join("not-a-repo");
    fs::create_dir_all(&broken).unwrap();
    fs::write(
        &config,
        format!(
            "email: {EMAIL}\nrepo: {}\n{}\n",
            root.join("alpha").display(),
            broken.display()
        ),
    )
    .unwrap();

    let v = graph_json(&config, EMAIL);
    assert_eq!(total_commits(&v), 2);
    assert_eq!(v["skipped"].as_array().unwrap().len(), 1);

    gitgraph(&config)
        .args(["graph", "--json", "--strict"])
        .assert()
        .failure();
}

#[test]
fn graph_without_repositories_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("gitgraph.cfg");

    let out = gitgraph(&config)
        .args(["graph", "--email", EMAIL])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8_lossy(&out).contains("No repositories registered"));
}

#[test]
fn malformed_config_is_reported() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("gitgraph.cfg");
    fs::write(&config, "email: me@example.com\nignore:\n").unwrap();

    let out = gitgraph(&config)
        .arg("list")
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&out);
    assert!(stderr.contains(":2"), "{stderr}");
}

//! Integration tests for the `gf` binary.
//!
//! Each test points the binary at a temporary repository with `--repo` and
//! isolates configuration through `GITFACADE_CONFIG`.

use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Run a git command in the given directory.
fn run_git(dir: &Path, args: &[&str]) {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// A repository on `main` with one commit.
fn committed_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    run_git(dir.path(), &["init", "-b", "main"]);
    run_git(dir.path(), &["config", "user.email", "test@example.com"]);
    run_git(dir.path(), &["config", "user.name", "Test User"]);
    dir.child("README.md").write_str("# Test Repo\n").unwrap();
    run_git(dir.path(), &["add", "README.md"]);
    run_git(dir.path(), &["commit", "-m", "Initial commit"]);
    dir
}

/// `gf` with an isolated config file and the given repository.
fn gf(config_dir: &TempDir, repo: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gf").unwrap();
    cmd.env("GITFACADE_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG")
        .arg("--repo")
        .arg(repo);
    cmd
}

#[test]
fn init_then_status() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("checkout");

    gf(&config, &target)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("not a git repository"));

    gf(&config, &target)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    gf(&config, &target)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already a git repository"));

    gf(&config, &target)
        .args(["status", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"initialized\": true"));
}

#[test]
fn branch_listing_marks_current() {
    let config = TempDir::new().unwrap();
    let repo = committed_repo();
    run_git(repo.path(), &["branch", "feature"]);

    gf(&config, repo.path())
        .arg("branch")
        .assert()
        .success()
        .stdout("  feature\n* main\n");
}

#[test]
fn log_as_json() {
    let config = TempDir::new().unwrap();
    let repo = committed_repo();

    let output = gf(&config, repo.path())
        .args(["log", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let commits: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let commits = commits.as_array().unwrap();
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0]["subject"], "Initial commit");
    assert_eq!(commits[0]["parent_hashes"], serde_json::json!([]));
}

#[test]
fn log_limit() {
    let config = TempDir::new().unwrap();
    let repo = committed_repo();
    repo.child("second.txt").write_str("2\n").unwrap();
    run_git(repo.path(), &["add", "second.txt"]);
    run_git(repo.path(), &["commit", "-m", "Second commit"]);

    gf(&config, repo.path())
        .args(["log", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Second commit"))
        .stdout(predicate::str::contains("Initial commit").not());
}

#[test]
fn debug_lines_only_with_debug_flag() {
    let config = TempDir::new().unwrap();
    let repo = committed_repo();

    gf(&config, repo.path())
        .args(["--debug", "log", "-n", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[debug] repository"))
        .stderr(predicate::str::contains("[debug] showing 1 of 1 commits"));

    gf(&config, repo.path())
        .args(["log", "-n", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[debug]").not());
}

#[test]
fn remote_listing() {
    let config = TempDir::new().unwrap();
    let repo = committed_repo();
    run_git(
        repo.path(),
        &["remote", "add", "origin", "git@example.com:org/repo.git"],
    );

    gf(&config, repo.path())
        .arg("remote")
        .assert()
        .success()
        .stdout("origin\tgit@example.com:org/repo.git (fetch, push)\n");
}

#[test]
fn failure_exits_with_error_kind() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();

    // Branch listing outside a repository: kind BranchList (5).
    gf(&config, dir.path())
        .arg("branch")
        .assert()
        .code(5)
        .stderr(predicate::str::starts_with("error:"));
}

#[test]
fn missing_executable_exits_with_code_one() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();

    gf(&config, dir.path())
        .arg("--git")
        .arg(dir.path().join("no-such-git"))
        .arg("status")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("git not found"));
}

#[test]
fn config_set_then_get() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();

    gf(&config, dir.path())
        .args(["config", "set", "json", "true"])
        .assert()
        .success();

    config
        .child("config.toml")
        .assert(predicate::str::contains("json = true"));

    gf(&config, dir.path())
        .args(["config", "get", "json"])
        .assert()
        .success()
        .stdout("true\n");

    gf(&config, dir.path())
        .args(["config", "get", "nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn configured_git_path_is_used() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    config
        .child("config.toml")
        .write_str(&format!(
            "git_path = '{}'\n",
            dir.path().join("missing-git").display()
        ))
        .unwrap();

    gf(&config, dir.path())
        .arg("status")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing-git"));
}

#[test]
fn completion_script() {
    Command::cargo_bin("gf")
        .unwrap()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_gf"));
}

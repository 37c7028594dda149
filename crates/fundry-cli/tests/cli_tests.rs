//! End-to-end CLI tests.
//!
//! The service URL points at a port nothing listens on, so every run
//! exercises the cache-fallback path: the CLI must stay fully usable
//! offline.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DEAD_SERVICE: &str = "http://127.0.0.1:1";

fn fundry(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fundry").expect("binary exists");
    cmd.arg("--service-url")
        .arg(DEAD_SERVICE)
        .arg("--cache-file")
        .arg(temp.path().join("drafts.db"))
        .arg("--owner")
        .arg("founder-1");
    cmd
}

#[test]
fn list_with_empty_cache_succeeds_offline() {
    let temp = TempDir::new().expect("tempdir");

    fundry(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No drafts found."));
}

#[test]
fn bare_invocation_defaults_to_list() {
    let temp = TempDir::new().expect("tempdir");

    fundry(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("No drafts found."));
}

#[test]
fn new_draft_degrades_to_the_local_cache() {
    let temp = TempDir::new().expect("tempdir");

    fundry(&temp)
        .args(["new", "--title", "Solar Microgrids"])
        .assert()
        .success()
        .stdout(predicate::str::contains("saved to the local cache only"))
        .stdout(predicate::str::contains("Solar Microgrids"));

    // The cached draft shows up in subsequent offline listings
    fundry(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Solar Microgrids"));
}

#[test]
fn show_of_unknown_draft_fails_cleanly() {
    let temp = TempDir::new().expect("tempdir");

    fundry(&temp)
        .args(["show", "d-404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load draft d-404"));
}

#[test]
fn sync_with_nothing_pending_reports_it() {
    let temp = TempDir::new().expect("tempdir");

    fundry(&temp)
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to sync."));
}

#[test]
fn sync_retries_cached_drafts_while_still_offline() {
    let temp = TempDir::new().expect("tempdir");

    fundry(&temp)
        .args(["new", "--title", "Solar Microgrids"])
        .assert()
        .success();

    fundry(&temp)
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("Attempted to sync 1 draft(s)"))
        .stdout(predicate::str::contains("saved to the local cache only"));
}

#[test]
fn help_lists_the_draft_commands() {
    let temp = TempDir::new().expect("tempdir");

    fundry(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("publish"))
        .stdout(predicate::str::contains("sync"));
}

// tests/cli/smoke_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TempTree;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_loc_stats"))
}

#[test]
fn shows_help() {
    bin().arg("--help").assert().success().stdout(predicate::str::contains("loc_stats"));
}

#[test]
fn bare_invocation_scans_working_directory() {
    let tree = TempTree::new();
    tree.write_lines("a.js", 3);
    tree.write_lines("b.ts", 5);
    tree.write_lines("dist/c.js", 100);
    tree.write_lines("x.md", 10);

    bin()
        .current_dir(tree.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Starting...\n\nLines of Code Statistics:\n"))
        .stdout(predicate::str::contains("Total Lines: 8\nTotal Files: 2\n"))
        .stdout(predicate::str::contains(".js   Files:    1 | Lines:      3\n"))
        .stdout(predicate::str::contains(".ts   Files:    1 | Lines:      5\n"))
        .stdout(predicate::str::contains(".css").not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn explicit_root_and_segment_matching() {
    let tree = TempTree::new();
    tree.write_lines("my-dist-files/a.js", 2);

    bin()
        .arg(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Lines: 0\n"));

    bin()
        .arg(tree.path())
        .args(["--ignore-match", "segment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Lines: 2\n"));
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let tree = TempTree::new();
    tree.write_file("broken.html", b"\xff\n");
    tree.write_lines("dist/skip.js", 1);

    bin()
        .current_dir(tree.path())
        .env_remove("RUST_LOG")
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Files: 1\n"))
        .stdout(predicate::str::contains("unreadable").not())
        .stderr(predicate::str::contains("unreadable file counted as zero lines"))
        .stderr(predicate::str::contains("pruned ignored directory"))
        .stderr(predicate::str::contains("walk started"))
        .stderr(predicate::str::contains("walk finished"));
}

#[test]
fn default_filter_hides_walk_events() {
    let tree = TempTree::new();
    tree.write_lines("a.js", 1);

    bin()
        .current_dir(tree.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("walk started").not());
}

#[test]
fn rejects_root_that_is_not_a_directory() {
    let tree = TempTree::new();
    let file = tree.write_lines("a.js", 1);

    bin().arg(&file).assert().failure().stderr(predicate::str::contains("not a directory"));
}

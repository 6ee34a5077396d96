// tests/integration/end_to_end.rs
use std::path::Path;

use loc_stats::{app, config::Config};
use loc_stats_domain::IgnoreMatching;

use crate::common::TempTree;

const RULE: &str = "--------------------------------------------------";

fn config_for(root: &Path) -> Config {
    Config { root: root.to_path_buf(), ..Config::default() }
}

fn run_to_string(config: &Config) -> String {
    let mut out = Vec::new();
    app::run(config, &mut out).expect("run succeeds");
    String::from_utf8(out).expect("report is UTF-8")
}

fn expected_output(total_lines: usize, total_files: usize, rows: &[&str]) -> String {
    let mut text = format!(
        "Starting...\n\nLines of Code Statistics:\n{RULE}\nTotal Lines: {total_lines}\nTotal Files: {total_files}\n\nBreakdown by Extension:\n{RULE}\n"
    );
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

#[test]
fn ignores_dist_and_untracked_extensions() {
    let tree = TempTree::new();
    tree.write_lines("a.js", 3);
    tree.write_lines("b.ts", 5);
    tree.write_lines("dist/c.js", 100);
    tree.write_lines("x.md", 10);

    let output = run_to_string(&config_for(tree.path()));

    assert_eq!(
        output,
        expected_output(8, 2, &[".js   Files:    1 | Lines:      3", ".ts   Files:    1 | Lines:      5"])
    );
}

#[test]
fn empty_tree_prints_zero_totals_and_no_rows() {
    let tree = TempTree::new();
    assert_eq!(run_to_string(&config_for(tree.path())), expected_output(0, 0, &[]));
}

#[test]
fn undecodable_file_counts_as_file_without_lines() {
    let tree = TempTree::new();
    tree.write_file("locked.css", b"\xff\xfe\x00binary\n");
    tree.write_lines("ok.html", 2);

    let output = run_to_string(&config_for(tree.path()));

    assert_eq!(output, expected_output(2, 2, &[".html Files:    1 | Lines:      2"]));
}

#[cfg(unix)]
#[test]
fn permission_denied_file_counts_as_file_without_lines() {
    use std::{fs, os::unix::fs::PermissionsExt};

    let tree = TempTree::new();
    let locked = tree.write_lines("locked.css", 4);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    // Privileged users can still read the file; nothing to observe then.
    if fs::read(&locked).is_ok() {
        return;
    }

    let report = app::collect(&config_for(tree.path())).unwrap();
    assert_eq!(report.total_files(), 1usize);
    assert!(report.total_lines().is_zero());
    assert_eq!(report.breakdown().count(), 0);
}

#[test]
fn every_default_ignore_folder_is_pruned_at_any_depth() {
    let tree = TempTree::new();
    tree.write_lines("src/index.tsx", 1);
    for dir in ["build", "dist", "public", "node_modules", "server/node_modules", "server/dist", "pkg/a/build"] {
        tree.write_lines(&format!("{dir}/skipped.js"), 50);
    }
    tree.write_lines("server/app.ts", 2);

    let report = app::collect(&config_for(tree.path())).unwrap();

    assert_eq!(report.total_lines(), 3usize);
    assert_eq!(report.total_files(), 2usize);
}

#[test]
fn substring_rule_prunes_lookalike_directories_unless_segment_mode() {
    let tree = TempTree::new();
    tree.write_lines("my-dist-files/a.js", 4);
    tree.write_lines("republic/b.css", 6);
    tree.write_lines("src/c.js", 1);

    let substring = app::collect(&config_for(tree.path())).unwrap();
    assert_eq!(substring.total_lines(), 1usize);

    let segment = Config { ignore_matching: IgnoreMatching::Segment, ..config_for(tree.path()) };
    let report = app::collect(&segment).unwrap();
    assert_eq!(report.total_lines(), 11usize);
    assert_eq!(report.total_files(), 3usize);
}

#[test]
fn mixed_case_extensions_and_line_endings() {
    let tree = TempTree::new();
    tree.write_file("Main.TS", "a\r\nb\r\nc");
    tree.write_file("old.Css", "a\rb\r");
    tree.write_file("empty.js", "");

    let report = app::collect(&config_for(tree.path())).unwrap();

    let by_ext: Vec<(&str, usize, usize)> = report
        .tallies()
        .iter()
        .map(|t| (t.extension.as_str(), t.files.value(), t.lines.value()))
        .collect();
    assert_eq!(
        by_ext,
        vec![(".js", 1, 0), (".ts", 1, 3), (".tsx", 0, 0), (".css", 1, 2), (".html", 0, 0)]
    );
}

#[test]
fn hidden_directories_are_scanned() {
    let tree = TempTree::new();
    tree.write_lines(".storybook/main.js", 7);

    let report = app::collect(&config_for(tree.path())).unwrap();
    assert_eq!(report.total_lines(), 7usize);
}

#[test]
fn repeated_runs_print_identical_output() {
    let tree = TempTree::new();
    tree.write_lines("a.js", 3);
    tree.write_lines("nested/deep/b.tsx", 9);
    tree.write_lines("nested/c.html", 2);
    tree.write_file("bad.ts", b"\xc3\x28\n");

    let config = config_for(tree.path());
    assert_eq!(run_to_string(&config), run_to_string(&config));
}

// V-series: verify command over hand-built record files

use crate::helpers::cli_runner::CliRunner;
use crate::helpers::records::{solved_record, write_jsonl};
use slidepuzzle_engine::position::Position;
use std::fs;

#[test]
fn v1_valid_records_pass() {
    let cli = CliRunner::new();
    let records = vec![
        solved_record(1, 10, 3, 12),
        solved_record(2, 11, 4, 40),
        solved_record(3, 12, 2, 4),
    ];
    let path = write_jsonl(cli.dir(), "ok.jsonl", &records);

    let res = cli.run(&["verify", "--input", path.to_string_lossy().as_ref()]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Verify: OK (3 games, 3 solved)"));
}

#[test]
fn v2_every_bad_record_is_reported() {
    let cli = CliRunner::new();
    let good = solved_record(1, 20, 3, 10);

    let mut wrong_seed = solved_record(2, 21, 4, 40);
    wrong_seed.seed = Some(22);

    let mut illegal = solved_record(3, 23, 3, 10);
    illegal.moves.insert(0, Position::new(0, 0));

    let path = write_jsonl(cli.dir(), "mixed.jsonl", &[good, wrong_seed, illegal]);
    let res = cli.run(&["verify", "--input", path.to_string_lossy().as_ref()]);

    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.contains("Verify: FAILED (2 of 3 games invalid)"));
    assert!(res.stderr.contains("line 2: 20260101-000002: scramble walk does not match seed"));
    assert!(res.stderr.contains("line 3: 20260101-000003: move 1"));
    assert!(!res.stderr.contains("line 1:"));
}

#[test]
fn v3_corrupt_line_is_reported_with_line_number() {
    let cli = CliRunner::new();
    let good = serde_json::to_string(&solved_record(1, 30, 3, 10)).unwrap();
    let path = cli.dir().join("corrupt.jsonl");
    fs::write(&path, format!("{}\n{{\"game_id\": \n", good)).unwrap();

    let res = cli.run(&["verify", "--input", path.to_string_lossy().as_ref()]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("line 2: Invalid JSON record"));
}

#[test]
fn v4_empty_file_is_an_error() {
    let cli = CliRunner::new();
    let path = cli.dir().join("empty.jsonl");
    fs::write(&path, "\n\n").unwrap();

    let res = cli.run(&["verify", "--input", path.to_string_lossy().as_ref()]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("no game records found"));
}

#[test]
fn v5_missing_file_is_an_error() {
    let cli = CliRunner::new();
    let res = cli.run(&["verify", "--input", "nope.jsonl"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Failed to read nope.jsonl"));
}

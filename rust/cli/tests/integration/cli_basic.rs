// A-series: basic CLI surface through the built binary

use crate::helpers::cli_runner::CliRunner;

#[test]
fn a1_help_lists_all_commands() {
    let cli = CliRunner::new();
    let res = cli.run(&["--help"]);

    assert_eq!(res.exit_code, 0, "--help should exit with code 0");
    for cmd in ["play", "deal", "verify", "cfg"] {
        assert!(res.stdout.contains(cmd), "help should list `{}`", cmd);
    }
}

#[test]
fn a2_version_prints_version_and_exits_zero() {
    let cli = CliRunner::new();
    let res = cli.run(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("slidepuzzle"));
}

#[test]
fn a3_unknown_subcommand_shows_help_excerpt_on_stderr() {
    let cli = CliRunner::new();
    let res = cli.run(&["unknown"]);
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr.contains("Commands:"),
        "stderr should contain the command list\n---stderr---\n{}\n-----------",
        res.stderr
    );
    assert!(res.stderr.contains("  play"));
}

#[test]
fn a4_deal_is_deterministic_for_a_seed() {
    let cli = CliRunner::new();
    let first = cli.run(&["deal", "--size", "5", "--seed", "31", "--path"]);
    let second = cli.run(&["deal", "--size", "5", "--seed", "31", "--path"]);

    assert_eq!(first.exit_code, 0, "stderr={}", first.stderr);
    assert_eq!(first.stdout, second.stdout);
    assert!(first.stdout.starts_with("Seed: 31\nSize: 5x5\n"));
}

#[test]
fn a5_deal_rejects_out_of_range_size() {
    let cli = CliRunner::new();
    for size in ["1", "256"] {
        let res = cli.run(&["deal", "--size", size]);
        assert_eq!(res.exit_code, 2, "size {} should be rejected", size);
        assert!(res.stderr.contains("Invalid board size"));
        assert!(res.stdout.is_empty());
    }
}

#[test]
fn a6_deal_with_zero_minimum_can_return_solved_board() {
    let cli = CliRunner::new();
    let res = cli.run(&["deal", "--size", "2", "--shuffle-min", "0", "--seed", "3"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Scramble: 0 moves (minimum 0)"));
}

#[test]
fn a7_debug_logging_goes_to_stderr() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(
        &["deal", "--size", "3", "--seed", "1"],
        &[("RUST_LOG", "slidepuzzle_engine=debug")],
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("board scrambled"));
    assert!(!res.stdout.contains("board scrambled"));
}

#[test]
fn a8_default_run_keeps_stderr_quiet() {
    let cli = CliRunner::new();
    let res = cli.run(&["deal", "--seed", "1"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.is_empty(), "stderr={}", res.stderr);
}

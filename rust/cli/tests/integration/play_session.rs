// P-series: interactive sessions driven through piped stdin

use crate::helpers::cli_runner::CliRunner;
use crate::helpers::records::solving_moves;
use slidepuzzle_engine::board::Board;
use slidepuzzle_engine::logger::GameRecord;
use slidepuzzle_engine::rules::BoardConfig;
use std::fs;

fn input_for(moves: &[slidepuzzle_engine::position::Position]) -> String {
    moves
        .iter()
        .map(|p| format!("{} {}\n", p.col, p.row))
        .collect()
}

#[test]
fn p1_quit_ends_session() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play", "--seed", "11"], "quit\n");

    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("play: size=4 shuffle_min=40 seed=11"));
    assert!(res.stdout.contains("Games played: 1 (solved: 0)"));
}

#[test]
fn p2_closed_stdin_ends_session() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play", "--size", "3", "--seed", "4"], "");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Games played: 1"));
}

#[test]
fn p3_solving_and_recording_round_trips_through_verify() {
    let cli = CliRunner::new();
    let seed = 1234;
    let board = Board::new_with_seed(BoardConfig::new(3, 30).unwrap(), seed);
    let moves = solving_moves(&board);
    let record_path = cli.dir().join("games.jsonl");
    let record_arg = record_path.to_string_lossy().into_owned();

    let seed_arg = seed.to_string();
    let res = cli.run_with_input(
        &[
            "play",
            "--size",
            "3",
            "--shuffle-min",
            "30",
            "--seed",
            seed_arg.as_str(),
            "--record",
            record_arg.as_str(),
        ],
        &format!("{}n\n", input_for(&moves)),
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains(&format!(
        "Congratulations! Solved in {} moves.",
        moves.len()
    )));

    let content = fs::read_to_string(&record_path).unwrap();
    let record: GameRecord = serde_json::from_str(content.trim_end()).unwrap();
    assert!(record.solved);
    assert_eq!(record.moves, moves);
    assert_eq!(record.scramble, board.move_history());
    assert!(record.ts.is_some());

    let verified = cli.run(&["verify", "--input", record_arg.as_str()]);
    assert_eq!(verified.exit_code, 0, "stderr={}", verified.stderr);
    assert!(verified.stdout.contains("Verify: OK (1 games, 1 solved)"));
}

#[test]
fn p4_unfinished_game_is_recorded_and_verifies() {
    let cli = CliRunner::new();
    let record_path = cli.dir().join("partial.jsonl");
    let record_arg = record_path.to_string_lossy().into_owned();

    // One legal slide, one illegal cell, then quit
    let res = cli.run_with_input(
        &["play", "--seed", "77", "--record", record_arg.as_str()],
        "right\n0 0\nq\n",
    );
    assert_eq!(res.exit_code, 0);

    let record: GameRecord =
        serde_json::from_str(fs::read_to_string(&record_path).unwrap().trim_end()).unwrap();
    assert!(!record.solved);
    assert_eq!(record.moves.len(), 1);

    let verified = cli.run(&["verify", "--input", record_arg.as_str()]);
    assert_eq!(verified.exit_code, 0, "stderr={}", verified.stderr);
    assert!(verified.stdout.contains("Verify: OK (1 games, 0 solved)"));
}

#[test]
fn p5_bad_input_is_reported_on_stderr() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play", "--seed", "2"], "teleport\n7\nq\n");
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("Error: Unrecognized input: teleport"));
    assert!(res.stderr.contains("Error: A cell needs a column and a row"));
}

// C-series: defaults < config file < environment < command-line flags

use crate::helpers::cli_runner::CliRunner;
use std::fs;

fn cfg_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("cfg prints JSON")
}

#[test]
fn c1_cfg_reports_defaults() {
    let cli = CliRunner::new();
    let res = cli.run(&["cfg"]);
    assert_eq!(res.exit_code, 0);

    let json = cfg_json(&res.stdout);
    assert_eq!(json["size"]["value"], 4);
    assert_eq!(json["shuffle_min"]["value"], 40);
    for key in ["size", "shuffle_min", "seed"] {
        assert_eq!(json[key]["source"], "default");
    }
}

#[test]
fn c2_file_then_env_override() {
    let cli = CliRunner::new();
    let path = cli.dir().join("puzzle.toml");
    fs::write(&path, "size = 3\nshuffle_min = 12\nseed = 5\n").unwrap();
    let path_str = path.to_string_lossy().into_owned();

    let res = cli.run_with_env(
        &["cfg"],
        &[
            ("SLIDEPUZZLE_CONFIG", path_str.as_str()),
            ("SLIDEPUZZLE_SHUFFLE_MIN", "20"),
        ],
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let json = cfg_json(&res.stdout);
    assert_eq!(json["size"]["value"], 3);
    assert_eq!(json["size"]["source"], "file");
    assert_eq!(json["shuffle_min"]["value"], 20);
    assert_eq!(json["shuffle_min"]["source"], "env");
    assert_eq!(json["seed"]["value"], 5);
}

#[test]
fn c3_flags_beat_environment() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(
        &["deal", "--size", "3", "--seed", "8"],
        &[("SLIDEPUZZLE_SIZE", "6"), ("SLIDEPUZZLE_SEED", "2")],
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Seed: 8"));
    assert!(res.stdout.contains("Size: 3x3"));
}

#[test]
fn c4_environment_applies_without_flags() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(
        &["deal"],
        &[("SLIDEPUZZLE_SIZE", "6"), ("SLIDEPUZZLE_SEED", "2")],
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Seed: 2"));
    assert!(res.stdout.contains("Size: 6x6"));
}

#[test]
fn c5_invalid_config_file_is_an_error() {
    let cli = CliRunner::new();
    let path = cli.dir().join("bad.toml");
    fs::write(&path, "colour = \"blue\"\n").unwrap();
    let path_str = path.to_string_lossy().into_owned();

    for cmd in ["cfg", "deal"] {
        let res = cli.run_with_env(&[cmd], &[("SLIDEPUZZLE_CONFIG", path_str.as_str())]);
        assert_eq!(res.exit_code, 2, "{} should fail", cmd);
        assert!(res.stderr.contains("cannot parse config file"), "stderr={}", res.stderr);
    }
}

#[test]
fn c6_missing_config_file_is_an_error() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(&["cfg"], &[("SLIDEPUZZLE_CONFIG", "/nonexistent/puzzle.toml")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot read config file"));
}

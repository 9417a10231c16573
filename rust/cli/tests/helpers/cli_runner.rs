use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Variables that would otherwise leak the developer's setup into test runs.
const SCRUBBED_ENV: &[&str] = &[
    "SLIDEPUZZLE_CONFIG",
    "SLIDEPUZZLE_SIZE",
    "SLIDEPUZZLE_SHUFFLE_MIN",
    "SLIDEPUZZLE_SEED",
    "RUST_LOG",
];

#[derive(Debug)]
pub struct CliRunner {
    binary_path: PathBuf,
    temp_dir: tempfile::TempDir,
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

impl CliRunner {
    pub fn new() -> Self {
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_slidepuzzle")),
            temp_dir: tempfile::tempdir().expect("failed to create temporary CLI workspace"),
        }
    }

    /// Scratch directory the binary runs in.
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], None)
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_inner(args, env, None)
    }

    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_inner(args, &[], Some(input))
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: Option<&str>) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env {
            cmd.env(key, value);
        }

        let start = Instant::now();
        let mut child = cmd.spawn().expect("failed to spawn CLI binary");

        if let Some(payload) = input {
            use std::io::Write as _;
            // Dropping the handle closes stdin so the session sees EOF
            if let Some(mut stdin) = child.stdin.take() {
                let _ = stdin.write_all(payload.as_bytes());
            }
        }

        let output = child.wait_with_output().expect("failed to read output");
        CliResult {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            duration: start.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliRunner;

    #[test]
    fn run_with_input_accepts_empty_payload() {
        let cli = CliRunner::new();
        let result = cli.run_with_input(&["--help"], "");

        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.contains("Usage"));
    }

    #[test]
    fn runs_inside_scratch_directory() {
        let cli = CliRunner::new();
        assert!(cli.dir().is_dir());
    }
}

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// TestHarness provides an isolated working directory for running the
/// docgrade binary. `HOME` points into the temporary directory so no global
/// config leaks into a test.
pub struct TestHarness {
    pub dir: TempDir,
    #[allow(dead_code)]
    pub config_path: PathBuf,
    pub docgrade_binary: PathBuf,
}

impl TestHarness {
    /// Creates a new test harness without any config file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join(".docgrade/config.md");

        TestHarness {
            dir: temp_dir,
            config_path,
            docgrade_binary: PathBuf::from(env!("CARGO_BIN_EXE_docgrade")),
        }
    }

    /// Creates a test harness with a project config.
    #[allow(dead_code)]
    pub fn with_config(config_content: &str) -> Self {
        let harness = Self::new();
        fs::create_dir_all(harness.config_path.parent().unwrap())
            .expect("Failed to create config dir");
        fs::write(&harness.config_path, config_content).expect("Failed to write config");
        harness
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` to `name` inside the harness directory and returns its path.
    #[allow(dead_code)]
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.docgrade_binary);
        cmd.args(args)
            .current_dir(self.path())
            .env("HOME", self.path())
            .env("NO_COLOR", "1")
            .env("CLICOLOR", "0")
            .env_remove("CLICOLOR_FORCE")
            .env_remove("DOCGRADE_LOG")
            .env_remove("DOCGRADE_QUIET");
        cmd
    }

    /// Executes the docgrade binary with the given arguments in the harness directory.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .stdin(Stdio::null())
            .output()
            .expect("Failed to run docgrade")
    }

    /// Executes the docgrade binary feeding `input` on stdin.
    #[allow(dead_code)]
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn docgrade");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");

        child.wait_with_output().expect("Failed to wait for docgrade")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout of a finished run as a string.
#[allow(dead_code)]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

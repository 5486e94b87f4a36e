//! Helpers for driving the `kamel` binary from integration tests.

use assert_cmd::Command;
use std::path::PathBuf;
use std::process::ExitStatus;
use tempfile::TempDir;

/// Isolated working directory and home directory for one test.
pub struct KamelWorkspace {
    _temp: TempDir,
    pub root: PathBuf,
    pub home: PathBuf,
}

impl KamelWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let root = temp.path().join("work");
        let home = temp.path().join("home");
        std::fs::create_dir_all(&root).expect("create work dir");
        std::fs::create_dir_all(&home).expect("create home dir");
        Self {
            _temp: temp,
            root,
            home,
        }
    }

    /// The settings file used when no `--folder` is given.
    pub fn default_config(&self) -> PathBuf {
        self.root.join("kamel-config.yaml")
    }
}

pub struct CmdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// A `kamel` command running inside `workspace` with no `KAMEL_*` leakage
/// from the test environment.
pub fn kamel_cmd(workspace: &KamelWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("kamel").expect("kamel binary");
    cmd.current_dir(&workspace.root)
        .env("HOME", &workspace.home)
        .env_remove("KAMEL_CONFIG_PATH")
        .env_remove("KAMEL_CONFIG_NAME")
        .env_remove("KAMEL_LOG");
    cmd
}

pub fn run_kamel<I, S>(workspace: &KamelWorkspace, args: I, label: &str) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    run_kamel_with_env(workspace, args, std::iter::empty::<(&str, &str)>(), label)
}

pub fn run_kamel_with_env<I, S, E, K, V>(
    workspace: &KamelWorkspace,
    args: I,
    env: E,
    label: &str,
) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
    E: IntoIterator<Item = (K, V)>,
    K: AsRef<std::ffi::OsStr>,
    V: AsRef<std::ffi::OsStr>,
{
    let mut cmd = kamel_cmd(workspace);
    cmd.args(args).envs(env);

    let output = cmd.output().unwrap_or_else(|e| panic!("{label}: {e}"));
    CmdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

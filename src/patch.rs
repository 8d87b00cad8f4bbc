//! Patch Step
//!
//! Runs the database patch utility to completion before the server
//! starts. The outcome is reported but never blocks the launch.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{info, warn};

use crate::config::LauncherConfig;

/// Outcome of the patch invocation.
#[derive(Debug)]
pub struct PatchOutcome {
    pub success: bool,
    /// Exit code of the patch process, if it exited normally.
    pub exit_code: Option<i32>,
}

/// Build the patch command for `config`, rooted at `work_dir`.
pub fn patch_command(config: &LauncherConfig, work_dir: &Path) -> Command {
    let mut cmd = Command::new(&config.python_bin);
    cmd.arg(&config.patch_script).current_dir(work_dir);
    cmd
}

/// Run the patch utility and wait for it to exit.
///
/// Only a spawn failure is an error. A non-zero exit from the patch
/// process itself is logged and reported in the outcome; the caller
/// decides whether to act on it.
pub async fn run_patch(config: &LauncherConfig, work_dir: &Path) -> Result<PatchOutcome> {
    info!(
        "Running patch: {} {}",
        config.python_bin, config.patch_script
    );

    let status = patch_command(config, work_dir)
        .status()
        .await
        .with_context(|| {
            format!(
                "failed to run patch utility: {} {}",
                config.python_bin, config.patch_script
            )
        })?;

    let outcome = PatchOutcome {
        success: status.success(),
        exit_code: status.code(),
    };

    if !outcome.success {
        warn!(
            "Patch exited with status {:?}; database may not be migrated",
            outcome.exit_code
        );
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_command_shape() {
        let config = LauncherConfig::default();
        let dir = tempfile::tempdir().unwrap();
        let cmd = patch_command(&config, dir.path());

        let std_cmd = cmd.as_std();
        assert_eq!(std_cmd.get_program(), "python");
        let args: Vec<_> = std_cmd.get_args().map(|a| a.to_str().unwrap()).collect();
        assert_eq!(args, vec!["sqlite_patch.py"]);
        assert_eq!(std_cmd.get_current_dir(), Some(dir.path()));
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("fail.sh"), "exit 7\n").unwrap();

        let config = LauncherConfig {
            python_bin: "/bin/sh".to_string(),
            patch_script: "fail.sh".to_string(),
            ..LauncherConfig::default()
        };

        let outcome = run_patch(&config, dir.path()).await.unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.exit_code, Some(7));
    }

    #[tokio::test]
    async fn test_missing_interpreter_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = LauncherConfig {
            python_bin: "/nonexistent/interpreter".to_string(),
            ..LauncherConfig::default()
        };

        assert!(run_patch(&config, dir.path()).await.is_err());
    }
}

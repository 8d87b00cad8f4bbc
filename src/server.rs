//! Server Step
//!
//! Builds and runs the application server process. The module search
//! path is injected so the server's runtime resolves application code
//! from the launch directory. Does not return until the server exits.

use std::path::Path;
use std::process::ExitStatus;

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::info;

use crate::config::LauncherConfig;

/// Environment variable naming the module search path for the server
/// process's runtime.
pub const MODULE_PATH_VAR: &str = "PYTHONPATH";

/// Build the server command for `config`.
///
/// The child runs in `work_dir` with [`MODULE_PATH_VAR`] set to that
/// directory, plus any `extra_env` the preflight check produced.
pub fn server_command(
    config: &LauncherConfig,
    work_dir: &Path,
    extra_env: &[(String, String)],
) -> Command {
    let mut cmd = Command::new(&config.server_bin);
    cmd.arg(&config.app_ref)
        .arg("--host")
        .arg(&config.host)
        .arg("--port")
        .arg(config.port.to_string())
        .arg("--log-level")
        .arg(&config.log_level)
        .current_dir(work_dir)
        .env(MODULE_PATH_VAR, work_dir);

    for (key, value) in extra_env {
        cmd.env(key, value);
    }

    cmd
}

/// Start the server and wait for it to exit.
pub async fn run_server(
    config: &LauncherConfig,
    work_dir: &Path,
    extra_env: &[(String, String)],
) -> Result<ExitStatus> {
    info!(
        "Starting server: {} {} on {}:{} (log level {})",
        config.server_bin, config.app_ref, config.host, config.port, config.log_level
    );

    let status = server_command(config, work_dir, extra_env)
        .status()
        .await
        .with_context(|| format!("failed to start server: {}", config.server_bin))?;

    info!("Server exited with status {:?}", status.code());
    Ok(status)
}

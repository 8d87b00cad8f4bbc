//! Launch Sequence
//!
//! The launcher's single operation: SQLite preflight, patch step, then
//! the server. The patch step always precedes the server step, and its
//! failure never blocks the server from starting.

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use crate::config::LauncherConfig;
use crate::{patch, preflight, server};

/// Run the full launch sequence rooted at `work_dir`.
///
/// Returns the exit code the launcher should exit with: the server's
/// exit code, or 1 if the server was terminated by a signal.
pub async fn run(config: &LauncherConfig, work_dir: &Path) -> Result<i32> {
    let report = preflight::check_sqlite();

    // The server starts regardless of the patch outcome.
    if let Err(e) = patch::run_patch(config, work_dir).await {
        warn!("Patch step could not run: {:#}; starting server anyway", e);
    }

    let status = server::run_server(config, work_dir, &report.server_env()).await?;
    Ok(status.code().unwrap_or(1))
}

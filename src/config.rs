//! Launcher Configuration
//!
//! Loads the launcher's configuration from an optional `launcher.json`
//! in the working directory. A missing file or missing keys fall back
//! to the stock launch parameters.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file name within the working directory.
pub const CONFIG_FILENAME: &str = "launcher.json";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LauncherConfig {
    /// Interpreter used to run the patch script.
    pub python_bin: String,
    /// Patch script run to completion before the server starts.
    pub patch_script: String,
    /// Server binary that loads and serves the application.
    pub server_bin: String,
    /// Application object reference passed to the server.
    pub app_ref: String,
    /// Interface the server binds to.
    pub host: String,
    /// TCP port the server listens on.
    pub port: u16,
    /// Server log verbosity.
    pub log_level: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            python_bin: "python".to_string(),
            patch_script: "sqlite_patch.py".to_string(),
            server_bin: "uvicorn".to_string(),
            app_ref: "main:app".to_string(),
            host: "0.0.0.0".to_string(),
            port: 9000,
            log_level: "debug".to_string(),
        }
    }
}

/// Load the launcher config from `dir`.
///
/// Reads `launcher.json` if present; keys absent from the file keep
/// their defaults. Returns the stock config when the file does not
/// exist, and an error when it exists but cannot be read or parsed.
pub fn load_config(dir: &Path) -> Result<LauncherConfig> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(LauncherConfig::default());
    }

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    let config: LauncherConfig = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;

    Ok(config)
}

//! Publisher Launcher
//!
//! Entry point for the Automated Book Publisher launcher: runs the
//! database patch step, then starts the application server on port
//! 9000. Execution is unconditional; there are no functional flags.

use std::env;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use publisher_launcher::{config, launch, logging};

/// Launch the Automated Book Publisher application server.
#[derive(Parser, Debug)]
#[command(
    name = "publisher-launcher",
    version,
    about = "Patch the database, then start the Automated Book Publisher server"
)]
struct Cli {}

async fn run() -> Result<i32> {
    let work_dir = env::current_dir().context("failed to resolve working directory")?;
    let config = config::load_config(&work_dir)?;
    launch::run(&config, &work_dir).await
}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();
    logging::init();

    match run().await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("Fatal: {:#}", e);
            std::process::exit(1);
        }
    }
}

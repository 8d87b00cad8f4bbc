//! Publisher Launcher
//!
//! Process orchestration for the Automated Book Publisher: a database
//! patch step followed by the application server, in that order.

pub mod config;
pub mod launch;
pub mod logging;
pub mod patch;
pub mod preflight;
pub mod server;

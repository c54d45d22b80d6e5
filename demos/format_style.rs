//! Format-style logging with the level macros
//!
//! Run with: cargo run --example format_style

use simple_console_logger::prelude::*;
use simple_console_logger::{debug, error, info, warn};

fn main() -> Result<()> {
    let logger = Logger::builder().min_level(LogLevel::Info).build();
    let arr = [0, 1, 2, 3];

    debug!(logger, "This message shouldn't be printed!")?;
    info!(logger, "Info message: {:?}: {}", arr, arr.len())?;
    warn!(logger, "Warn message: {:?}: {}", arr, arr.len())?;
    error!(logger, "Error message: {:?}: {}", arr, arr.len())?;

    let now = chrono::Local::now();
    info!(logger, "Info message: current_time: {}", now.format("%Y-%m-%d %H:%M:%S"))?;
    warn!(logger, "Warn message: current_time: {}", now.format("%Y-%m-%d %H:%M:%S"))?;
    error!(logger, "Error message: current_time: {}", now.format("%Y-%m-%d %H:%M:%S"))?;

    Ok(())
}

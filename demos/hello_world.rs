//! Basic logger usage example
//!
//! Logs at every level with the default (all levels) threshold.
//!
//! Run with: cargo run --example hello_world

use simple_console_logger::prelude::*;

fn main() -> Result<()> {
    let logger = Logger::from_env()?;

    logger.trace("Trace message: Hello, world 2023!")?;
    logger.debug("Debug message: Hello, world 2023!")?;
    logger.info("Info message: Hello, world 2023!")?;
    logger.warn("Warn message: Hello, world 2023!")?;
    logger.error("Error message: Hello, world 2023!")?;
    logger.fatal("Fatal message: Hello, world 2023!")?;

    Ok(())
}

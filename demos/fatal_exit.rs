//! Opt-in termination on fatal
//!
//! The second line is never printed: the fatal record flushes the logger and
//! exits the process with status 3.
//!
//! Run with: cargo run --example fatal_exit

use simple_console_logger::prelude::*;

fn main() -> Result<()> {
    let logger = Logger::builder()
        .target(Target::Split)
        .fatal_policy(FatalPolicy::Exit(3))
        .build();

    logger.info("About to fail.")?;
    logger.fatal("Fatal message.")?;
    logger.info("This message shouldn't be printed!")?;

    Ok(())
}

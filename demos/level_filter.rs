//! Threshold example
//!
//! Walks the minimum level from trace up to off; each step prints a header
//! and the lines that survive the filter.
//!
//! Run with: cargo run --example level_filter

use simple_console_logger::prelude::*;

fn main() -> Result<()> {
    let logger = Logger::new();

    let thresholds = LogLevel::ALL
        .iter()
        .copied()
        .map(LevelFilter::from)
        .chain(std::iter::once(LevelFilter::Off));

    for threshold in thresholds {
        println!("min_level = {}:", threshold);
        logger.set_min_level(threshold);
        for level in LogLevel::ALL {
            logger.log(level, format!("{} message.", level))?;
        }
    }

    Ok(())
}

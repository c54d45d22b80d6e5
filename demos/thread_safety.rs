//! Concurrent logging example
//!
//! 128 threads share one logger; every line comes out whole.
//!
//! Run with: cargo run --example thread_safety

use simple_console_logger::prelude::*;
use std::thread;

const NTHREADS: usize = 128;

fn main() -> Result<()> {
    let logger = Logger::new();
    let argc = std::env::args().count();

    let handles: Vec<_> = (0..NTHREADS)
        .map(|i| {
            let logger = logger.clone();
            thread::spawn(move || {
                thread::yield_now();
                logger.info(format!("Thread-safe log. [argc: {}] At Index: {}.", argc, i))
            })
        })
        .collect();

    for handle in handles {
        match handle.join() {
            Ok(result) => result?,
            Err(_) => eprintln!("logging thread panicked"),
        }
    }

    Ok(())
}

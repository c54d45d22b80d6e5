//! Criterion benchmarks for simple_console_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use simple_console_logger::appenders::ConsoleAppender;
use simple_console_logger::prelude::*;
use simple_console_logger::LineFormatter;
use std::io;
use std::sync::Arc;
use std::thread;

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let record = LogRecord::new(LogLevel::Warn, "Warn message: Hello, world 2023!");

    group.bench_function("plain_line", |b| {
        b.iter(|| black_box(LineFormatter.format(black_box(&record))));
    });

    let colored = ConsoleAppender::with_writer(io::sink()).with_colors(true);
    group.bench_function("colored_line", |b| {
        b.iter(|| black_box(colored.render(black_box(&record))));
    });

    group.bench_function("record_capture", |b| {
        b.iter(|| black_box(LogRecord::new(LogLevel::Info, black_box("Info message"))));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder().writer(io::sink()).build();

    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("error_colored", |b| {
        let colored = Logger::builder()
            .writer(io::sink())
            .color(ColorMode::Always)
            .build();
        b.iter(|| colored.error(black_box("Error message")));
    });

    let filtered = Logger::builder()
        .writer(io::sink())
        .min_level(LogLevel::Warn)
        .build();
    group.bench_function("filtered_debug", |b| {
        b.iter(|| filtered.debug(black_box("Debug message")));
    });

    group.bench_function("filtered_macro", |b| {
        b.iter(|| simple_console_logger::debug!(filtered, "value {}", black_box(42)));
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    for nthreads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((nthreads * 100) as u64));
        group.bench_function(format!("{}_threads", nthreads), |b| {
            let logger = Arc::new(Logger::builder().writer(io::sink()).build());
            b.iter(|| {
                let handles: Vec<_> = (0..nthreads)
                    .map(|t| {
                        let logger = Arc::clone(&logger);
                        thread::spawn(move || {
                            for i in 0..100 {
                                let _ = logger.info(format!("thread {} message {}", t, i));
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_formatting,
    bench_logging,
    bench_concurrent_logging
);
criterion_main!(benches);

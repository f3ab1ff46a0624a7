mod engine;
mod models;
mod types;

use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use crate::engine::SweepEngine;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("--help") | Some("-h") => {
            print_usage();
            return Ok(());
        }
        _ => {}
    }

    let stem = &args[1];
    let log_level = args
        .get(2)
        .map(|s| parse_log_level(s))
        .unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let engine = SweepEngine::new();

    let timer = Instant::now();
    let report = engine.run(stem)?;
    let duration = timer.elapsed();

    info!("Swept {stem}.csv in: {duration:?}");

    println!(
        "Wrote {} ({} rows) and {} ({} rows)",
        report.cleaned_path.display(),
        report.kept_rows,
        report.discarded_path.display(),
        report.discarded_rows
    );

    Ok(())
}

fn print_usage() {
    println!("Usage: contra-sweep [filename] [log_level:optional]");
    println!("Reads [filename].csv (given without the .csv extension), moves mutually");
    println!("offsetting transaction pairs out, and writes [filename]-cleaned.csv and");
    println!("[filename]-discarded.csv with running debit/credit/balance columns.");
    println!("Available log levels: error, warn, info, debug, trace (default: error)");
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    // Confirmation output goes to stdout, so logging stays on stderr.
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}

//! fxbench runner
//!
//! Runs the full benchmark suite and prints the report.

use clap::Parser;
use fxbench::{report, BenchConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// File-access benchmark runner
#[derive(Parser, Debug)]
#[command(name = "fxbench")]
#[command(about = "File-access benchmark over fixed-width currency-rate records")]
#[command(version)]
struct Args {
    /// Data directory for benchmark files
    #[arg(short, long, default_value = "./fxbench_data")]
    data_dir: String,

    /// Record counts to run, one trial per backend per count
    #[arg(short = 'c', long, value_delimiter = ',', default_values_t = vec![10_000, 50_000, 100_000])]
    record_counts: Vec<usize>,

    /// Random reads per trial
    #[arg(short, long, default_value = "1000")]
    random_reads: usize,

    /// Settle pause between write and read phases, in milliseconds
    #[arg(long, default_value = "100")]
    settle_ms: u64,

    /// RNG seed for record generation and read indices
    #[arg(short, long, default_value = "42")]
    seed: u64,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fxbench=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("fxbench v{}", fxbench::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);
    tracing::info!("Record counts: {:?}", args.record_counts);

    let config = BenchConfig::builder()
        .data_dir(&args.data_dir)
        .record_counts(args.record_counts)
        .random_reads(args.random_reads)
        .settle_pause(std::time::Duration::from_millis(args.settle_ms))
        .seed(args.seed)
        .build();

    let results = match fxbench::run_suite(&config, &mut ()) {
        Ok(results) => results,
        Err(e) => {
            tracing::error!("suite failed: {}", e);
            std::process::exit(1);
        }
    };

    print!("{}", report::render_suite(&results));
}

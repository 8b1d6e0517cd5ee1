//! fxbench data-file generator
//!
//! Writes synthetic record files to disk for reuse across benchmark runs,
//! using the same codec and generator as the harness.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::Parser;
use fxbench::backend::{ChannelBackend, FileBackend};
use fxbench::{CurrencyRate, RateGenerator};
use tracing_subscriber::{fmt, EnvFilter};

/// Synthetic data-file generator
#[derive(Parser, Debug)]
#[command(name = "fxbench-datagen")]
#[command(about = "Generate synthetic currency-rate data files")]
#[command(version)]
struct Args {
    /// Output directory
    #[arg(short, long, default_value = ".")]
    out_dir: String,

    /// Record counts, one file per count
    #[arg(short = 'c', long, value_delimiter = ',', default_values_t = vec![10_000, 50_000, 100_000])]
    record_counts: Vec<usize>,

    /// RNG seed
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Also write a CSV text export next to each binary file
    #[arg(long)]
    text: bool,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fxbench=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        tracing::error!("datagen failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> fxbench::Result<()> {
    let out_dir = Path::new(&args.out_dir);
    std::fs::create_dir_all(out_dir)?;

    let backend = ChannelBackend;

    for &count in &args.record_counts {
        let records = RateGenerator::new(args.seed).generate(count);

        let bin_path = out_dir.join(format!("currency_rates_{}.dat", count));
        backend.write_records(&records, &bin_path)?;
        tracing::info!("wrote {} records to {}", count, bin_path.display());

        if args.text {
            let text_path = out_dir.join(format!("currency_rates_{}.csv", count));
            write_text_file(&records, &text_path)?;
            tracing::info!("wrote text export to {}", text_path.display());
        }
    }

    Ok(())
}

/// CSV export: one `code,rate,timestamp,base` line per record
fn write_text_file(records: &[CurrencyRate], path: &Path) -> fxbench::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        writeln!(
            writer,
            "{},{:.6},{},{}",
            record.currency_code,
            record.rate,
            record.timestamp.format("%Y-%m-%dT%H:%M:%S"),
            record.base_currency
        )?;
    }
    writer.flush()?;
    Ok(())
}

//! Configuration for fxbench
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;
use std::time::Duration;

/// Record counts exercised by the default suite
pub const DEFAULT_RECORD_COUNTS: [usize; 3] = [10_000, 50_000, 100_000];

/// Main configuration for a benchmark suite
#[derive(Debug, Clone)]
pub struct BenchConfig {
    // -------------------------------------------------------------------------
    // Data Configuration
    // -------------------------------------------------------------------------
    /// Directory for benchmark data files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── random_access_{count}.dat
    ///     ├── channel_{count}.dat
    ///     └── mmap_{count}.dat
    pub data_dir: PathBuf,

    /// Record counts to run, one trial per (backend, count) pair
    pub record_counts: Vec<usize>,

    // -------------------------------------------------------------------------
    // Trial Configuration
    // -------------------------------------------------------------------------
    /// Random reads issued per trial (capped at the record count)
    pub random_reads: usize,

    /// Pause between the write and read phases of a trial
    pub settle_pause: Duration,

    /// Seed for record generation and read index selection
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./fxbench_data"),
            record_counts: DEFAULT_RECORD_COUNTS.to_vec(),
            random_reads: 1000,
            settle_pause: Duration::from_millis(100),
            seed: 42,
        }
    }
}

impl BenchConfig {
    /// Create a new config builder
    pub fn builder() -> BenchConfigBuilder {
        BenchConfigBuilder::default()
    }
}

/// Builder for BenchConfig
#[derive(Default)]
pub struct BenchConfigBuilder {
    config: BenchConfig,
}

impl BenchConfigBuilder {
    /// Set the data directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the record counts to run
    pub fn record_counts(mut self, counts: impl Into<Vec<usize>>) -> Self {
        self.config.record_counts = counts.into();
        self
    }

    /// Set the number of random reads per trial
    pub fn random_reads(mut self, count: usize) -> Self {
        self.config.random_reads = count;
        self
    }

    /// Set the settle pause between write and read phases
    pub fn settle_pause(mut self, pause: Duration) -> Self {
        self.config.settle_pause = pause;
        self
    }

    /// Set the RNG seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn build(self) -> BenchConfig {
        self.config
    }
}

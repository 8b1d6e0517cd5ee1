//! Tests for the benchmark harness
//!
//! These tests verify:
//! - Deterministic record generation under a fixed seed
//! - Trial result shape and the random-read cap
//! - The strictly-sequential trial ordering guarantee

use std::time::Duration;

use fxbench::backend::{BackendKind, SeekBackend};
use fxbench::bench::{run_suite, MemoryProfiler, Trial, TrialObserver};
use fxbench::record::{RateGenerator, CURRENCIES};
use fxbench::BenchConfig;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn test_config(temp_dir: &TempDir) -> BenchConfig {
    BenchConfig::builder()
        .data_dir(temp_dir.path())
        .record_counts(vec![25])
        .random_reads(10)
        .settle_pause(Duration::from_millis(1))
        .seed(7)
        .build()
}

// =============================================================================
// Generator Tests
// =============================================================================

#[test]
fn test_generator_is_deterministic() {
    let a = RateGenerator::new(123).generate(500);
    let b = RateGenerator::new(123).generate(500);

    assert_eq!(a, b);
}

#[test]
fn test_generator_seeds_are_independent() {
    let a = RateGenerator::new(1).generate(100);
    let b = RateGenerator::new(2).generate(100);

    assert_ne!(a, b);
}

#[test]
fn test_generator_cycles_currencies() {
    let records = RateGenerator::new(7).generate(25);

    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.currency_code, CURRENCIES[i % CURRENCIES.len()]);
        assert_eq!(record.base_currency, "USD");
    }
}

#[test]
fn test_generator_timestamps_increase_hourly() {
    let records = RateGenerator::new(7).generate(10);

    for pair in records.windows(2) {
        assert_eq!(pair[1].timestamp - pair[0].timestamp, chrono::Duration::hours(1));
    }
}

#[test]
fn test_generator_rates_in_range() {
    let records = RateGenerator::new(7).generate(1_000);

    for record in &records {
        assert!(record.rate >= 0.5 && record.rate < 150.5);
    }
}

// =============================================================================
// Trial Tests
// =============================================================================

#[test]
fn test_trial_result_shape() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);
    let path = temp_dir.path().join("trial.dat");
    let mut profiler = MemoryProfiler::new();

    let backend = SeekBackend;
    let result = Trial::new(&backend, 25, path, &config)
        .run(&mut profiler)
        .unwrap();

    assert_eq!(result.backend_name, "random-access");
    assert_eq!(result.record_count, 25);
    assert_eq!(result.records_read, 25);
    assert!(result.integrity_ok());
    assert_eq!(result.random_reads, 10);
}

#[test]
fn test_trial_caps_random_reads_at_record_count() {
    let temp_dir = TempDir::new().unwrap();
    let config = BenchConfig::builder()
        .data_dir(temp_dir.path())
        .random_reads(1000)
        .settle_pause(Duration::from_millis(1))
        .seed(7)
        .build();
    let path = temp_dir.path().join("trial.dat");
    let mut profiler = MemoryProfiler::new();

    let backend = SeekBackend;
    let result = Trial::new(&backend, 5, path, &config)
        .run(&mut profiler)
        .unwrap();

    assert_eq!(result.random_reads, 5);
}

#[test]
fn test_trial_with_zero_records() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);
    let path = temp_dir.path().join("empty.dat");
    let mut profiler = MemoryProfiler::new();

    let backend = SeekBackend;
    let result = Trial::new(&backend, 0, path, &config)
        .run(&mut profiler)
        .unwrap();

    assert_eq!(result.records_read, 0);
    assert_eq!(result.random_reads, 0);
    assert!(result.integrity_ok());
}

// =============================================================================
// Suite Tests
// =============================================================================

#[test]
fn test_suite_runs_every_backend_per_count() {
    let temp_dir = TempDir::new().unwrap();
    let config = BenchConfig::builder()
        .data_dir(temp_dir.path())
        .record_counts(vec![10, 20])
        .random_reads(5)
        .settle_pause(Duration::from_millis(1))
        .seed(7)
        .build();

    let results = run_suite(&config, &mut ()).unwrap();

    assert_eq!(results.len(), 6);

    let expected_names = ["random-access", "channel-buffered", "memory-mapped"];
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.backend_name, expected_names[i % 3]);
        assert_eq!(result.record_count, if i < 3 { 10 } else { 20 });
        assert!(result.integrity_ok());
    }
}

/// Records trial boundaries and tracks how many trials are open at once
#[derive(Default)]
struct RecordingObserver {
    open: usize,
    max_open: usize,
    started: Vec<(&'static str, usize)>,
    finished: Vec<(&'static str, usize)>,
}

impl TrialObserver for RecordingObserver {
    fn trial_started(&mut self, backend: &'static str, record_count: usize) {
        self.open += 1;
        self.max_open = self.max_open.max(self.open);
        self.started.push((backend, record_count));
    }

    fn trial_finished(&mut self, backend: &'static str, record_count: usize) {
        self.open -= 1;
        self.finished.push((backend, record_count));
    }
}

#[test]
fn test_trial_windows_never_overlap() {
    let temp_dir = TempDir::new().unwrap();
    let config = BenchConfig::builder()
        .data_dir(temp_dir.path())
        .record_counts(vec![10, 20])
        .random_reads(5)
        .settle_pause(Duration::from_millis(1))
        .seed(7)
        .build();

    let mut observer = RecordingObserver::default();
    run_suite(&config, &mut observer).unwrap();

    // Strictly sequential: at most one trial open at any point, and every
    // started trial finished before the next one started
    assert_eq!(observer.max_open, 1);
    assert_eq!(observer.open, 0);
    assert_eq!(observer.started.len(), 6);
    assert_eq!(observer.started, observer.finished);
}

#[test]
fn test_identical_seed_gives_identical_data_across_backends() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);

    run_suite(&config, &mut ()).unwrap();

    // Every backend wrote the same record set, so the data files are
    // byte-identical
    let reference = std::fs::read(temp_dir.path().join("random_access_25.dat")).unwrap();
    for kind in [BackendKind::Channel, BackendKind::Mmap] {
        let bytes =
            std::fs::read(temp_dir.path().join(format!("{}_25.dat", kind.file_stem()))).unwrap();
        assert_eq!(bytes, reference);
    }
}

//! Benchmark harness
//!
//! One [`Trial`] per (backend, record count) pair, stepping through a
//! fixed phase order that never loops or reorders. The record set is
//! generated once at the start of the trial and is the only state shared
//! across phases, read-only from that point on.
//!
//! [`run_suite`] runs record counts × backends strictly sequentially,
//! never concurrently, and reports trial boundaries through
//! [`TrialObserver`] so tests can assert that trial windows do not
//! overlap.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::backend::{BackendKind, FileBackend};
use crate::config::BenchConfig;
use crate::error::{FxBenchError, Result};
use crate::record::RateGenerator;

use super::memory::{settle, MemoryProfiler};

/// Phases of a trial, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TrialPhase {
    Init,
    Generate,
    Write,
    Settle,
    SequentialRead,
    RandomRead,
    Report,
    Done,
}

/// Timings and memory delta of one completed trial
///
/// Created once per trial, immutable, consumed by the report renderer.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub backend_name: &'static str,
    pub record_count: usize,
    pub write_time: Duration,
    pub sequential_read_time: Duration,
    pub random_read_time: Duration,
    /// Random reads actually issued: min(configured, record_count)
    pub random_reads: usize,
    /// RSS delta sampled around the settle / read phases (signed)
    pub memory_delta_bytes: i64,
    /// Decoded record count from the sequential pass
    pub records_read: usize,
}

impl BenchmarkResult {
    /// False when the sequential pass decoded a different number of
    /// records than were generated (a non-fatal integrity mismatch)
    pub fn integrity_ok(&self) -> bool {
        self.records_read == self.record_count
    }
}

/// Observer for trial boundaries
pub trait TrialObserver {
    fn trial_started(&mut self, backend: &'static str, record_count: usize);
    fn trial_finished(&mut self, backend: &'static str, record_count: usize);
}

/// No-op observer
impl TrialObserver for () {
    fn trial_started(&mut self, _: &'static str, _: usize) {}
    fn trial_finished(&mut self, _: &'static str, _: usize) {}
}

/// One benchmark trial for a (backend, record count) pair
pub struct Trial<'a> {
    backend: &'a dyn FileBackend,
    record_count: usize,
    path: PathBuf,
    random_reads: usize,
    settle_pause: Duration,
    seed: u64,
    phase: TrialPhase,
}

impl<'a> Trial<'a> {
    pub fn new(
        backend: &'a dyn FileBackend,
        record_count: usize,
        path: impl Into<PathBuf>,
        config: &BenchConfig,
    ) -> Self {
        Self {
            backend,
            record_count,
            path: path.into(),
            random_reads: config.random_reads,
            settle_pause: config.settle_pause,
            seed: config.seed,
            phase: TrialPhase::Init,
        }
    }

    /// Run the trial to completion
    ///
    /// Steps:
    /// 1. Generate the record set (held in memory for the whole trial)
    /// 2. Time the write
    /// 3. Settle, then sample memory
    /// 4. Time the sequential read; flag a count mismatch
    /// 5. Time min(random_reads, record_count) random reads
    /// 6. Sample memory again and assemble the result
    pub fn run(mut self, profiler: &mut MemoryProfiler) -> Result<BenchmarkResult> {
        // GENERATE: the same seed yields the same set for every backend,
        // so all three are measured against identical data
        self.advance(TrialPhase::Generate);
        let records = RateGenerator::new(self.seed).generate(self.record_count);

        // WRITE
        self.advance(TrialPhase::Write);
        let start = Instant::now();
        self.backend.write_records(&records, &self.path)?;
        let write_time = start.elapsed();

        // SETTLE: noise gap before sampling memory, not a sync point
        self.advance(TrialPhase::Settle);
        settle(self.settle_pause);
        let memory_before = profiler.sample();

        // SEQUENTIAL_READ
        self.advance(TrialPhase::SequentialRead);
        let start = Instant::now();
        let decoded = self.backend.read_sequential(&self.path)?;
        let sequential_read_time = start.elapsed();

        if decoded.len() != records.len() {
            warn!(
                "integrity mismatch on {}: wrote {} records, read back {}",
                self.backend.name(),
                records.len(),
                decoded.len()
            );
        }

        // RANDOM_READ: indices drawn independently and uniformly from
        // a seeded RNG; each call is timed and the elapsed times summed
        self.advance(TrialPhase::RandomRead);
        let reads = self.random_reads.min(self.record_count);
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut random_read_time = Duration::ZERO;
        for _ in 0..reads {
            let index = rng.gen_range(0..self.record_count as u64);
            let start = Instant::now();
            match self.backend.read_random(&self.path, index) {
                Ok(_) => {}
                Err(
                    e @ (FxBenchError::OutOfRange { .. } | FxBenchError::MalformedRecord { .. }),
                ) => {
                    // Typed record failures skip this read; the rest proceed
                    warn!("random read skipped: {}", e);
                }
                Err(e) => return Err(e),
            }
            random_read_time += start.elapsed();
        }

        // REPORT
        self.advance(TrialPhase::Report);
        let memory_after = profiler.sample();
        let result = BenchmarkResult {
            backend_name: self.backend.name(),
            record_count: self.record_count,
            write_time,
            sequential_read_time,
            random_read_time,
            random_reads: reads,
            memory_delta_bytes: memory_after as i64 - memory_before as i64,
            records_read: decoded.len(),
        };

        self.advance(TrialPhase::Done);
        Ok(result)
    }

    /// Move to the next phase; phases only ever move forward
    fn advance(&mut self, next: TrialPhase) {
        debug_assert!(self.phase < next, "trial phases must advance in order");
        self.phase = next;
    }
}

// =============================================================================
// Suite runner
// =============================================================================

/// Run the full suite: for each record count, each backend in canonical
/// order, strictly one trial after another
///
/// A trial that fails with an I/O error is logged and skipped; the suite
/// continues with the next trial.
pub fn run_suite(
    config: &BenchConfig,
    observer: &mut dyn TrialObserver,
) -> Result<Vec<BenchmarkResult>> {
    std::fs::create_dir_all(&config.data_dir)?;

    let mut profiler = MemoryProfiler::new();
    profiler.log_usage("suite start");

    let mut results = Vec::new();

    for &count in &config.record_counts {
        info!("running trials for {} records", count);

        for kind in BackendKind::ALL {
            let backend = kind.create();
            let path = config
                .data_dir
                .join(format!("{}_{}.dat", kind.file_stem(), count));

            observer.trial_started(backend.name(), count);
            let outcome = Trial::new(backend.as_ref(), count, path, config).run(&mut profiler);
            observer.trial_finished(backend.name(), count);

            match outcome {
                Ok(result) => results.push(result),
                Err(e) => warn!("trial {} / {} failed: {}", backend.name(), count, e),
            }
        }
    }

    profiler.log_usage("suite end");
    Ok(results)
}

//! Result reporting
//!
//! Renders trial results as human-readable text. The output is for
//! people reading a terminal; nothing parses it.

use std::fmt::Write;
use std::time::Duration;

use crate::bench::BenchmarkResult;

/// Render one trial result as a multi-line block
pub fn render_result(result: &BenchmarkResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "=== {} ({} records) ===",
        result.backend_name, result.record_count
    );
    let _ = writeln!(
        out,
        "write:           {:>10.2} ms  ({:.0} records/s)",
        ms(result.write_time),
        throughput(result.record_count, result.write_time)
    );
    let _ = writeln!(
        out,
        "sequential read: {:>10.2} ms  ({:.0} records/s)",
        ms(result.sequential_read_time),
        throughput(result.records_read, result.sequential_read_time)
    );
    let _ = writeln!(
        out,
        "random read:     {:>10.2} ms  ({} reads)",
        ms(result.random_read_time),
        result.random_reads
    );
    let _ = writeln!(
        out,
        "memory delta:    {:>10.2} MB",
        result.memory_delta_bytes as f64 / (1024.0 * 1024.0)
    );
    if !result.integrity_ok() {
        let _ = writeln!(
            out,
            "WARNING: read back {} of {} records",
            result.records_read, result.record_count
        );
    }
    out
}

/// Render a whole suite in execution order
pub fn render_suite(results: &[BenchmarkResult]) -> String {
    let mut out = String::new();
    for result in results {
        out.push_str(&render_result(result));
        out.push('\n');
    }
    out
}

fn ms(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

fn throughput(count: usize, elapsed: Duration) -> f64 {
    if elapsed.is_zero() {
        return 0.0;
    }
    count as f64 / elapsed.as_secs_f64()
}

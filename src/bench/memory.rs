//! Process memory sampling
//!
//! Supplies the memory-delta half of a trial's measurements. There is no
//! collector to force here, so "settle" is a plain pause that lets pending
//! I/O and allocator bookkeeping quiet down before sampling. The resulting
//! delta is noise reduction, not rigorous isolation.

use std::time::Duration;

use sysinfo::{get_current_pid, Pid, System};
use tracing::debug;

/// Samples the resident-set size of the current process
pub struct MemoryProfiler {
    system: System,
    pid: Option<Pid>,
}

impl MemoryProfiler {
    pub fn new() -> Self {
        Self {
            system: System::new(),
            pid: get_current_pid().ok(),
        }
    }

    /// Current resident-set size in bytes, best effort (0 when the
    /// process cannot be sampled)
    pub fn sample(&mut self) -> u64 {
        let Some(pid) = self.pid else { return 0 };
        if !self.system.refresh_process(pid) {
            return 0;
        }
        self.system.process(pid).map(|p| p.memory()).unwrap_or(0)
    }

    /// Log current usage at debug level, tagged with a phase name
    pub fn log_usage(&mut self, phase: &str) {
        let rss = self.sample();
        debug!("{}: rss {} MB", phase, rss / (1024 * 1024));
    }
}

impl Default for MemoryProfiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Best-effort settle pause between the write and read phases
pub fn settle(pause: Duration) {
    std::thread::sleep(pause);
}

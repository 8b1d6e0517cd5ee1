//! # fxbench
//!
//! A file-access benchmark over a fixed-width binary record format:
//! - 100-byte fixed-offset currency-rate records
//! - three interchangeable storage backends (seek / channel / mmap)
//! - a harness timing write, sequential read, and random read per trial
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Runner                               │
//! │               (record counts × backends)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ one trial at a time
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Benchmark Harness                           │
//! │     generate → write → settle → read → random → report       │
//! └──────────┬──────────────────────────────┬───────────────────┘
//!            │                              │
//!            ▼                              ▼
//!     ┌─────────────┐              ┌─────────────────┐
//!     │  Generator  │              │   FileBackend   │
//!     │  (seeded)   │              │ seek│chan│mmap  │
//!     └─────────────┘              └────────┬────────┘
//!                                           │
//!                                           ▼
//!                                   ┌─────────────┐
//!                                   │ RecordCodec │
//!                                   │ (100 bytes) │
//!                                   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod backend;
pub mod bench;
pub mod report;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FxBenchError, Result};
pub use config::BenchConfig;
pub use backend::{BackendKind, FileBackend};
pub use bench::{run_suite, BenchmarkResult};
pub use record::{CurrencyRate, RateGenerator, RECORD_SIZE};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of fxbench
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Run diagnostics returned by the generator and written by the CLI.
//!
//! `GenerationReport` lists every file a run produced together with value
//! statistics of the samples before quantization and a per-stage timing trace.

pub mod report;
pub mod timing;

pub use report::{GenerationReport, PixelStats};
pub use timing::{StageTiming, TimingBreakdown};

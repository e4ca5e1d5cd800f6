#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod generator;
pub mod image;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::diagnostics::GenerationReport;
pub use crate::error::SampleError;
pub use crate::generator::{GeneratorParams, SampleGenerator};
pub use crate::types::{PixelEncoding, SampleShape};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use quant_calib_data::prelude::*;
///
/// # fn main() -> Result<(), SampleError> {
/// let params = GeneratorParams::default()
///     .with_output_dir("calib")
///     .with_count(10)
///     .with_seed(7);
/// let report = SampleGenerator::new(params)?.run()?;
/// println!("wrote {} files", report.files.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageF32;
    pub use crate::{GenerationReport, GeneratorParams, SampleError, SampleGenerator};
}

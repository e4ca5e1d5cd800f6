//! Sample generator writing uniform-noise grayscale JPEGs.
//!
//! Overview
//! - Each iteration draws a `height × width × 1` f32 array from U[0, 1).
//! - The array is quantized to 8 bits and written to `<output_dir>/<i>.jpg`.
//! - The loop is sequential and stops at the first I/O or encoder failure.
//!
//! Modules
//! - [`params`] – configuration used by the generator and CLI.
//! - `pipeline` – the [`SampleGenerator`] loop.
//! - `progress` – console progress bar.

pub mod params;
mod pipeline;
mod progress;

pub use params::{GeneratorParams, DEFAULT_COUNT, DEFAULT_OUTPUT_DIR, MAX_COUNT};
pub use pipeline::{SampleGenerator, STAGE_ENCODE, STAGE_GENERATE};
pub use progress::progress_bar;

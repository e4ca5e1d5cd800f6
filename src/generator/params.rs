//! Parameter types configuring the sample generator.
//!
//! Defaults reproduce the fixed calibration set: 200 samples of 32×32×1
//! written to `./lenet_quant_data`, which must already exist.

use crate::error::{Result, SampleError};
use crate::image::io::DEFAULT_JPEG_QUALITY;
use crate::types::{PixelEncoding, SampleShape};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_COUNT: usize = 200;
pub const DEFAULT_OUTPUT_DIR: &str = "./lenet_quant_data";
/// Upper bound on `count`; the run report keeps one path per sample.
pub const MAX_COUNT: usize = 1_000_000;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    /// Number of samples to write.
    pub count: usize,
    /// Sample shape; JPEG output requires a single channel.
    pub shape: SampleShape,
    /// Directory receiving `<index>.jpg` files.
    pub output_dir: PathBuf,
    /// Fixed RNG seed. `None` seeds from OS entropy, so every run differs.
    pub seed: Option<u64>,
    /// JPEG quality in `1..=100`.
    pub jpeg_quality: u8,
    /// Float to gray-level mapping applied before encoding.
    pub encoding: PixelEncoding,
    /// Create `output_dir` when it is missing instead of failing.
    pub create_output_dir: bool,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            shape: SampleShape::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            encoding: PixelEncoding::default(),
            create_output_dir: false,
        }
    }
}

impl GeneratorParams {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_shape(mut self, shape: SampleShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    pub fn with_encoding(mut self, encoding: PixelEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_create_output_dir(mut self, create: bool) -> Self {
        self.create_output_dir = create;
        self
    }

    /// Reject counts, shapes and qualities the generator cannot take.
    pub fn validate(&self) -> Result<()> {
        if self.count > MAX_COUNT {
            return Err(SampleError::InvalidParams(format!(
                "count must be at most {MAX_COUNT}, got {}",
                self.count
            )));
        }
        let SampleShape {
            height,
            width,
            channels,
        } = self.shape;
        if channels != 1 {
            return Err(SampleError::InvalidParams(format!(
                "grayscale JPEG needs 1 channel, got {channels}"
            )));
        }
        if height == 0 || width == 0 {
            return Err(SampleError::InvalidParams(format!(
                "sample shape {height}x{width} has a zero dimension"
            )));
        }
        // Baseline JPEG caps each dimension at 65535.
        if height > u16::MAX as usize || width > u16::MAX as usize {
            return Err(SampleError::InvalidParams(format!(
                "sample shape {height}x{width} exceeds the JPEG size limit"
            )));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(SampleError::InvalidParams(format!(
                "jpeg_quality must be in 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}

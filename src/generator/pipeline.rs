use super::params::GeneratorParams;
use crate::diagnostics::report::PixelStatsAccumulator;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{GenerationReport, TimingBreakdown};
use crate::error::{Result, SampleError};
use crate::image::io::save_grayscale_jpeg;
use crate::image::ImageF32;
use indicatif::ProgressBar;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

pub const STAGE_GENERATE: &str = "generate";
pub const STAGE_ENCODE: &str = "encode";

/// Writes `count` uniform-noise samples as `<output_dir>/<index>.jpg`.
pub struct SampleGenerator {
    params: GeneratorParams,
    rng: StdRng,
}

impl SampleGenerator {
    /// Validate `params` and seed the RNG.
    pub fn new(params: GeneratorParams) -> Result<Self> {
        params.validate()?;
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { params, rng })
    }

    /// Draw one sample with every value independently uniform in `[0, 1)`.
    pub fn generate_sample(&mut self) -> ImageF32 {
        let shape = self.params.shape;
        let rng = &mut self.rng;
        ImageF32::from_fn(shape.width, shape.height, |_, _| rng.gen::<f32>())
    }

    /// Output path of sample `index`.
    pub fn sample_path(&self, index: usize) -> PathBuf {
        self.params.output_dir.join(format!("{index}.jpg"))
    }

    /// Run the whole loop without drawing progress.
    pub fn run(&mut self) -> Result<GenerationReport> {
        self.run_with_progress(&ProgressBar::hidden())
    }

    /// Run the whole loop, advancing `pb` once per written file. Stops at the
    /// first failure; files already written are left in place.
    pub fn run_with_progress(&mut self, pb: &ProgressBar) -> Result<GenerationReport> {
        let total_start = Instant::now();
        info!(
            "SampleGenerator::run start count={} shape={}x{}x{} dir={}",
            self.params.count,
            self.params.shape.height,
            self.params.shape.width,
            self.params.shape.channels,
            self.params.output_dir.display()
        );
        self.prepare_output_dir()?;

        pb.set_length(self.params.count as u64);
        pb.set_position(0);
        let mut timings = TimingBreakdown::default();
        let written = self.write_samples(pb, &mut timings);
        match &written {
            Ok(_) => pb.finish(),
            Err(_) => pb.abandon(),
        }
        let (files, stats) = written?;
        timings.total_ms = elapsed_ms(total_start);

        info!(
            "SampleGenerator::run done files={} total_ms={:.3}",
            files.len(),
            timings.total_ms
        );
        Ok(GenerationReport {
            output_dir: self.params.output_dir.clone(),
            count: files.len(),
            shape: self.params.shape,
            seed: self.params.seed,
            jpeg_quality: self.params.jpeg_quality,
            files,
            pixel_stats: stats.finish(),
            timings,
        })
    }

    fn prepare_output_dir(&self) -> Result<()> {
        let dir = &self.params.output_dir;
        if dir.is_dir() {
            return Ok(());
        }
        if !self.params.create_output_dir {
            return Err(SampleError::MissingOutputDir(dir.clone()));
        }
        debug!("creating output directory {}", dir.display());
        fs::create_dir_all(dir).map_err(|source| SampleError::CreateOutputDir {
            path: dir.clone(),
            source,
        })
    }

    fn write_samples(
        &mut self,
        pb: &ProgressBar,
        timings: &mut TimingBreakdown,
    ) -> Result<(Vec<PathBuf>, PixelStatsAccumulator)> {
        let mut files = Vec::with_capacity(self.params.count);
        let mut stats = PixelStatsAccumulator::default();
        for index in 0..self.params.count {
            let start = Instant::now();
            let sample = self.generate_sample();
            timings.accumulate(STAGE_GENERATE, elapsed_ms(start));
            if let Some((lo, hi, sum)) = sample.value_range() {
                stats.push(lo, hi, sum, self.params.shape.value_count());
            }

            let path = self.sample_path(index);
            let start = Instant::now();
            save_grayscale_jpeg(
                &sample,
                &path,
                self.params.encoding,
                self.params.jpeg_quality,
            )?;
            timings.accumulate(STAGE_ENCODE, elapsed_ms(start));
            debug!("wrote {}", path.display());

            files.push(path);
            pb.inc(1);
        }
        Ok((files, stats))
    }
}

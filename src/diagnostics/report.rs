use crate::diagnostics::TimingBreakdown;
use crate::types::SampleShape;
use serde::Serialize;
use std::path::PathBuf;

/// Result of [`SampleGenerator::run`](crate::SampleGenerator::run).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub count: usize,
    pub shape: SampleShape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub jpeg_quality: u8,
    /// Written files in index order.
    pub files: Vec<PathBuf>,
    /// Statistics over pre-encoding values; `None` when nothing was generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_stats: Option<PixelStats>,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct PixelStats {
    pub min: f32,
    pub max: f32,
    pub mean: f64,
}

/// Running min/max/mean over every generated value.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PixelStatsAccumulator {
    min: f32,
    max: f32,
    sum: f64,
    n: usize,
}

impl PixelStatsAccumulator {
    pub(crate) fn push(&mut self, min: f32, max: f32, sum: f64, n: usize) {
        if n == 0 {
            return;
        }
        if self.n == 0 {
            self.min = min;
            self.max = max;
        } else {
            self.min = self.min.min(min);
            self.max = self.max.max(max);
        }
        self.sum += sum;
        self.n += n;
    }

    pub(crate) fn finish(self) -> Option<PixelStats> {
        (self.n > 0).then(|| PixelStats {
            min: self.min,
            max: self.max,
            mean: self.sum / self.n as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_merges_batches() {
        let mut acc = PixelStatsAccumulator::default();
        assert!(acc.finish().is_none());
        acc.push(0.2, 0.8, 1.0, 2);
        acc.push(0.1, 0.5, 0.6, 2);
        let stats = acc.finish().unwrap();
        assert_eq!(stats.min, 0.1);
        assert_eq!(stats.max, 0.8);
        assert!((stats.mean - 0.4).abs() < 1e-12);
    }
}

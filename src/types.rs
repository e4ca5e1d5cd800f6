use serde::{Deserialize, Serialize};

/// Shape of one generated sample in `height × width × channels` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleShape {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl SampleShape {
    pub const fn new(height: usize, width: usize, channels: usize) -> Self {
        Self {
            height,
            width,
            channels,
        }
    }

    /// Number of scalar values in a sample of this shape.
    pub fn value_count(&self) -> usize {
        self.height * self.width * self.channels
    }
}

impl Default for SampleShape {
    fn default() -> Self {
        Self::new(32, 32, 1)
    }
}

/// How `f32` pixel values are mapped to 8-bit gray levels before encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelEncoding {
    /// `[0, 1]` is stretched onto `[0, 255]`.
    #[default]
    Normalized,
    /// Values are rounded and clamped without scaling, so `[0, 1)` lands on
    /// gray levels 0 and 1.
    Saturate,
}

impl PixelEncoding {
    #[inline]
    pub fn to_u8(self, v: f32) -> u8 {
        let level = match self {
            PixelEncoding::Normalized => v.clamp(0.0, 1.0) * 255.0,
            PixelEncoding::Saturate => v,
        };
        // NaN maps to 0 through the saturating cast.
        level.round().clamp(0.0, 255.0) as u8
    }
}

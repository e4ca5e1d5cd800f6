use super::{ImageF32, ImageView};
use crate::types::PixelEncoding;

/// Owned 8-bit grayscale buffer, the form handed to the JPEG encoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given tightly packed bytes.
    pub fn new(w: usize, h: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), w * h);
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Quantize a float image to gray levels using `encoding`.
    pub fn from_f32(image: &ImageF32, encoding: PixelEncoding) -> Self {
        let data = image.map_pixels(|v| encoding.to_u8(v));
        Self::new(image.w, image.h, data)
    }

    /// Expand gray levels back to `[0, 1]`.
    pub fn to_f32(&self) -> ImageF32 {
        ImageF32::from_fn(self.w, self.h, |x, y| self.get(x, y) as f32 / 255.0)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }
}

//! I/O helpers for grayscale samples and JSON.
//!
//! - `encode_jpeg`: encode an 8-bit gray buffer as an in-memory JPEG.
//! - `save_grayscale_jpeg`: quantize an `ImageF32` and write it as a JPEG.
//! - `load_grayscale_image` / `load_grayscale_f32`: read an image back as gray.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Image writers never create missing directories; the caller owns the
//! output location. Only `write_json_file` creates parents.
use super::{GrayImageU8, ImageF32};
use crate::error::{Result, SampleError};
use crate::types::PixelEncoding;
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Default JPEG quality, matching the common encoder default.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Encode a gray buffer as a baseline JPEG. `path` only labels errors.
pub fn encode_jpeg(gray: &GrayImageU8, quality: u8, path: &Path) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
    encoder
        .write_image(&gray.data, gray.w as u32, gray.h as u32, ExtendedColorType::L8)
        .map_err(|source| SampleError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(bytes)
}

/// Quantize `image` with `encoding` and write it to `path` as a JPEG.
pub fn save_grayscale_jpeg(
    image: &ImageF32,
    path: &Path,
    encoding: PixelEncoding,
    quality: u8,
) -> Result<()> {
    let gray = GrayImageU8::from_f32(image, encoding);
    let bytes = encode_jpeg(&gray, quality, path)?;
    fs::write(path, bytes).map_err(|source| SampleError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8> {
    let img = image::open(path)
        .map_err(|source| SampleError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .into_luma8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    Ok(GrayImageU8::new(w, h, img.into_raw()))
}

/// Load an image as gray and expand it to `[0, 1]` floats.
pub fn load_grayscale_f32(path: &Path) -> Result<ImageF32> {
    load_grayscale_image(path).map(|gray| gray.to_f32())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| SampleError::CreateOutputDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        SampleError::Config(format!("Failed to serialize JSON for {}: {e}", path.display()))
    })?;
    fs::write(path, json).map_err(|source| SampleError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_bytes_start_with_soi_marker() {
        let gray = GrayImageU8::new(8, 8, vec![128; 64]);
        let bytes = encode_jpeg(&gray, DEFAULT_JPEG_QUALITY, Path::new("mem.jpg")).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("0.jpg");
        let img = ImageF32::new(4, 4);
        let err = save_grayscale_jpeg(&img, &path, PixelEncoding::Normalized, 90).unwrap_err();
        assert!(matches!(err, SampleError::Write { .. }), "got {err}");
        assert!(!path.exists());
    }

    #[test]
    fn json_writer_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");
        write_json_file(&path, &vec![1, 2, 3]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let parsed: Vec<i32> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec![1, 2, 3]);
    }
}

use quant_calib_data::image::ImageF32;

/// Generates a smooth diagonal ramp in `[0, 1)`.
pub fn ramp_f32(width: usize, height: usize) -> ImageF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let span = (width + height) as f32;
    ImageF32::from_fn(width, height, |x, y| (x + y) as f32 / span)
}

/// Mean absolute per-pixel difference between two equally sized images.
pub fn mean_abs_diff(a: &ImageF32, b: &ImageF32) -> f32 {
    assert_eq!((a.w, a.h), (b.w, b.h), "image sizes differ");
    let total: f32 = a.data.iter().zip(&b.data).map(|(x, y)| (x - y).abs()).sum();
    total / a.data.len() as f32
}

/// Sorted names of the regular files inside `dir`.
pub fn file_names(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("output directory is readable")
        .map(|entry| entry.expect("directory entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

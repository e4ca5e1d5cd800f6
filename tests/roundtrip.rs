mod common;

use common::synthetic_image::{mean_abs_diff, ramp_f32};
use quant_calib_data::image::io::{load_grayscale_f32, save_grayscale_jpeg};
use quant_calib_data::{GeneratorParams, PixelEncoding, SampleGenerator, SampleShape};

#[test]
fn seeded_sample_survives_jpeg_within_tolerance() {
    let dir = tempfile::tempdir().unwrap();
    let params = GeneratorParams::default()
        .with_output_dir(dir.path())
        .with_seed(5);
    let mut generator = SampleGenerator::new(params.clone()).unwrap();
    let sample = generator.generate_sample();
    let again = SampleGenerator::new(params).unwrap().generate_sample();
    assert_eq!(sample, again, "seeded generation must be deterministic");

    let path = generator.sample_path(0);
    save_grayscale_jpeg(&sample, &path, PixelEncoding::Normalized, 95).unwrap();
    let decoded = load_grayscale_f32(&path).unwrap();

    assert_eq!(decoded.shape(), SampleShape::new(32, 32, 1));
    let mae = mean_abs_diff(&sample, &decoded);
    assert!(mae < 0.08, "mean abs error too large: {mae}");
}

#[test]
fn smooth_ramp_round_trips_tightly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ramp.jpg");
    let ramp = ramp_f32(32, 32);
    save_grayscale_jpeg(&ramp, &path, PixelEncoding::Normalized, 95).unwrap();
    let decoded = load_grayscale_f32(&path).unwrap();
    let mae = mean_abs_diff(&ramp, &decoded);
    assert!(mae < 0.02, "mean abs error too large: {mae}");
}

#[test]
fn saturate_encoding_yields_near_black_images() {
    let dir = tempfile::tempdir().unwrap();
    let params = GeneratorParams::default()
        .with_output_dir(dir.path())
        .with_count(1)
        .with_seed(8)
        .with_encoding(PixelEncoding::Saturate);
    let report = SampleGenerator::new(params).unwrap().run().unwrap();

    let decoded = load_grayscale_f32(&report.files[0]).unwrap();
    let max = decoded.data.iter().copied().fold(0.0f32, f32::max);
    assert!(max <= 8.0 / 255.0, "max={max}");
}

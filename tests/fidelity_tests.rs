//! Fidelity metric tests on real embeddings.

use lsb_stego::config::Addressing;
use lsb_stego::metrics::{self, Distortion};
use lsb_stego::{image_io, DegenerateMetric, Error, PixelContainer, StegoConfig, Steganographer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::TempDir;

fn random_cover(height: usize, width: usize, seed: u64) -> PixelContainer {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<u8> = (0..height * width * 3).map(|_| rng.gen()).collect();
    PixelContainer::from_raw(height, width, data).expect("valid dimensions")
}

#[test]
fn test_self_identity() {
    let x = random_cover(16, 16, 3);
    let report = metrics::compute(&x, &x).unwrap();

    assert_eq!(report.max_abs_deviation, 0);
    assert_eq!(report.nmse, Ok(0.0));
    assert!((report.uqi.unwrap() - 1.0).abs() < 1e-9);
    assert_eq!(report.snr, Err(DegenerateMetric { metric: "SNR" }));
    assert_eq!(report.psnr, Err(DegenerateMetric { metric: "PSNR" }));
}

#[test]
fn test_embedding_distortion_is_small() {
    let cover = random_cover(64, 64, 11);
    let mut stego_container = cover.clone();

    let stego = Steganographer::new(StegoConfig::new(Addressing::Contiguous)).unwrap();
    let message = "x".repeat(stego.capacity_bytes(&cover));
    stego.embed_message(&mut stego_container, &message).unwrap();

    let report = metrics::compute(&cover, &stego_container).unwrap();
    assert_eq!(report.max_abs_deviation, 1);

    let mse = report.mse.unwrap();
    // At most one unit per channel, three channels per pixel.
    assert!(mse > 0.0 && mse <= 3.0);
    assert!(report.nmse.unwrap() < 1e-3);
    assert!(report.snr.unwrap() > 1e3);
    assert!(report.psnr.unwrap() > 1e4);

    let uqi = report.uqi.unwrap();
    assert!(uqi > 0.99 && uqi < 1.0);
}

#[test]
fn test_psnr_is_linear_form() {
    let cover = random_cover(5, 7, 21);
    let mut raw = cover.as_raw().to_vec();
    raw[0] ^= 1;
    raw[10] ^= 1;
    let stego = PixelContainer::from_raw(5, 7, raw).unwrap();

    let peak = f64::from(*cover.as_raw().iter().max().unwrap());
    let expected = 35.0 * peak * peak / 2.0;

    let psnr = Distortion::measure(&cover, &stego).unwrap().psnr().unwrap();
    assert!((psnr - expected).abs() < 1e-9);
}

#[test]
fn test_shape_mismatch_gives_no_report() {
    let err = metrics::compute(&random_cover(4, 4, 1), &random_cover(4, 5, 1)).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { .. }));
}

#[test]
fn test_metrics_on_saved_images() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let cover_path = temp_dir.path().join("cover.png");
    let stego_path = temp_dir.path().join("stego.png");

    let cover = random_cover(20, 30, 5);
    image_io::save_container(&cover, &cover_path).unwrap();

    Steganographer::default()
        .embed_file(&cover_path, &stego_path, b"fidelity")
        .unwrap();

    let report = metrics::compute(
        &image_io::load_container(&cover_path).unwrap(),
        &image_io::load_container(&stego_path).unwrap(),
    )
    .unwrap();
    assert!(report.max_abs_deviation <= 1);
    assert!(report.uqi.unwrap() > 0.99);
}

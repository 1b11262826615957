//! Sharpness Analysis Testing
//!
//! End-to-end test suite for the analysis pipeline including:
//! - Pattern-driven estimation and classification
//! - Classifier decision boundaries
//! - Alpha-channel normalization
//! - Determinism and concurrent use

use sharpgate::testing::synthetic_data::{
    checkerboard_frame, gradient_frame, horizontal_stripe_frame, uniform_frame,
    vertical_stripe_frame, with_opaque_alpha,
};
use sharpgate::{
    AnalysisConfig, ImageFrame, OrientationScores, SharpnessClassifier, SharpnessEstimator,
    SharpnessValidator,
};

/// Stack two equal-width frames vertically into one frame.
fn stack_frames(top: &ImageFrame, bottom: &ImageFrame) -> ImageFrame {
    assert_eq!(top.width, bottom.width);
    assert_eq!(top.channels, bottom.channels);
    let mut data = top.data.clone();
    data.extend_from_slice(&bottom.data);
    ImageFrame::new(data, top.width, top.height + bottom.height, top.channels)
}

/// Test classification of a high-contrast checkerboard
#[test]
fn test_checkerboard_is_sharp() {
    let validator = SharpnessValidator::default();
    let frame = checkerboard_frame(120, 120, 8, 0, 255);
    let report = validator.validate_frame(&frame).unwrap();

    println!("Checkerboard scores: {:?}", report.scores.to_array());

    assert!(report.verdict.is_sharp);
    assert!(!report.verdict.is_motion);
    assert!(!report.verdict.is_blur);
    for score in report.scores.to_array() {
        assert!(score > 100.0, "checkerboard score {} should exceed threshold", score);
    }
}

/// Test that a perfectly uniform frame scores zero everywhere
#[test]
fn test_uniform_frame_is_defocus() {
    let validator = SharpnessValidator::default();
    let frame = uniform_frame(64, 64, 128);
    let report = validator.validate_frame(&frame).unwrap();

    assert_eq!(report.scores.to_array(), [0.0, 0.0, 0.0, 0.0]);
    assert!(report.verdict.is_blur);
    assert!(!report.verdict.is_motion);
}

/// Test that purely vertical structure reads as motion blur
///
/// Horizontal bands leave every row internally constant, so the X score is
/// exactly zero and the score spread is total.
#[test]
fn test_horizontal_bands_are_motion() {
    let validator = SharpnessValidator::default();
    let frame = horizontal_stripe_frame(100, 100, 4, 0, 255);
    let report = validator.validate_frame(&frame).unwrap();

    println!("Band scores: {:?}", report.scores.to_array());

    assert_eq!(report.scores.x, 0.0);
    assert!(report.scores.y > 0.0);
    assert!(report.verdict.is_motion);
    assert!(!report.verdict.is_sharp);
    assert!(!report.verdict.is_blur);
}

/// Test that a one-directional ramp reads as motion blur
///
/// The ramp varies only along x, so the Y score is exactly zero.
#[test]
fn test_gradient_ramp_is_motion() {
    let validator = SharpnessValidator::default();
    let frame = gradient_frame(256, 64);
    let report = validator.validate_frame(&frame).unwrap();

    assert_eq!(report.scores.y, 0.0);
    assert!(report.scores.x > 0.0);
    assert!(report.verdict.is_motion);
}

/// Test that balanced low-contrast texture reads as defocus blur
///
/// Mixing pixel-width vertical bars with pixel-height horizontal bands
/// keeps all four orientation scores in the same range, below the
/// sharpness threshold.
#[test]
fn test_balanced_low_contrast_texture_is_defocus() {
    let validator = SharpnessValidator::default();
    let top = vertical_stripe_frame(120, 48, 1, 126, 130);
    let bottom = horizontal_stripe_frame(120, 72, 1, 126, 130);
    let frame = stack_frames(&top, &bottom);
    let report = validator.validate_frame(&frame).unwrap();

    println!("Balanced texture scores: {:?}", report.scores.to_array());

    assert!(!report.verdict.is_sharp);
    assert!(report.verdict.is_blur);
    assert!(!report.verdict.is_motion);
    for score in report.scores.to_array() {
        assert!(score < 100.0);
    }
}

/// Test classifier decision boundaries on synthetic scores
#[test]
fn test_classifier_boundaries() {
    let classifier = SharpnessClassifier::default();

    let sharp = classifier.classify(&OrientationScores::from_array([500.0, 500.0, 500.0, 500.0]));
    assert!(sharp.is_sharp && !sharp.is_motion && !sharp.is_blur);

    // max 90, min 10: spread ~0.89 exceeds the 0.5 ratio
    let motion = classifier.classify(&OrientationScores::from_array([10.0, 90.0, 20.0, 15.0]));
    assert!(motion.is_motion && !motion.is_sharp && !motion.is_blur);

    // max 45, min 38: spread ~0.156 stays under the ratio
    let defocus = classifier.classify(&OrientationScores::from_array([40.0, 45.0, 38.0, 42.0]));
    assert!(defocus.is_blur && !defocus.is_sharp && !defocus.is_motion);

    let degenerate = classifier.classify(&OrientationScores::from_array([0.0, 0.0, 0.0, 0.0]));
    assert!(degenerate.is_blur);
}

/// Test that stripping alpha does not change the scores
#[test]
fn test_alpha_channel_equivalence() {
    let estimator = SharpnessEstimator::new();
    let rgb = checkerboard_frame(48, 48, 4, 20, 220);
    let rgba = with_opaque_alpha(&rgb);

    let rgb_scores = estimator.estimate(&rgb).unwrap();
    let rgba_scores = estimator.estimate(&rgba).unwrap();

    assert_eq!(rgb_scores, rgba_scores);
}

/// Test that the X score equals the doubled raw X variance
#[test]
fn test_x_weighting_contract() {
    let frame = checkerboard_frame(32, 32, 3, 0, 255);
    let scores = SharpnessEstimator::new().estimate(&frame).unwrap();

    let response = sharpgate::convolution::convolve(&frame, &sharpgate::DIRECTIONAL_KERNELS[0])
        .unwrap();
    let raw = sharpgate::stats::channel_sharpness(&response).unwrap();
    let doubled = (raw * 2.0 * 1e6).round() / 1e6;

    assert_eq!(scores.x, doubled);
}

/// Test that repeated estimation returns identical scores
#[test]
fn test_estimation_is_deterministic() {
    let estimator = SharpnessEstimator::new();
    let frame = checkerboard_frame(60, 40, 5, 30, 200);

    let first = estimator.estimate(&frame).unwrap();
    for _ in 0..5 {
        assert_eq!(estimator.estimate(&frame).unwrap(), first);
    }
}

/// Test concurrent estimation on independent threads
#[test]
fn test_concurrent_estimations_agree() {
    let frame = checkerboard_frame(64, 64, 8, 0, 255);
    let expected = SharpnessEstimator::new().estimate(&frame).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let frame = frame.clone();
            std::thread::spawn(move || SharpnessEstimator::new().estimate(&frame).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

/// Test custom configuration overrides
#[test]
fn test_custom_config_changes_verdict() {
    let frame = checkerboard_frame(120, 120, 8, 0, 255);

    let default_report = SharpnessValidator::default().validate_frame(&frame).unwrap();
    assert!(default_report.verdict.is_sharp);

    // Raise the threshold far beyond any achievable score.
    let strict = SharpnessValidator::new(AnalysisConfig {
        sharpness_threshold: 1e12,
        motion_spread_ratio: 0.5,
    });
    let strict_report = strict.validate_frame(&frame).unwrap();
    assert!(!strict_report.verdict.is_sharp);
}

/// Test report serialization for host-side logging
#[test]
fn test_report_serialization() {
    let validator = SharpnessValidator::default();
    let report = validator
        .validate_frame(&uniform_frame(16, 16, 50))
        .unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("is_sharp"));
    assert!(json.contains("is_motion"));
    assert!(json.contains("is_blur"));
    assert!(json.contains("scores"));

    let parsed: sharpgate::SharpnessReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.verdict, report.verdict);
    assert_eq!(parsed.scores, report.scores);
}

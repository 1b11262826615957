//! Directional sharpness estimation
//!
//! Orchestrates the kernel set, convolver, and channel statistics into one
//! score per orientation.

use crate::convolution::convolve;
use crate::errors::SharpnessError;
use crate::kernels::{Orientation, DIRECTIONAL_KERNELS};
use crate::stats::channel_sharpness;
use crate::types::{ImageFrame, OrientationScores};

/// Weight applied to the X orientation score, compensating for the
/// horizontal kernel's directional sensitivity.
const X_WEIGHT: f64 = 2.0;

/// Scores are fixed to 6 decimal digits at the API boundary.
const SCORE_SCALE: f64 = 1e6;

/// Computes directional sharpness scores for single frames.
///
/// Stateless: every call is self-contained, so one estimator can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharpnessEstimator;

impl SharpnessEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Estimate sharpness scores for a frame, one per kernel in X, Y, U, V
    /// order.
    ///
    /// The frame is normalized to 3 channels first (alpha stripped from
    /// RGBA input). Each kernel's response buffer is reduced to its maximum
    /// per-channel variance and dropped before the next kernel runs; the X
    /// score is doubled, and every score is rounded to 6 decimal digits.
    ///
    /// A failure under any single kernel aborts the whole estimate with the
    /// originating error.
    pub fn estimate(&self, frame: &ImageFrame) -> Result<OrientationScores, SharpnessError> {
        let rgb = frame.to_rgb()?;

        let mut scores = [0.0f64; 4];
        for (slot, kernel) in scores.iter_mut().zip(DIRECTIONAL_KERNELS.iter()) {
            let response = convolve(&rgb, kernel)?;
            let mut sharpness = channel_sharpness(&response)?;
            if kernel.orientation == Orientation::X {
                sharpness *= X_WEIGHT;
            }
            *slot = round_score(sharpness);
            log::debug!(
                "orientation {} sharpness {:.6}",
                kernel.orientation.as_str(),
                *slot
            );
        }

        Ok(OrientationScores::from_array(scores))
    }
}

/// Round half away from zero at the 6th decimal digit.
fn round_score(value: f64) -> f64 {
    (value * SCORE_SCALE).round() / SCORE_SCALE
}

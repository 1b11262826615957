//! Frame-level sharpness gating
//!
//! Combines estimation and classification into a single call that capture
//! pipelines can use to accept or discard frames. The host decides the
//! polling cadence; calls are synchronous and stateless, so overlapping
//! invocations on independent frames are safe.

use crate::classifier::SharpnessClassifier;
use crate::config::AnalysisConfig;
use crate::errors::SharpnessError;
use crate::estimator::SharpnessEstimator;
use crate::types::{ImageFrame, SharpnessReport};

/// Runs the full estimate-then-classify pipeline on single frames.
#[derive(Debug, Clone, Default)]
pub struct SharpnessValidator {
    estimator: SharpnessEstimator,
    classifier: SharpnessClassifier,
}

impl SharpnessValidator {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            estimator: SharpnessEstimator::new(),
            classifier: SharpnessClassifier::new(config),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        self.classifier.config()
    }

    /// Estimate and classify one frame, returning the verdict together with
    /// the raw orientation scores for diagnostics.
    pub fn validate_frame(&self, frame: &ImageFrame) -> Result<SharpnessReport, SharpnessError> {
        let scores = self.estimator.estimate(frame)?;
        let verdict = self.classifier.classify(&scores);

        log::debug!(
            "frame {}x{} classified {} (scores {:?})",
            frame.width,
            frame.height,
            verdict.label(),
            scores.to_array()
        );

        Ok(SharpnessReport { scores, verdict })
    }

    /// Whether a report passes the gate (only sharp frames do).
    pub fn is_acceptable(&self, report: &SharpnessReport) -> bool {
        report.verdict.is_sharp
    }
}

//! Sharp / motion / defocus classification
//!
//! A one-shot decision tree over the four orientation scores; no history,
//! no state carried between calls.

use crate::config::AnalysisConfig;
use crate::types::{OrientationScores, SharpnessVerdict};

/// Classifies orientation scores against configured thresholds.
#[derive(Debug, Clone, Default)]
pub struct SharpnessClassifier {
    config: AnalysisConfig,
}

impl SharpnessClassifier {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Classify a frame's orientation scores.
    ///
    /// Sharp iff every score strictly exceeds the sharpness threshold; sharp
    /// is terminal. Otherwise the relative spread `(max - min) / max`
    /// decides between motion blur (spread above the configured ratio) and
    /// defocus blur. All-zero scores have a degenerate spread and classify
    /// as defocus blur.
    pub fn classify(&self, scores: &OrientationScores) -> SharpnessVerdict {
        let all_above = scores
            .to_array()
            .into_iter()
            .all(|score| score > self.config.sharpness_threshold);
        if all_above {
            return SharpnessVerdict::sharp();
        }

        let max = scores.max();
        if max <= 0.0 {
            // Perfectly uniform frame: no spread to measure.
            return SharpnessVerdict::defocus();
        }

        let relative_spread = (max - scores.min()) / max;
        if relative_spread > self.config.motion_spread_ratio {
            SharpnessVerdict::motion()
        } else {
            SharpnessVerdict::defocus()
        }
    }
}

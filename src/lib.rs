//! Sharpgate: fast non-reference sharpness estimation and blur classification
//!
//! This crate decides whether a frame is in sharp focus, motion-blurred, or
//! out of focus by measuring directional edge-response variance across four
//! orientations, so capture pipelines can discard bad frames before further
//! processing.
//!
//! # Features
//! - Four-orientation second-derivative analysis (horizontal, vertical, two
//!   diagonals)
//! - Three-way verdict: sharp / motion blur / defocus blur
//! - Raw orientation scores exposed for diagnostics
//! - Tunable thresholds with TOML configuration support
//! - Synchronous, stateless API safe for concurrent use
//!
//! # Usage
//! ```rust
//! use sharpgate::{AnalysisConfig, SharpnessValidator};
//! use sharpgate::testing::synthetic_data::checkerboard_frame;
//!
//! let validator = SharpnessValidator::new(AnalysisConfig::default());
//! let frame = checkerboard_frame(64, 64, 8, 0, 255);
//!
//! let report = validator.validate_frame(&frame).unwrap();
//! assert!(report.verdict.is_sharp);
//! ```
//!
//! Image acquisition and polling cadence stay with the host: hand a frame
//! to [`SharpnessValidator::validate_frame`] whenever one is available.
pub mod classifier;
pub mod config;
pub mod convolution;
pub mod errors;
pub mod estimator;
pub mod kernels;
pub mod stats;
pub mod types;
pub mod validator;

// Testing utilities - synthetic frames for offline testing
pub mod testing;

// Re-exports for convenience
pub use classifier::SharpnessClassifier;
pub use config::{AnalysisConfig, ConfigError};
pub use errors::SharpnessError;
pub use estimator::SharpnessEstimator;
pub use kernels::{DirectionalKernel, Orientation, DIRECTIONAL_KERNELS};
pub use types::{ImageFrame, OrientationScores, SharpnessReport, SharpnessVerdict};
pub use validator::SharpnessValidator;

/// Initialize logging for the analysis pipeline
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "sharpgate=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get crate information
pub fn get_info() -> CrateInfo {
    CrateInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
    }
}

/// Crate information structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CrateInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

#[cfg(test)]
mod lib_tests {
    use super::*;

    #[test]
    fn test_crate_info() {
        let info = get_info();
        assert_eq!(info.name, "sharpgate");
        assert!(!info.version.is_empty());
        assert!(!info.description.is_empty());
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }
}

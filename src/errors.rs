use std::fmt;

use serde::{Deserialize, Serialize};

/// Analysis error types
///
/// Every failure aborts the current call and is surfaced unchanged; the
/// estimation pipeline never substitutes a fallback verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SharpnessError {
    /// Frame carries a channel count the pipeline cannot normalize
    InvalidChannelCount { channels: u8 },

    /// Frame or kernel geometry is unusable for convolution
    ConvolutionFailure(String),

    /// Variance requested over a response buffer with no elements
    EmptyBuffer,
}

impl fmt::Display for SharpnessError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SharpnessError::InvalidChannelCount { channels } => {
                write!(f, "Invalid channel count: expected 3 or 4, got {}", channels)
            }
            SharpnessError::ConvolutionFailure(msg) => write!(f, "Convolution failure: {}", msg),
            SharpnessError::EmptyBuffer => {
                write!(f, "Empty response buffer: variance is undefined")
            }
        }
    }
}

impl std::error::Error for SharpnessError {}

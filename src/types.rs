//! Core types for sharpness analysis
//!
//! Defines the frame type handed over by the host's capture or decode layer
//! and the score/verdict types handed back.

use serde::{Deserialize, Serialize};

use crate::errors::SharpnessError;
use crate::kernels::Orientation;

/// Channel count of a plain RGB frame.
pub const RGB_CHANNELS: u8 = 3;
/// Channel count of an RGBA frame before alpha stripping.
pub const RGBA_CHANNELS: u8 = 4;

/// An owned interleaved pixel buffer.
///
/// The host supplies width, height, a channel count of 3 (RGB) or 4 (RGBA),
/// and `width * height * channels` bytes of data. Frames are self-contained;
/// the analysis pipeline never retains them across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageFrame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

impl ImageFrame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    /// Wrap a decoded RGB image from the `image` crate.
    pub fn from_rgb_image(img: &image::RgbImage) -> Self {
        Self::new(img.as_raw().clone(), img.width(), img.height(), RGB_CHANNELS)
    }

    /// Wrap a decoded RGBA image from the `image` crate.
    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        Self::new(img.as_raw().clone(), img.width(), img.height(), RGBA_CHANNELS)
    }

    /// Convert any decoded image to an RGB frame.
    pub fn from_dynamic(img: &image::DynamicImage) -> Self {
        Self::from_rgb_image(&img.to_rgb8())
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check that dimensions are positive and the data length matches them.
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.data.len() == self.pixel_count() * self.channels as usize
    }

    /// Normalize to a 3-channel frame.
    ///
    /// RGBA input has its alpha channel stripped; RGB input is returned as
    /// an owned copy. Any other channel count fails with
    /// [`SharpnessError::InvalidChannelCount`].
    pub fn to_rgb(&self) -> Result<ImageFrame, SharpnessError> {
        match self.channels {
            RGB_CHANNELS => Ok(self.clone()),
            RGBA_CHANNELS => {
                let mut rgb = Vec::with_capacity(self.pixel_count() * RGB_CHANNELS as usize);
                for pixel in self.data.chunks_exact(RGBA_CHANNELS as usize) {
                    rgb.extend_from_slice(&pixel[..RGB_CHANNELS as usize]);
                }
                Ok(ImageFrame::new(rgb, self.width, self.height, RGB_CHANNELS))
            }
            other => Err(SharpnessError::InvalidChannelCount { channels: other }),
        }
    }
}

/// Per-channel convolution response for one frame/kernel pair.
///
/// Same width and height as the source frame, three planar `f64` channels.
/// Ephemeral: created per kernel, dropped as soon as its score is extracted.
#[derive(Debug, Clone)]
pub struct ResponseBuffer {
    pub width: u32,
    pub height: u32,
    pub channels: [Vec<f64>; 3],
}

impl ResponseBuffer {
    /// Number of elements per channel.
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One sharpness score per kernel orientation, in X, Y, U, V order.
///
/// Scores are non-negative and fixed to 6 decimal digits; the X score
/// already carries its doubling weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientationScores {
    pub x: f64,
    pub y: f64,
    pub u: f64,
    pub v: f64,
}

impl OrientationScores {
    pub fn from_array(scores: [f64; 4]) -> Self {
        Self {
            x: scores[0],
            y: scores[1],
            u: scores[2],
            v: scores[3],
        }
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.u, self.v]
    }

    pub fn get(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::X => self.x,
            Orientation::Y => self.y,
            Orientation::U => self.u,
            Orientation::V => self.v,
        }
    }

    pub fn max(&self) -> f64 {
        self.to_array().into_iter().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn min(&self) -> f64 {
        self.to_array().into_iter().fold(f64::INFINITY, f64::min)
    }
}

/// Three-way verdict: sharp, motion-blurred, or defocus-blurred.
///
/// Exactly one of the three flags is set. Computed fresh per call, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharpnessVerdict {
    pub is_sharp: bool,
    pub is_motion: bool,
    pub is_blur: bool,
}

impl SharpnessVerdict {
    pub fn sharp() -> Self {
        Self {
            is_sharp: true,
            is_motion: false,
            is_blur: false,
        }
    }

    pub fn motion() -> Self {
        Self {
            is_sharp: false,
            is_motion: true,
            is_blur: false,
        }
    }

    pub fn defocus() -> Self {
        Self {
            is_sharp: false,
            is_motion: false,
            is_blur: true,
        }
    }

    pub fn label(&self) -> &'static str {
        if self.is_sharp {
            "sharp"
        } else if self.is_motion {
            "motion"
        } else {
            "defocus"
        }
    }
}

/// Verdict plus the raw orientation scores, for diagnostics and logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharpnessReport {
    pub scores: OrientationScores,
    pub verdict: SharpnessVerdict,
}

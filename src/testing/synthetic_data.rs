//! Synthetic frames with known sharpness characteristics
//!
//! Every generator is deterministic: the same arguments always produce the
//! same bytes, which keeps score assertions exact across runs.

use crate::types::{ImageFrame, RGBA_CHANNELS, RGB_CHANNELS};

/// A frame where every pixel has the same gray level.
///
/// All four orientation scores are exactly zero for such a frame.
pub fn uniform_frame(width: u32, height: u32, level: u8) -> ImageFrame {
    let data = vec![level; (width * height) as usize * RGB_CHANNELS as usize];
    ImageFrame::new(data, width, height, RGB_CHANNELS)
}

/// A checkerboard of `check_size` squares alternating between two levels.
///
/// Carries strong edges in every orientation.
pub fn checkerboard_frame(width: u32, height: u32, check_size: u32, low: u8, high: u8) -> ImageFrame {
    let mut data = Vec::with_capacity((width * height) as usize * RGB_CHANNELS as usize);
    for y in 0..height {
        for x in 0..width {
            let level = if ((x / check_size) + (y / check_size)) % 2 == 0 {
                high
            } else {
                low
            };
            data.extend_from_slice(&[level, level, level]);
        }
    }
    ImageFrame::new(data, width, height, RGB_CHANNELS)
}

/// Horizontal bands: rows alternate between two levels every `period` rows.
///
/// Rows are internally constant, so the horizontal (X) response is zero.
pub fn horizontal_stripe_frame(width: u32, height: u32, period: u32, low: u8, high: u8) -> ImageFrame {
    let mut data = Vec::with_capacity((width * height) as usize * RGB_CHANNELS as usize);
    for y in 0..height {
        let level = if (y / period) % 2 == 0 { high } else { low };
        for _ in 0..width {
            data.extend_from_slice(&[level, level, level]);
        }
    }
    ImageFrame::new(data, width, height, RGB_CHANNELS)
}

/// Vertical bars: columns alternate between two levels every `period` columns.
pub fn vertical_stripe_frame(width: u32, height: u32, period: u32, low: u8, high: u8) -> ImageFrame {
    let mut data = Vec::with_capacity((width * height) as usize * RGB_CHANNELS as usize);
    for _ in 0..height {
        for x in 0..width {
            let level = if (x / period) % 2 == 0 { high } else { low };
            data.extend_from_slice(&[level, level, level]);
        }
    }
    ImageFrame::new(data, width, height, RGB_CHANNELS)
}

/// A left-to-right brightness ramp.
pub fn gradient_frame(width: u32, height: u32) -> ImageFrame {
    let mut data = Vec::with_capacity((width * height) as usize * RGB_CHANNELS as usize);
    for _ in 0..height {
        for x in 0..width {
            let level = (x * 255 / width.max(1)) as u8;
            data.extend_from_slice(&[level, level, level]);
        }
    }
    ImageFrame::new(data, width, height, RGB_CHANNELS)
}

/// Pseudo-random texture around a mid-gray base.
///
/// Uses a fixed integer hash of the pixel coordinates, so the noise is
/// reproducible and roughly isotropic.
pub fn hash_noise_frame(width: u32, height: u32, amplitude: u8) -> ImageFrame {
    let span = amplitude as u32 * 2 + 1;
    let mut data = Vec::with_capacity((width * height) as usize * RGB_CHANNELS as usize);
    for y in 0..height {
        for x in 0..width {
            let mut h = x.wrapping_mul(0x9E37_79B9) ^ y.wrapping_mul(0x85EB_CA6B);
            h ^= h >> 13;
            h = h.wrapping_mul(0xC2B2_AE35);
            h ^= h >> 16;
            let offset = (h % span) as i16 - amplitude as i16;
            let level = (128 + offset) as u8;
            data.extend_from_slice(&[level, level, level]);
        }
    }
    ImageFrame::new(data, width, height, RGB_CHANNELS)
}

/// Extend a 3-channel frame with a fully opaque alpha channel.
///
/// Scores must be identical for a frame and its alpha-extended twin.
pub fn with_opaque_alpha(frame: &ImageFrame) -> ImageFrame {
    assert_eq!(frame.channels, RGB_CHANNELS, "expected a 3-channel frame");
    let mut data = Vec::with_capacity(frame.pixel_count() * RGBA_CHANNELS as usize);
    for pixel in frame.data.chunks_exact(RGB_CHANNELS as usize) {
        data.extend_from_slice(pixel);
        data.push(255);
    }
    ImageFrame::new(data, frame.width, frame.height, RGBA_CHANNELS)
}

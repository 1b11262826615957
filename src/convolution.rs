//! 3x3 kernel convolution over RGB frames
//!
//! Applies a directional kernel to each color channel independently,
//! producing a same-size floating-point response buffer.

use crate::errors::SharpnessError;
use crate::kernels::{DirectionalKernel, KERNEL_SIZE};
use crate::types::{ImageFrame, ResponseBuffer, RGB_CHANNELS};

/// Convolve a 3-channel frame with a 3x3 kernel.
///
/// Cross-correlation in the image-processing sense: the kernel is applied
/// as-is, without flipping or normalization, accumulating in `f64`. Border
/// policy is REPLICATE: out-of-bounds taps clamp to the nearest edge pixel,
/// so the output keeps the full frame width and height.
///
/// Fails with [`SharpnessError::InvalidChannelCount`] unless the frame has
/// exactly 3 channels, and with [`SharpnessError::ConvolutionFailure`] on
/// zero-sized dimensions or a data buffer that disagrees with them.
pub fn convolve(
    frame: &ImageFrame,
    kernel: &DirectionalKernel,
) -> Result<ResponseBuffer, SharpnessError> {
    if frame.channels != RGB_CHANNELS {
        return Err(SharpnessError::InvalidChannelCount {
            channels: frame.channels,
        });
    }
    if frame.width == 0 || frame.height == 0 {
        return Err(SharpnessError::ConvolutionFailure(format!(
            "degenerate frame dimensions {}x{}",
            frame.width, frame.height
        )));
    }
    if !frame.is_valid() {
        return Err(SharpnessError::ConvolutionFailure(format!(
            "frame data length {} does not match {}x{}x{}",
            frame.data.len(),
            frame.width,
            frame.height,
            frame.channels
        )));
    }

    let width = frame.width as usize;
    let height = frame.height as usize;
    let pixel_count = width * height;
    let mut channels = [
        vec![0.0f64; pixel_count],
        vec![0.0f64; pixel_count],
        vec![0.0f64; pixel_count],
    ];

    log::trace!(
        "convolving {}x{} frame with kernel {}",
        width,
        height,
        kernel.orientation.as_str()
    );

    for y in 0..height {
        for x in 0..width {
            let mut acc = [0.0f64; 3];
            for ky in 0..KERNEL_SIZE {
                for kx in 0..KERNEL_SIZE {
                    let coeff = kernel.coefficients[ky][kx];
                    if coeff == 0.0 {
                        continue;
                    }
                    let sy = (y as isize + ky as isize - 1).clamp(0, height as isize - 1) as usize;
                    let sx = (x as isize + kx as isize - 1).clamp(0, width as isize - 1) as usize;
                    let src = (sy * width + sx) * RGB_CHANNELS as usize;
                    acc[0] += coeff * frame.data[src] as f64;
                    acc[1] += coeff * frame.data[src + 1] as f64;
                    acc[2] += coeff * frame.data[src + 2] as f64;
                }
            }
            let dst = y * width + x;
            channels[0][dst] = acc[0];
            channels[1][dst] = acc[1];
            channels[2][dst] = acc[2];
        }
    }

    Ok(ResponseBuffer {
        width: frame.width,
        height: frame.height,
        channels,
    })
}

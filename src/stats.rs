//! Per-channel response statistics

use crate::errors::SharpnessError;
use crate::types::ResponseBuffer;

/// Population variance of one response channel.
///
/// Sum of squared deviations from the mean divided by the element count
/// (not N-1). Order-independent. `channel` must be 0, 1, or 2.
pub fn channel_variance(
    response: &ResponseBuffer,
    channel: usize,
) -> Result<f64, SharpnessError> {
    let values = &response.channels[channel];
    if values.is_empty() {
        return Err(SharpnessError::EmptyBuffer);
    }

    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let squared_deviations = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>();

    Ok(squared_deviations / count)
}

/// Sharpness of a response buffer: the maximum per-channel variance.
///
/// The channel with the strongest edge response dominates perceived
/// sharpness; a true edge in one channel must not be diluted by flat ones.
pub fn channel_sharpness(response: &ResponseBuffer) -> Result<f64, SharpnessError> {
    let mut sharpness = 0.0f64;
    for channel in 0..response.channels.len() {
        sharpness = sharpness.max(channel_variance(response, channel)?);
    }
    Ok(sharpness)
}

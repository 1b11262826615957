//! Testing utilities for sharpgate
//!
//! Provides deterministic synthetic frames so analysis behavior can be
//! exercised offline, without captured images.

pub mod synthetic_data;

pub use synthetic_data::{
    checkerboard_frame, gradient_frame, hash_noise_frame, horizontal_stripe_frame,
    uniform_frame, vertical_stripe_frame, with_opaque_alpha,
};

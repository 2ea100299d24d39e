#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Color`**: An `Srgb<f32>` with channels on the 0.0-255.0 intensity scale
//! - **`Frame`**: One color per channel at a single instant
//! - **`Animation`**: An ordered, loop-closed list of frames with wrapping playback lookup
//! - **`Easing`** / **`Ease`**: Curves that reshape interpolation progress
//! - **`InterpolationSpace`**: Whether transitions blend in RGB, plain HSV or shortest-arc HSV
//! - **`AnimationKind`**: Selects one of the built-in animation programs
//! - **`AnimationConfig`**: Gradient colors, channel count and window grouping for generators
//!
//! Interpolated colors may carry fractional or out-of-range values. Generators
//! quantize their output, so every channel of a generated animation is a whole
//! intensity in `[0, 255]`.

extern crate alloc;

// Re-export palette's color types for user convenience
pub use palette::{Hsl, Hsv, Srgb};

pub mod animation;
pub mod colors;
pub mod config;
pub mod easing;
pub mod generators;
pub mod interpolate;
pub mod types;

pub use animation::{Animation, AnimationBuilder};
pub use colors::{
    BLACK, BLUE, COLOR_OFF, Color, GREEN, RED, WHITE, change_hue, hsl_to_rgb, hsv_to_rgb, quantize,
    rgb, rgb_to_hsl, rgb_to_hsv, to_rgb8,
};
pub use config::AnimationConfig;
pub use easing::{Ease, Easing};
#[cfg(feature = "std")]
pub use generators::generate;
pub use generators::{AnimationKind, generate_with_rng};
pub use interpolate::{
    interpolate_channels, interpolate_color, interpolate_frames, interpolate_hsv, interpolate_rgb,
};
pub use types::{AnimationError, CHANNEL_COUNT, Frame, InterpolationSpace, MAX_CHANNELS};

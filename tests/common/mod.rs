//! Shared test infrastructure for window-animator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use rand::SeedableRng;
use rand::rngs::SmallRng;
use window_animator::{Animation, Color, Frame};

// ============================================================================
// Deterministic randomness
// ============================================================================

/// Seeded generator so randomized programs are reproducible in tests
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Color, b: Color) -> bool {
    const EPSILON: f32 = 0.001;
    colors_equal_epsilon(a, b, EPSILON)
}

/// Compare two colors with custom epsilon
pub fn colors_equal_epsilon(a: Color, b: Color, epsilon: f32) -> bool {
    (a.red - b.red).abs() < epsilon
        && (a.green - b.green).abs() < epsilon
        && (a.blue - b.blue).abs() < epsilon
}

/// Euclidean distance between two colors
pub fn color_distance(a: Color, b: Color) -> f32 {
    let dr = a.red - b.red;
    let dg = a.green - b.green;
    let db = a.blue - b.blue;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Largest per-channel color distance between two frames
pub fn frame_distance(a: &Frame, b: &Frame) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| color_distance(x, y))
        .fold(0.0, f32::max)
}

/// Largest distance between consecutive frames, excluding the wraparound pair
pub fn max_step_distance(animation: &Animation) -> f32 {
    animation
        .frames()
        .windows(2)
        .map(|pair| frame_distance(&pair[0], &pair[1]))
        .fold(0.0, f32::max)
}

/// Distance from the last frame back to the first
pub fn wraparound_distance(animation: &Animation) -> f32 {
    let frames = animation.frames();
    frame_distance(&frames[frames.len() - 1], &frames[0])
}

/// Whether every channel holds a whole intensity in [0, 255]
pub fn is_quantized(color: Color) -> bool {
    [color.red, color.green, color.blue]
        .iter()
        .all(|&c| (0.0..=255.0).contains(&c) && c.fract() == 0.0)
}

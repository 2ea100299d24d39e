//! Step-wise interpolation of single colors and whole frames.
//!
//! A transition of `steps` steps excludes the starting color and ends on the
//! target color, so consecutive transitions can be chained without repeating
//! their shared keyframe.

use alloc::vec::Vec;
use palette::{Hsv, Srgb};

use crate::colors::{Color, hsv_to_rgb, rgb_to_hsv};
use crate::easing::{Ease, Easing};
use crate::types::{AnimationError, Frame, InterpolationSpace, MAX_CHANNELS};

#[inline]
fn lerp(from: f32, to: f32, factor: f32) -> f32 {
    from + factor * (to - from)
}

/// Eased progress of step `index` out of `steps`, landing on 1.0 at the last step.
#[inline]
fn step_factor<E: Ease + ?Sized>(easing: &E, index: usize, steps: usize) -> f32 {
    easing.ease((index + 1) as f32 / steps as f32)
}

fn is_achromatic(hsv: &Hsv) -> bool {
    hsv.saturation == 0.0 || hsv.value == 0.0
}

/// Hue endpoints for an HSV blend, unwrapped so the blend takes the shorter
/// way around the wheel. Gray, white and black have no hue of their own and
/// borrow the other endpoint's.
fn hue_endpoints(start: &Hsv, end: &Hsv) -> (f32, f32) {
    let mut from = start.hue.into_positive_degrees();
    let mut to = end.hue.into_positive_degrees();

    if is_achromatic(start) {
        from = to;
    } else if is_achromatic(end) {
        to = from;
    }

    if to - from > 180.0 {
        to -= 360.0;
    } else if from - to > 180.0 {
        to += 360.0;
    }

    (from, to)
}

/// `[hue, saturation, value]` endpoints of an HSV blend.
fn hsv_endpoints(from: Color, to: Color, shortest: bool) -> ([f32; 3], [f32; 3]) {
    let start = rgb_to_hsv(from);
    let end = rgb_to_hsv(to);

    if !shortest {
        return (
            [start.hue.into_positive_degrees(), start.saturation, start.value],
            [end.hue.into_positive_degrees(), end.saturation, end.value],
        );
    }

    let (start_hue, end_hue) = hue_endpoints(&start, &end);
    let start_saturation = if start.value == 0.0 {
        end.saturation
    } else {
        start.saturation
    };
    let end_saturation = if end.value == 0.0 {
        start.saturation
    } else {
        end.saturation
    };

    (
        [start_hue, start_saturation, start.value],
        [end_hue, end_saturation, end.value],
    )
}

/// Produces the `steps` colors leading from `from` to `to`.
///
/// The result does not contain `from`; its last element is `to` whenever the
/// easing curve ends at 1.0. Zero steps yield an empty sequence.
pub fn interpolate_color<E: Ease + ?Sized>(
    from: Color,
    to: Color,
    steps: usize,
    space: InterpolationSpace,
    easing: &E,
) -> Vec<Color> {
    match space {
        InterpolationSpace::Rgb => (0..steps)
            .map(|i| {
                let factor = step_factor(easing, i, steps);
                Srgb::new(
                    lerp(from.red, to.red, factor),
                    lerp(from.green, to.green, factor),
                    lerp(from.blue, to.blue, factor),
                )
            })
            .collect(),
        InterpolationSpace::Hsv | InterpolationSpace::HsvShortest => {
            let shortest = space == InterpolationSpace::HsvShortest;
            let ([h0, s0, v0], [h1, s1, v1]) = hsv_endpoints(from, to, shortest);

            (0..steps)
                .map(|i| {
                    let factor = step_factor(easing, i, steps);
                    hsv_to_rgb(Hsv::new(
                        lerp(h0, h1, factor),
                        lerp(s0, s1, factor),
                        lerp(v0, v1, factor),
                    ))
                })
                .collect()
        }
    }
}

/// Linear RGB transition.
pub fn interpolate_rgb(from: Color, to: Color, steps: usize) -> Vec<Color> {
    interpolate_color(from, to, steps, InterpolationSpace::Rgb, &Easing::Linear)
}

/// Linear HSV transition.
pub fn interpolate_hsv(from: Color, to: Color, steps: usize) -> Vec<Color> {
    interpolate_color(from, to, steps, InterpolationSpace::Hsv, &Easing::Linear)
}

/// Interpolates every channel of `old` toward the same channel of `new`.
///
/// Returns `steps` frames, each as wide as the inputs. Frame `i` channel `j`
/// is step `i` of the transition from `old[j]` to `new[j]`.
///
/// # Errors
/// * `ChannelCountMismatch` - `old` and `new` differ in length
/// * `ChannelCountOutOfRange` - inputs are wider than [`MAX_CHANNELS`]
pub fn interpolate_channels<E: Ease + ?Sized>(
    old: &[Color],
    new: &[Color],
    steps: usize,
    space: InterpolationSpace,
    easing: &E,
) -> Result<Vec<Frame>, AnimationError> {
    if old.len() != new.len() {
        return Err(AnimationError::ChannelCountMismatch {
            expected: old.len(),
            actual: new.len(),
        });
    }
    if old.len() > MAX_CHANNELS {
        return Err(AnimationError::ChannelCountOutOfRange(old.len()));
    }

    let per_channel: Vec<Vec<Color>> = old
        .iter()
        .zip(new)
        .map(|(&from, &to)| interpolate_color(from, to, steps, space, easing))
        .collect();

    // Transpose channel-major sequences into step-major frames
    let mut frames = Vec::with_capacity(steps);
    for step in 0..steps {
        let mut frame = Frame::new();
        for channel in &per_channel {
            frame
                .push(channel[step])
                .map_err(|_| AnimationError::ChannelCountOutOfRange(old.len()))?;
        }
        frames.push(frame);
    }

    Ok(frames)
}

/// Linear interpolation of whole frames in the default color space.
pub fn interpolate_frames(
    old: &[Color],
    new: &[Color],
    steps: usize,
) -> Result<Vec<Frame>, AnimationError> {
    interpolate_channels(
        old,
        new,
        steps,
        InterpolationSpace::default(),
        &Easing::Linear,
    )
}

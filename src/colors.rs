//! Color space conversion helpers.
//!
//! Colors handled by this crate are `Srgb<f32>` values on the 0.0-255.0
//! intensity scale, the unit the display hardware is addressed in. Hue based
//! representations use palette's `Hsv` and `Hsl` with the hue in degrees and
//! the remaining components in 0.0-1.0.
//!
//! Every conversion is total: achromatic inputs (zero chroma, black, white)
//! resolve to hue 0 and saturation 0 instead of dividing by zero.

use palette::{Hsl, Hsv, Srgb};

/// An RGB color with components on the 0.0-255.0 scale.
pub type Color = Srgb<f32>;

const MAX_INTENSITY: f32 = 255.0;

pub const BLACK: Color = rgb(0.0, 0.0, 0.0);
pub const WHITE: Color = rgb(255.0, 255.0, 255.0);
pub const RED: Color = rgb(255.0, 0.0, 0.0);
pub const GREEN: Color = rgb(0.0, 255.0, 0.0);
pub const BLUE: Color = rgb(0.0, 0.0, 255.0);

/// Channel switched off.
pub const COLOR_OFF: Color = BLACK;

/// Creates a color from 0-255 channel intensities.
#[inline]
pub const fn rgb(red: f32, green: f32, blue: f32) -> Color {
    Srgb::new(red, green, blue)
}

/// Wraps any hue, however far out of range, into `[0, 360)`.
#[inline]
pub fn normalize_hue(degrees: f32) -> f32 {
    let wrapped = libm::fmodf(degrees, 360.0);
    if wrapped < 0.0 {
        // -0.0001 + 360.0 rounds to 360.0 in f32
        let shifted = wrapped + 360.0;
        if shifted >= 360.0 { 0.0 } else { shifted }
    } else {
        wrapped
    }
}

/// Clamps every channel into `[0, 255]` and floors it to a whole intensity.
#[inline]
pub fn quantize(color: Color) -> Color {
    Srgb::new(
        quantize_channel(color.red),
        quantize_channel(color.green),
        quantize_channel(color.blue),
    )
}

/// Narrows a color to 8-bit channels for direct rendering.
#[inline]
pub fn to_rgb8(color: Color) -> Srgb<u8> {
    let color = quantize(color);
    Srgb::new(color.red as u8, color.green as u8, color.blue as u8)
}

fn quantize_channel(value: f32) -> f32 {
    // NaN falls through both comparisons; treat it as dark
    if value.is_nan() {
        return 0.0;
    }
    libm::floorf(value.clamp(0.0, MAX_INTENSITY))
}

/// Hue in degrees for the channel that holds the maximum, shared by the HSL
/// and HSV decompositions.
fn hue_from_extremes(r: f32, g: f32, b: f32, max: f32, chroma: f32) -> f32 {
    if chroma == 0.0 {
        return 0.0;
    }

    let hue = if max == r {
        60.0 * ((g - b) / chroma)
    } else if max == g {
        60.0 * ((b - r) / chroma + 2.0)
    } else {
        60.0 * ((r - g) / chroma + 4.0)
    };

    normalize_hue(hue)
}

fn unit_channels(color: Color) -> (f32, f32, f32) {
    (
        color.red / MAX_INTENSITY,
        color.green / MAX_INTENSITY,
        color.blue / MAX_INTENSITY,
    )
}

/// Decomposes a color into hue, saturation and lightness.
pub fn rgb_to_hsl(color: Color) -> Hsl {
    let (r, g, b) = unit_channels(color);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    let hue = hue_from_extremes(r, g, b, max, delta);

    let denominator = 1.0 - libm::fabsf(2.0 * lightness - 1.0);
    let saturation = if delta == 0.0 || denominator == 0.0 {
        0.0
    } else {
        delta / denominator
    };

    Hsl::new(hue, saturation, lightness)
}

/// Rebuilds an RGB color from HSL.
///
/// Channels are floored to whole intensities and clamped into `[0, 255]`,
/// which also absorbs small negative values left by floating point noise.
pub fn hsl_to_rgb(hsl: Hsl) -> Color {
    let hue = hsl.hue.into_positive_degrees();
    let chroma = (1.0 - libm::fabsf(2.0 * hsl.lightness - 1.0)) * hsl.saturation;
    let x = chroma * (1.0 - libm::fabsf(libm::fmodf(hue / 60.0, 2.0) - 1.0));
    let m = hsl.lightness - chroma / 2.0;

    let (r, g, b) = if hue < 60.0 {
        (chroma, x, 0.0)
    } else if hue < 120.0 {
        (x, chroma, 0.0)
    } else if hue < 180.0 {
        (0.0, chroma, x)
    } else if hue < 240.0 {
        (0.0, x, chroma)
    } else if hue < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    quantize(Srgb::new(
        (r + m) * MAX_INTENSITY,
        (g + m) * MAX_INTENSITY,
        (b + m) * MAX_INTENSITY,
    ))
}

/// Decomposes a color into hue, saturation and value.
pub fn rgb_to_hsv(color: Color) -> Hsv {
    let (r, g, b) = unit_channels(color);
    let value = r.max(g).max(b);
    let chroma = value - r.min(g).min(b);

    let hue = hue_from_extremes(r, g, b, value, chroma);
    let saturation = if value == 0.0 { 0.0 } else { chroma / value };

    Hsv::new(hue, saturation, value)
}

/// Rebuilds an RGB color from HSV.
///
/// The result keeps fractional intensities so interpolated sequences stay
/// smooth; use [`quantize`] for final output.
pub fn hsv_to_rgb(hsv: Hsv) -> Color {
    let hue = hsv.hue.into_positive_degrees();
    let channel = |n: f32| {
        let k = libm::fmodf(n + hue / 60.0, 6.0);
        let ramp = k.min(4.0 - k).min(1.0).max(0.0);
        (hsv.value - hsv.value * hsv.saturation * ramp) * MAX_INTENSITY
    };

    Srgb::new(channel(5.0), channel(3.0), channel(1.0))
}

/// Rotates a color's hue by `degrees`, keeping saturation and lightness.
pub fn change_hue(color: Color, degrees: f32) -> Color {
    let hsl = rgb_to_hsl(color);
    let hue = normalize_hue(hsl.hue.into_positive_degrees() + degrees);
    hsl_to_rgb(Hsl::new(hue, hsl.saturation, hsl.lightness))
}

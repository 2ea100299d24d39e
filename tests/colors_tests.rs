//! Integration tests for colors module

mod common;
use common::*;

use palette::{FromColor, Hsl, Hsv, Srgb};
use window_animator::colors::{self, BLACK, BLUE, Color, GREEN, RED, WHITE, rgb};

fn hue_difference(a: f32, b: f32) -> f32 {
    let diff = (a - b).abs() % 360.0;
    diff.min(360.0 - diff)
}

fn sample_colors() -> Vec<Color> {
    let mut colors = Vec::new();
    for r in (0..=255).step_by(15) {
        for g in (0..=255).step_by(15) {
            for b in (0..=255).step_by(15) {
                colors.push(rgb(r as f32, g as f32, b as f32));
            }
        }
    }
    colors
}

#[test]
fn hsv_creates_primary_colors() {
    let red = colors::hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0));
    assert!(colors_equal(red, RED));

    let green = colors::hsv_to_rgb(Hsv::new(120.0, 1.0, 1.0));
    assert!(colors_equal(green, GREEN));

    let blue = colors::hsv_to_rgb(Hsv::new(240.0, 1.0, 1.0));
    assert!(colors_equal(blue, BLUE));
}

#[test]
fn hsl_creates_primary_colors() {
    assert_eq!(colors::hsl_to_rgb(Hsl::new(0.0, 1.0, 0.5)), RED);
    assert_eq!(colors::hsl_to_rgb(Hsl::new(120.0, 1.0, 0.5)), GREEN);
    assert_eq!(colors::hsl_to_rgb(Hsl::new(240.0, 1.0, 0.5)), BLUE);
    assert_eq!(colors::hsl_to_rgb(Hsl::new(0.0, 0.0, 1.0)), WHITE);
    assert_eq!(colors::hsl_to_rgb(Hsl::new(0.0, 0.0, 0.0)), BLACK);
}

#[test]
fn hsl_output_is_whole_intensities() {
    let color = colors::hsl_to_rgb(Hsl::new(200.0, 0.37, 0.61));
    assert!(is_quantized(color));
}

#[test]
fn hsv_handles_saturation() {
    let gray = colors::hsv_to_rgb(Hsv::new(0.0, 0.0, 0.5));
    assert!(colors_equal(gray, rgb(127.5, 127.5, 127.5)));
}

#[test]
fn hsv_handles_value() {
    let dim = colors::hsv_to_rgb(Hsv::new(0.0, 1.0, 0.5));
    assert!(colors_equal(dim, rgb(127.5, 0.0, 0.0)));

    let black = colors::hsv_to_rgb(Hsv::new(0.0, 1.0, 0.0));
    assert!(colors_equal(black, BLACK));
}

#[test]
fn hsv_hue_wraps_around_360() {
    let red1 = colors::hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0));
    let red2 = colors::hsv_to_rgb(Hsv::new(360.0, 1.0, 1.0));
    assert!(colors_equal(red1, red2));
}

#[test]
fn hsl_round_trip_stays_within_one_intensity() {
    for color in sample_colors() {
        let back = colors::hsl_to_rgb(colors::rgb_to_hsl(color));
        assert!(
            colors_equal_epsilon(back, color, 1.0 + 1e-3),
            "{:?} came back as {:?}",
            color,
            back
        );
    }
}

#[test]
fn hsv_round_trip_stays_within_one_intensity() {
    for color in sample_colors() {
        let back = colors::hsv_to_rgb(colors::rgb_to_hsv(color));
        assert!(
            colors_equal_epsilon(back, color, 1.0),
            "{:?} came back as {:?}",
            color,
            back
        );
    }
}

#[test]
fn gray_has_zero_saturation() {
    let hsl = colors::rgb_to_hsl(rgb(128.0, 128.0, 128.0));
    assert_eq!(hsl.saturation, 0.0);
    assert_eq!(hsl.hue.into_positive_degrees(), 0.0);
    assert!(!hsl.lightness.is_nan());
}

#[test]
fn black_has_zero_saturation_and_value() {
    let hsv = colors::rgb_to_hsv(BLACK);
    assert_eq!(hsv.saturation, 0.0);
    assert_eq!(hsv.value, 0.0);
    assert_eq!(hsv.hue.into_positive_degrees(), 0.0);

    let hsl = colors::rgb_to_hsl(BLACK);
    assert_eq!(hsl.saturation, 0.0);
}

#[test]
fn conversions_agree_with_palette() {
    for color in sample_colors() {
        let unit = Srgb::new(color.red / 255.0, color.green / 255.0, color.blue / 255.0);

        let ours = colors::rgb_to_hsv(color);
        let theirs: Hsv = Hsv::from_color(unit);
        assert!((ours.saturation - theirs.saturation).abs() < 1e-3, "{:?}", color);
        assert!((ours.value - theirs.value).abs() < 1e-3, "{:?}", color);
        if ours.saturation > 0.0 {
            let diff = hue_difference(
                ours.hue.into_positive_degrees(),
                theirs.hue.into_positive_degrees(),
            );
            assert!(diff < 0.1, "{:?}", color);
        }

        let ours = colors::rgb_to_hsl(color);
        let theirs: Hsl = Hsl::from_color(unit);
        assert!((ours.saturation - theirs.saturation).abs() < 1e-3, "{:?}", color);
        assert!((ours.lightness - theirs.lightness).abs() < 1e-3, "{:?}", color);
    }
}

#[test]
fn change_hue_wraps_large_rotations() {
    assert_eq!(colors::change_hue(RED, 370.0), colors::change_hue(RED, 10.0));
    assert_eq!(colors::change_hue(RED, 720.0), RED);
}

#[test]
fn change_hue_wraps_negative_rotations() {
    let rotated = colors::change_hue(RED, -10.0);
    let hue = colors::rgb_to_hsl(rotated).hue.into_positive_degrees();

    assert!(hue >= 0.0);
    assert!(hue_difference(hue, 350.0) < 1.0, "hue was {}", hue);
    assert_eq!(rotated.green, 0.0);
    assert!(rotated.blue > 0.0);
}

#[test]
fn change_hue_moves_between_primaries() {
    assert_eq!(colors::change_hue(RED, 120.0), GREEN);
    assert_eq!(colors::change_hue(GREEN, 120.0), BLUE);
    assert_eq!(colors::change_hue(BLUE, 120.0), RED);
}

#[test]
fn change_hue_leaves_grays_alone() {
    let gray = rgb(100.0, 100.0, 100.0);
    let rotated = colors::change_hue(gray, 90.0);
    assert!(colors_equal_epsilon(rotated, gray, 1.0 + 1e-3));
    assert_eq!(rotated.red, rotated.green);
    assert_eq!(rotated.green, rotated.blue);
}

#[test]
fn to_rgb8_clamps_out_of_range_channels() {
    let color = colors::to_rgb8(rgb(-12.0, 63.75, 400.0));
    assert_eq!(color, Srgb::new(0u8, 63, 255));
}

//! Built-in animation programs.
//!
//! Every generator returns a complete, loop-closed [`Animation`] whose
//! colors are already clamped and floored to 8-bit intensities. They are
//! plain functions of an [`AnimationConfig`]; only [`random_lights`] also
//! draws from a random number generator.

use alloc::vec::Vec;
use rand::Rng;

use crate::animation::Animation;
use crate::colors::{BLACK, BLUE, Color, GREEN, RED, WHITE, change_hue, rgb};
use crate::config::AnimationConfig;
use crate::easing::Easing;
use crate::interpolate::{interpolate_channels, interpolate_hsv, interpolate_rgb};
use crate::types::{AnimationError, Frame, InterpolationSpace, frame_from_iter, uniform_frame};

/// Steps between two rotated keyframes of the sleepy gradient.
const SLEEPY_STEPS: usize = 12;

/// Length of the tail behind the knight rider light.
const SWEEP_FADE_STEPS: usize = 12;

/// Steps between two positions of the knight rider light.
const SWEEP_STEPS: usize = 2;

/// Number of random keyframes in the random lights program.
const RANDOM_KEYFRAMES: usize = 30;

/// Steps between two random keyframes.
const RANDOM_STEPS: usize = 30;

/// Chance that a window lights up in a random keyframe.
const RANDOM_LIT_PROBABILITY: f64 = 0.1;

/// Steps of one half of the lighthouse pulse.
const LIGHTHOUSE_STEPS: usize = 100;

/// Steps of each third of the gaming color wheel.
const GAMING_STEPS: usize = 120;

/// Selects one of the built-in animation programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationKind {
    /// Gradient between the configured colors rotating across the channels
    /// while its hue slowly drifts around the wheel.
    SleepyRgb,

    /// Single red light sweeping back and forth with a fading tail.
    KnightRider,

    /// Windows randomly lighting up and fading out.
    RandomLights,

    /// All channels pulsing from black to white and back.
    Lighthouse,

    /// Full color wheel scrolling across the channels.
    GamingRgb,
}

impl AnimationKind {
    /// All programs, in selector order.
    pub const ALL: [AnimationKind; 5] = [
        AnimationKind::SleepyRgb,
        AnimationKind::KnightRider,
        AnimationKind::RandomLights,
        AnimationKind::Lighthouse,
        AnimationKind::GamingRgb,
    ];

    /// Stable identifier used by selectors and query strings.
    pub const fn key(self) -> &'static str {
        match self {
            AnimationKind::SleepyRgb => "sleepy_rgb",
            AnimationKind::KnightRider => "knight_rider",
            AnimationKind::RandomLights => "random_lights",
            AnimationKind::Lighthouse => "lighthouse",
            AnimationKind::GamingRgb => "gaming_rgb",
        }
    }

    /// Human readable name.
    pub const fn label(self) -> &'static str {
        match self {
            AnimationKind::SleepyRgb => "Sleepy RGB",
            AnimationKind::KnightRider => "Knight Rider 2023",
            AnimationKind::RandomLights => "Random 1378",
            AnimationKind::Lighthouse => "Lighthouse",
            AnimationKind::GamingRgb => "Gaming RGB",
        }
    }

    /// Credited designer of the program.
    pub const fn author(self) -> &'static str {
        match self {
            AnimationKind::GamingRgb => "vilkku",
            _ => "saulis",
        }
    }

    /// Whether repeated calls can produce different frames.
    pub const fn is_randomized(self) -> bool {
        matches!(self, AnimationKind::RandomLights)
    }
}

impl core::fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl core::str::FromStr for AnimationKind {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimationKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or(AnimationError::UnknownAnimation)
    }
}

/// Runs the program selected by `kind`, drawing randomness from `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    kind: AnimationKind,
    config: &AnimationConfig,
    rng: &mut R,
) -> Result<Animation, AnimationError> {
    let animation = match kind {
        AnimationKind::SleepyRgb => sleepy_rgb(config),
        AnimationKind::KnightRider => knight_rider(config),
        AnimationKind::RandomLights => random_lights(config, rng),
        AnimationKind::Lighthouse => lighthouse(config),
        AnimationKind::GamingRgb => gaming_rgb(config),
    }?;

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "generated {} with {} frames of {} channels",
        kind,
        animation.len(),
        animation.channel_count()
    );

    Ok(animation)
}

/// Runs the program selected by `kind` using the thread-local RNG.
#[cfg(feature = "std")]
pub fn generate(
    kind: AnimationKind,
    config: &AnimationConfig,
) -> Result<Animation, AnimationError> {
    generate_with_rng(kind, config, &mut rand::thread_rng())
}

/// Interpolates through `keyframes` in order, starting on the first keyframe.
///
/// With `close_loop` the last keyframe also transitions back to the first,
/// which then ends the sequence instead of starting it.
fn chain_keyframes(
    keyframes: &[Frame],
    steps: usize,
    space: InterpolationSpace,
    close_loop: bool,
) -> Result<Vec<Frame>, AnimationError> {
    let mut frames = Vec::with_capacity(keyframes.len() * steps + 1);

    if close_loop {
        for (i, keyframe) in keyframes.iter().enumerate() {
            let next = &keyframes[(i + 1) % keyframes.len()];
            frames.extend(interpolate_channels(
                keyframe,
                next,
                steps,
                space,
                &Easing::Linear,
            )?);
        }
    } else if let Some(first) = keyframes.first() {
        frames.push(first.clone());
        for pair in keyframes.windows(2) {
            frames.extend(interpolate_channels(
                &pair[0],
                &pair[1],
                steps,
                space,
                &Easing::Linear,
            )?);
        }
    }

    Ok(frames)
}

/// Rotating gradient with a hue drift.
///
/// The base gradient runs `start -> stop -> start` across the channels. Each
/// keyframe shifts it one channel further and consecutive keyframes are
/// blended, with the last one leading back into the first. Frame `i` of
/// `total` is then hue shifted by `i * 360 / total` degrees, so the drift
/// completes one turn per loop.
pub fn sleepy_rgb(config: &AnimationConfig) -> Result<Animation, AnimationError> {
    config.validate()?;
    let count = config.channel_count;

    let half = count / 2;
    let mut base = interpolate_hsv(config.start, config.stop, half);
    base.extend(interpolate_hsv(config.stop, config.start, count - half));

    let keyframes = (0..count)
        .map(|shift| frame_from_iter((0..count).map(|channel| base[(channel + shift) % count])))
        .collect::<Result<Vec<_>, _>>()?;

    let mut frames = chain_keyframes(&keyframes, SLEEPY_STEPS, InterpolationSpace::Rgb, true)?;

    let total = frames.len() as f32;
    for (i, frame) in frames.iter_mut().enumerate() {
        let degrees = i as f32 * 360.0 / total;
        for color in frame.iter_mut() {
            *color = change_hue(*color, degrees);
        }
    }

    Animation::builder(count).frames(frames)?.quantized().build()
}

/// Red light sweeping across the channels and back.
///
/// The channel under the light and its neighbours take their color from a
/// short red-to-black fade indexed by distance; channels beyond the fade are
/// dark. Neighbouring positions are blended, and the forward sweep is
/// followed by its reverse.
pub fn knight_rider(config: &AnimationConfig) -> Result<Animation, AnimationError> {
    config.validate()?;
    let count = config.channel_count;

    let fade = interpolate_rgb(RED, BLACK, SWEEP_FADE_STEPS);

    let positions = (0..count)
        .map(|position| {
            frame_from_iter((0..count).map(|channel| {
                fade.get(channel.abs_diff(position)).copied().unwrap_or(BLACK)
            }))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let frames = chain_keyframes(&positions, SWEEP_STEPS, InterpolationSpace::Rgb, false)?;

    Animation::builder(count)
        .frames(frames)?
        .ping_pong()
        .quantized()
        .build()
}

/// Picks a dark or, with low probability, random color for each window.
fn random_keyframe<R: Rng + ?Sized>(
    config: &AnimationConfig,
    rng: &mut R,
) -> Result<Frame, AnimationError> {
    let windows = config.channel_count.div_ceil(config.group_size);
    let mut colors = Vec::with_capacity(windows * config.group_size);

    for _ in 0..windows {
        let color = if rng.gen_bool(RANDOM_LIT_PROBABILITY) {
            random_color(rng)
        } else {
            BLACK
        };
        colors.extend(core::iter::repeat_n(color, config.group_size));
    }

    // The last window may be cut short when groups don't divide the channels
    colors.truncate(config.channel_count);
    frame_from_iter(colors)
}

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    rgb(
        rng.gen_range(0.0..255.0),
        rng.gen_range(0.0..255.0),
        rng.gen_range(0.0..255.0),
    )
}

/// Windows randomly lighting up in groups.
///
/// Every keyframe is held by repeating it once before blending into the
/// next, so lit windows linger. The sequence plays forward then in reverse.
pub fn random_lights<R: Rng + ?Sized>(
    config: &AnimationConfig,
    rng: &mut R,
) -> Result<Animation, AnimationError> {
    config.validate()?;

    let mut keyframes = Vec::with_capacity(RANDOM_KEYFRAMES * 2);
    for _ in 0..RANDOM_KEYFRAMES {
        let keyframe = random_keyframe(config, rng)?;
        keyframes.push(keyframe.clone());
        keyframes.push(keyframe);
    }

    let frames = chain_keyframes(&keyframes, RANDOM_STEPS, InterpolationSpace::Rgb, false)?;

    Animation::builder(config.channel_count)
        .frames(frames)?
        .ping_pong()
        .quantized()
        .build()
}

/// Every channel fading from black to white with a sine ease-in and back.
pub fn lighthouse(config: &AnimationConfig) -> Result<Animation, AnimationError> {
    config.validate()?;
    let count = config.channel_count;

    let black = uniform_frame(BLACK, count)?;
    let white = uniform_frame(WHITE, count)?;
    let frames = interpolate_channels(
        &black,
        &white,
        LIGHTHOUSE_STEPS,
        InterpolationSpace::Rgb,
        &Easing::EaseInSine,
    )?;

    Animation::builder(count)
        .frames(frames)?
        .ping_pong()
        .quantized()
        .build()
}

/// Red, green and blue color wheel scrolling across the channels.
///
/// Channel `j` of frame `row` shows wheel color `row + j * len / count`, so
/// the channels span the whole wheel and each frame advances it one step.
pub fn gaming_rgb(config: &AnimationConfig) -> Result<Animation, AnimationError> {
    config.validate()?;
    let count = config.channel_count;

    let mut wheel = interpolate_hsv(RED, GREEN, GAMING_STEPS);
    wheel.extend(interpolate_hsv(GREEN, BLUE, GAMING_STEPS));
    wheel.extend(interpolate_hsv(BLUE, RED, GAMING_STEPS));
    let len = wheel.len();

    let frames = (0..len)
        .map(|row| {
            frame_from_iter((0..count).map(|channel| wheel[(channel * len / count + row) % len]))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Animation::builder(count).frames(frames)?.quantized().build()
}

//! Core types shared by interpolators and generators.

use crate::colors::Color;

/// Number of channels on the display.
pub const CHANNEL_COUNT: usize = 30;

/// Upper bound on channels a single frame can address.
pub const MAX_CHANNELS: usize = 64;

/// One color per channel at a single instant.
pub type Frame = heapless::Vec<Color, MAX_CHANNELS>;

/// Color space in which intermediate colors are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterpolationSpace {
    /// Straight per-channel blend of red, green and blue.
    Rgb,

    /// Independent blend of hue, saturation and value. Keeps transitions
    /// between distant hues vivid instead of passing through gray.
    #[default]
    Hsv,

    /// HSV blend whose hue takes the shorter way around the wheel. Gray,
    /// white and black borrow the hue of the other endpoint, and black also
    /// borrows its saturation.
    HsvShortest,
}

/// Errors raised when inputs break the shape contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationError {
    /// Two frames that must line up channel by channel have different lengths.
    ChannelCountMismatch { expected: usize, actual: usize },

    /// Channel count is zero or above [`MAX_CHANNELS`].
    ChannelCountOutOfRange(usize),

    /// Channel group size is zero.
    InvalidGroupSize,

    /// Pixel rows are not exactly one channel wide, or there are fewer than two.
    InvalidImageDimensions { width: usize, height: usize },

    /// Pixel buffer holds fewer bytes than its dimensions require.
    PixelBufferTooShort { expected: usize, actual: usize },

    /// Animation has no frames.
    EmptyAnimation,

    /// Unknown animation name.
    UnknownAnimation,
}

impl core::fmt::Display for AnimationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AnimationError::ChannelCountMismatch { expected, actual } => {
                write!(
                    f,
                    "channel count mismatch: expected {} channels, got {}",
                    expected, actual
                )
            }
            AnimationError::ChannelCountOutOfRange(count) => {
                write!(
                    f,
                    "channel count {} must be between 1 and {}",
                    count, MAX_CHANNELS
                )
            }
            AnimationError::InvalidGroupSize => {
                write!(f, "channel group size must be at least 1")
            }
            AnimationError::InvalidImageDimensions { width, height } => {
                write!(
                    f,
                    "image is {}x{}, expected one pixel per channel and at least 2 rows",
                    width, height
                )
            }
            AnimationError::PixelBufferTooShort { expected, actual } => {
                write!(
                    f,
                    "pixel buffer holds {} bytes, expected {}",
                    actual, expected
                )
            }
            AnimationError::EmptyAnimation => {
                write!(f, "animation must have at least one frame")
            }
            AnimationError::UnknownAnimation => {
                write!(f, "unknown animation name")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnimationError {}

/// Builds a frame of `count` copies of `color`.
pub fn uniform_frame(color: Color, count: usize) -> Result<Frame, AnimationError> {
    frame_from_iter(core::iter::repeat_n(color, count))
}

/// Collects colors into a frame, failing if they exceed [`MAX_CHANNELS`].
pub fn frame_from_iter<I>(colors: I) -> Result<Frame, AnimationError>
where
    I: IntoIterator<Item = Color>,
{
    let mut frame = Frame::new();
    let mut count = 0;
    let mut overflowed = false;
    for color in colors {
        count += 1;
        if frame.push(color).is_err() {
            overflowed = true;
        }
    }
    if overflowed {
        return Err(AnimationError::ChannelCountOutOfRange(count));
    }
    Ok(frame)
}

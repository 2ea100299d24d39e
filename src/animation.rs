//! Loop-closed animations and the builder that validates them.

use alloc::vec::Vec;
use palette::Srgb;

use crate::colors::{quantize, rgb, to_rgb8};
use crate::types::{AnimationError, Frame, MAX_CHANNELS, frame_from_iter};

/// One full playback loop of frames.
///
/// Every frame has the same number of channels. Consumers step a playhead
/// through [`frame_at`](Self::frame_at), which wraps around at the end, so
/// the last frame must lead smoothly back into the first.
///
/// An animation is read-only once built and can be shared freely between
/// readers.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frames: Vec<Frame>,
    channel_count: usize,
}

impl Animation {
    /// Creates a new animation builder for frames of `channel_count` channels.
    pub fn builder(channel_count: usize) -> AnimationBuilder {
        AnimationBuilder::new(channel_count)
    }

    /// Wraps a list of frames, checking that they all have the same width.
    ///
    /// # Errors
    /// * `EmptyAnimation` - No frames were given
    /// * `ChannelCountMismatch` - A frame is narrower or wider than the first one
    pub fn from_frames(frames: Vec<Frame>) -> Result<Self, AnimationError> {
        let channel_count = frames
            .first()
            .map(|frame| frame.len())
            .ok_or(AnimationError::EmptyAnimation)?;

        Self::builder(channel_count).frames(frames)?.build()
    }

    /// Plays `frames` forward and then backward as one loop.
    ///
    /// # Errors
    /// Same as [`from_frames`](Self::from_frames).
    pub fn ping_pong(frames: Vec<Frame>) -> Result<Self, AnimationError> {
        let channel_count = frames
            .first()
            .map(|frame| frame.len())
            .ok_or(AnimationError::EmptyAnimation)?;

        Self::builder(channel_count)
            .frames(frames)?
            .ping_pong()
            .build()
    }

    /// Converts already decoded RGBA pixel rows into one frame per row.
    ///
    /// The image must be exactly `channel_count` pixels wide and at least two
    /// rows tall. Alpha is ignored.
    ///
    /// # Errors
    /// * `ChannelCountOutOfRange` - `channel_count` is zero or above [`MAX_CHANNELS`]
    /// * `InvalidImageDimensions` - Width differs from `channel_count`, height is below 2
    ///   or the image size overflows `usize`
    /// * `PixelBufferTooShort` - `pixels` holds fewer than `width * height * 4` bytes
    pub fn from_rgba_rows(
        width: usize,
        height: usize,
        pixels: &[u8],
        channel_count: usize,
    ) -> Result<Self, AnimationError> {
        if channel_count == 0 || channel_count > MAX_CHANNELS {
            return Err(AnimationError::ChannelCountOutOfRange(channel_count));
        }
        if width != channel_count || height < 2 {
            return Err(AnimationError::InvalidImageDimensions { width, height });
        }

        let row_bytes = width * 4;
        let expected = row_bytes
            .checked_mul(height)
            .ok_or(AnimationError::InvalidImageDimensions { width, height })?;
        if pixels.len() < expected {
            return Err(AnimationError::PixelBufferTooShort {
                expected,
                actual: pixels.len(),
            });
        }

        let mut builder = Self::builder(channel_count);
        for row in pixels[..expected].chunks_exact(row_bytes) {
            let frame = frame_from_iter(
                row.chunks_exact(4)
                    .map(|px| rgb(px[0] as f32, px[1] as f32, px[2] as f32)),
            )?;
            builder = builder.frame(frame)?;
        }
        builder.build()
    }

    /// Returns the frame under `playhead`, wrapping past the end.
    #[inline]
    pub fn frame_at(&self, playhead: usize) -> &Frame {
        &self.frames[playhead % self.frames.len()]
    }

    /// Iterates over the frame under `playhead` as 8-bit colors.
    pub fn iter_rgb8(&self, playhead: usize) -> impl Iterator<Item = Srgb<u8>> + '_ {
        self.frame_at(playhead).iter().map(|&color| to_rgb8(color))
    }

    /// Returns all frames in playback order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns the number of frames in one loop.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; an animation holds at least one frame.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns the number of channels in every frame.
    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    /// Iterates over the frames.
    pub fn iter(&self) -> core::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Returns the underlying frames.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

impl<'a> IntoIterator for &'a Animation {
    type Item = &'a Frame;
    type IntoIter = core::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Builder for constructing validated animations.
#[derive(Debug)]
pub struct AnimationBuilder {
    frames: Vec<Frame>,
    channel_count: usize,
    ping_pong: bool,
    quantized: bool,
}

impl AnimationBuilder {
    /// Creates a new empty builder for frames of `channel_count` channels.
    pub fn new(channel_count: usize) -> Self {
        Self {
            frames: Vec::new(),
            channel_count,
            ping_pong: false,
            quantized: false,
        }
    }

    /// Appends a frame.
    ///
    /// # Errors
    /// * `ChannelCountMismatch` - The frame is not `channel_count` channels wide
    pub fn frame(mut self, frame: Frame) -> Result<Self, AnimationError> {
        if frame.len() != self.channel_count {
            return Err(AnimationError::ChannelCountMismatch {
                expected: self.channel_count,
                actual: frame.len(),
            });
        }
        self.frames.push(frame);
        Ok(self)
    }

    /// Appends every frame from `frames`.
    pub fn frames<I>(mut self, frames: I) -> Result<Self, AnimationError>
    where
        I: IntoIterator<Item = Frame>,
    {
        for frame in frames {
            self = self.frame(frame)?;
        }
        Ok(self)
    }

    /// Plays the frames forward and then backward, closing the loop.
    pub fn ping_pong(mut self) -> Self {
        self.ping_pong = true;
        self
    }

    /// Clamps and floors every channel to a whole 8-bit intensity.
    pub fn quantized(mut self) -> Self {
        self.quantized = true;
        self
    }

    /// Builds and validates the animation.
    ///
    /// # Errors
    /// * `ChannelCountOutOfRange` - `channel_count` is zero or above [`MAX_CHANNELS`]
    /// * `EmptyAnimation` - No frames were added
    pub fn build(self) -> Result<Animation, AnimationError> {
        if self.channel_count == 0 || self.channel_count > MAX_CHANNELS {
            return Err(AnimationError::ChannelCountOutOfRange(self.channel_count));
        }
        if self.frames.is_empty() {
            return Err(AnimationError::EmptyAnimation);
        }

        let mut frames = self.frames;
        if self.ping_pong {
            let reversed: Vec<Frame> = frames.iter().rev().cloned().collect();
            frames.extend(reversed);
        }
        if self.quantized {
            for frame in &mut frames {
                for color in frame.iter_mut() {
                    *color = quantize(*color);
                }
            }
        }

        Ok(Animation {
            frames,
            channel_count: self.channel_count,
        })
    }
}

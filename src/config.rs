//! Generator configuration.

use crate::colors::{Color, rgb};
use crate::types::{AnimationError, CHANNEL_COUNT, MAX_CHANNELS};

/// Parameters shared by the animation generators.
///
/// `start` and `stop` are the gradient endpoints used by gradient based
/// programs. `group_size` is the number of neighbouring channels that belong
/// to one physical window and always share a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    pub start: Color,
    pub stop: Color,
    pub channel_count: usize,
    pub group_size: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            start: rgb(0.0, 50.0, 0.0),
            stop: rgb(0.0, 255.0, 0.0),
            channel_count: CHANNEL_COUNT,
            group_size: 3,
        }
    }
}

impl AnimationConfig {
    /// Sets the gradient start color.
    pub fn start(mut self, color: Color) -> Self {
        self.start = color;
        self
    }

    /// Sets the gradient stop color.
    pub fn stop(mut self, color: Color) -> Self {
        self.stop = color;
        self
    }

    /// Sets the number of channels per frame.
    pub fn channel_count(mut self, count: usize) -> Self {
        self.channel_count = count;
        self
    }

    /// Sets how many neighbouring channels form one window.
    pub fn group_size(mut self, size: usize) -> Self {
        self.group_size = size;
        self
    }

    /// Checks that the configuration describes a drivable display.
    ///
    /// # Errors
    /// * `ChannelCountOutOfRange` - `channel_count` is zero or above [`MAX_CHANNELS`]
    /// * `InvalidGroupSize` - `group_size` is zero
    pub fn validate(&self) -> Result<(), AnimationError> {
        if self.channel_count == 0 || self.channel_count > MAX_CHANNELS {
            return Err(AnimationError::ChannelCountOutOfRange(self.channel_count));
        }
        if self.group_size == 0 {
            return Err(AnimationError::InvalidGroupSize);
        }
        Ok(())
    }
}

//! Easing curves that reshape normalized progress.

use core::f32::consts::PI;

/// Remaps normalized progress in `[0, 1]` to a shaping factor.
///
/// The factor usually stays within `[0, 1]`; values outside that range are
/// allowed and produce overshoot or undershoot in the interpolated color.
pub trait Ease {
    fn ease(&self, progress: f32) -> f32;
}

/// Built-in easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Easing {
    /// Progress passes through unchanged.
    #[default]
    Linear,

    /// Sine ease-in: slow start.
    EaseInSine,

    /// Sine ease-out: slow finish.
    EaseOutSine,

    /// Sine ease-in-out: slow start and finish.
    EaseInOutSine,

    /// Quadratic ease-in: slow start, accelerating toward end.
    EaseInQuad,

    /// Quadratic ease-out: fast start, decelerating toward end.
    EaseOutQuad,

    /// Quadratic ease-in-out: slow start and end, fast middle.
    EaseInOutQuad,
}

impl Easing {
    /// Applies the curve to `progress`.
    pub fn apply(self, progress: f32) -> f32 {
        let n = progress;
        match self {
            Easing::Linear => n,
            Easing::EaseInSine => 1.0 - libm::cosf(n * PI / 2.0),
            Easing::EaseOutSine => libm::sinf(n * PI / 2.0),
            Easing::EaseInOutSine => -(libm::cosf(PI * n) - 1.0) / 2.0,
            Easing::EaseInQuad => n * n,
            Easing::EaseOutQuad => n * (2.0 - n),
            Easing::EaseInOutQuad => {
                if n < 0.5 {
                    2.0 * n * n
                } else {
                    -1.0 + (4.0 - 2.0 * n) * n
                }
            }
        }
    }
}

impl Ease for Easing {
    #[inline]
    fn ease(&self, progress: f32) -> f32 {
        self.apply(progress)
    }
}

impl<F> Ease for F
where
    F: Fn(f32) -> f32,
{
    #[inline]
    fn ease(&self, progress: f32) -> f32 {
        self(progress)
    }
}

//! Easing curves for tween tracks.
//!
//! Curves are evaluated through the `keyframe` crate; names follow the
//! request vocabulary of the embedding page (`easeOutQuad`, `swingTo`, ...).

use keyframe::{ease, functions, EasingFunction};
use serde::{Deserialize, Serialize};

/// Easing function applied to a track's normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    /// Constant speed interpolation.
    Linear,
    EaseInQuad,
    /// Fast start, slow end. The default for UI-triggered moves.
    #[default]
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    /// Overshoots the target slightly before settling on it.
    SwingTo,
}

impl Easing {
    /// Apply the curve to a normalized time value.
    ///
    /// `t` is clamped to `[0, 1]`; the result may leave `[0, 1]` for
    /// overshooting curves such as [`Easing::SwingTo`].
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = f64::from(t).clamp(0.0, 1.0);
        let eased = match self {
            Easing::Linear => ease(functions::Linear, 0.0, 1.0, t),
            Easing::EaseInQuad => ease(functions::EaseInQuad, 0.0, 1.0, t),
            Easing::EaseOutQuad => ease(functions::EaseOutQuad, 0.0, 1.0, t),
            Easing::EaseInOutQuad => ease(functions::EaseInOutQuad, 0.0, 1.0, t),
            Easing::EaseInCubic => ease(functions::EaseInCubic, 0.0, 1.0, t),
            Easing::EaseOutCubic => ease(functions::EaseOutCubic, 0.0, 1.0, t),
            Easing::EaseInOutCubic => ease(functions::EaseInOutCubic, 0.0, 1.0, t),
            Easing::SwingTo => ease(SwingToCurve, 0.0, 1.0, t),
        };
        eased as f32
    }
}

/// Back-overshoot curve: `(t-1)² · ((s+1)(t-1) + s) + 1` with `s = 1.70158`.
struct SwingToCurve;

impl EasingFunction for SwingToCurve {
    fn y(&self, x: f64) -> f64 {
        const S: f64 = 1.701_58;
        let x = x - 1.0;
        x * x * ((S + 1.0) * x + S) + 1.0
    }
}

//! Property tween scheduling.
//!
//! The tween stack animates single scalars on the stage (camera position,
//! model rotation, screen-texture offset) from externally supplied
//! requests. [`timeline::Timeline`] is the coordinator that keeps
//! concurrently requested tracks from fighting over a target.

pub mod easing;
pub mod target;
pub mod timeline;
pub mod track;

pub use easing::Easing;
pub use target::{Axis, TargetObject, TargetProperty, TweenTarget};
pub use timeline::Timeline;
pub use track::{Track, TrackState, TweenCallback};

use serde::{Deserialize, Serialize};

/// One requested property animation.
///
/// Mirrors the request schema of the embedding page: a target triple plus
/// optional `from`/`to` endpoints. An explicit `to` makes the request
/// *forward* (end at the absolute `to`, or at `start + to` when
/// `compound`); an explicit `from` without `to` makes it *non-forward*: a
/// spring back that starts offset by `from` from the target's current value
/// and ends at the value the target had when the request was accepted.
/// Rotation endpoints are given in degrees; durations and delays in
/// milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationRequest {
    #[serde(flatten)]
    pub target: TweenTarget,
    #[serde(default)]
    pub from: Option<f32>,
    #[serde(default)]
    pub to: Option<f32>,
    #[serde(default = "default_duration")]
    pub duration: f32,
    #[serde(default)]
    pub delay: f32,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub compound: bool,
}

fn default_duration() -> f32 {
    1000.0
}

impl AnimationRequest {
    /// A forward request animating `target` to an absolute end value.
    #[must_use]
    pub fn to(target: TweenTarget, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            target,
            from: None,
            to: Some(to),
            duration,
            delay: 0.0,
            easing,
            compound: false,
        }
    }

    /// A spring-back request starting offset by `from` and ending wherever
    /// the target currently is.
    #[must_use]
    pub fn spring_back(target: TweenTarget, from: f32, duration: f32, easing: Easing) -> Self {
        Self {
            target,
            from: Some(from),
            to: None,
            duration,
            delay: 0.0,
            easing,
            compound: false,
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn compound(mut self) -> Self {
        self.compound = true;
        self
    }
}

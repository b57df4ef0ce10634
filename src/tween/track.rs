//! Tween track: one scheduled interpolation of a single scalar.

use crate::tween::easing::Easing;
use crate::tween::target::TweenTarget;

/// Callback fired exactly once when a track completes naturally.
///
/// A superseded (stopped) track never fires its callback.
pub type TweenCallback = Box<dyn FnOnce()>;

/// Lifecycle state of a [`Track`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackState {
    /// Registered but still inside its delay window. The track already
    /// reserves its target slot while pending.
    Pending,
    Running,
    /// Stopped by a superseding request; the value stays frozen where it was.
    Cancelled,
    Completed,
}

/// A live interpolation instance owned by the timeline coordinator.
///
/// The value does not move until the track is ticked. Each tick maps eased,
/// normalized progress into `[start, end]`; the exact end value is emitted
/// once, after which the track reports [`TrackState::Completed`] and stops
/// producing values. A zero-duration track completes on its first tick.
pub struct Track {
    target: TweenTarget,
    start: f32,
    end: f32,
    /// Seconds of active interpolation, after the delay window.
    duration: f32,
    /// Seconds before the value starts moving.
    delay: f32,
    easing: Easing,
    elapsed: f32,
    value: f32,
    state: TrackState,
    on_complete: Option<TweenCallback>,
}

impl Track {
    #[must_use]
    pub fn new(
        target: TweenTarget,
        start: f32,
        end: f32,
        duration: f32,
        delay: f32,
        easing: Easing,
        on_complete: Option<TweenCallback>,
    ) -> Self {
        Self {
            target,
            start,
            end,
            duration: duration.max(0.0),
            delay: delay.max(0.0),
            easing,
            elapsed: 0.0,
            value: start,
            state: TrackState::Pending,
            on_complete,
        }
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> TweenTarget {
        self.target
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> TrackState {
        self.state
    }

    /// Last interpolated value (the start value until the delay elapses).
    #[inline]
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    #[must_use]
    pub fn end_value(&self) -> f32 {
        self.end
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Whether the track still occupies its target slot for conflict checks.
    #[inline]
    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self.state, TrackState::Pending | TrackState::Running)
    }

    #[inline]
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == TrackState::Completed
    }

    /// Advance the track's clock by `dt` seconds.
    ///
    /// Returns the new value when it changed this tick, `None` while the
    /// track is delayed, already completed, or cancelled.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        if !self.is_live() {
            return None;
        }

        self.elapsed += dt;
        if self.elapsed < self.delay {
            return None;
        }
        self.state = TrackState::Running;

        let t = self.elapsed - self.delay;
        if self.duration <= 0.0 || t >= self.duration {
            self.value = self.end;
            self.state = TrackState::Completed;
            if let Some(callback) = self.on_complete.take() {
                callback();
            }
            return Some(self.end);
        }

        let alpha = self.easing.apply(t / self.duration);
        self.value = self.start + (self.end - self.start) * alpha;
        Some(self.value)
    }

    /// Halt the track immediately.
    ///
    /// With `apply_final == false` (the only mode the coordinator uses when
    /// superseding) the value freezes at its last interpolated position;
    /// there is no snap to the original end value and the completion
    /// callback is discarded.
    pub fn stop(&mut self, apply_final: bool) {
        if !self.is_live() {
            return;
        }
        if apply_final {
            self.value = self.end;
        }
        self.state = TrackState::Cancelled;
        self.on_complete = None;
    }
}

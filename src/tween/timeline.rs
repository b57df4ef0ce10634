//! Timeline coordinator.
//!
//! Owns the set of live [`Track`]s and enforces the scheduling discipline:
//! at most one live track per target, "last forward request wins",
//! colliding spring-back requests dropped. This is the substitute for
//! mutual exclusion in the widget's single-threaded frame model: conflict
//! resolution is an explicit, testable policy rather than a race.

use crate::scene::Stage;
use crate::tween::track::{Track, TrackState, TweenCallback};
use crate::tween::AnimationRequest;

/// Coordinates every property tween requested on the widget.
#[derive(Default)]
pub struct Timeline {
    tracks: Vec<Track>,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Register a request, applying the per-target conflict policy.
    ///
    /// Forward requests (explicit end) supersede an in-flight track on the
    /// same target: the old track is stopped without snapping and the new
    /// one starts from the live current value. Non-forward requests
    /// (spring-back toward the pre-animation value) colliding with an
    /// in-flight track are dropped silently; restarting a mid-flight
    /// animation backwards would oscillate it.
    pub fn add(&mut self, request: AnimationRequest, stage: &Stage) {
        self.add_with_callback(request, None, stage);
    }

    /// Same as [`Timeline::add`], with a completion callback that fires only
    /// if the resulting track completes naturally.
    pub fn add_with_callback(
        &mut self,
        request: AnimationRequest,
        on_complete: Option<TweenCallback>,
        stage: &Stage,
    ) {
        let target = request.target;
        let Some(current) = stage.value_of(target) else {
            log::warn!("dropping tween for unresolvable target {target}");
            return;
        };

        // Request rotations arrive in degrees; the stage holds radians.
        let convert = |v: f32| if target.is_angular() { v.to_radians() } else { v };
        let from = request.from.map(convert);
        let to = request.to.map(convert);

        if from.is_none() && to.is_none() {
            log::warn!("dropping tween for {target} with neither `from` nor `to`");
            return;
        }

        let forward = to.is_some();
        let existing = self.tracks.iter().position(|t| t.is_live() && t.target() == target);

        if existing.is_some() && !forward {
            log::debug!("dropping colliding spring-back tween for {target}");
            return;
        }

        // `from` is an offset against the pre-animation value; when
        // superseding, the track instead continues from wherever the
        // stopped track left the value.
        let start = if existing.is_some() {
            current
        } else {
            current + from.unwrap_or(0.0)
        };

        let end = match to {
            Some(to) if request.compound => start + to,
            Some(to) => to,
            // Spring back to the value the target had at acceptance.
            None => current,
        };

        if let Some(index) = existing {
            self.tracks[index].stop(false);
            self.tracks.swap_remove(index);
        }

        self.tracks.push(Track::new(
            target,
            start,
            end,
            request.duration / 1000.0,
            request.delay / 1000.0,
            request.easing,
            on_complete,
        ));
    }

    /// Advance every registered track and write fresh values to the stage.
    ///
    /// Completed tracks remain registered until [`Timeline::drain`] so that
    /// [`Timeline::is_playing`] stays accurate within the same frame.
    pub fn tick(&mut self, dt: f32, stage: &mut Stage) {
        for track in &mut self.tracks {
            if let Some(value) = track.tick(dt) {
                stage.apply(track.target(), value);
            }
        }
    }

    /// Whether any registered track has not yet completed.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.tracks.iter().any(|t| !t.is_completed())
    }

    #[must_use]
    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// Number of live (slot-holding) tracks.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tracks.iter().filter(|t| t.is_live()).count()
    }

    /// Remove finished tracks. Idempotent; calling it on an empty or
    /// all-running coordinator changes nothing.
    pub fn drain(&mut self) {
        self.tracks.retain(|t| !t.is_completed());
    }

    /// Registered tracks, finished ones included until the next drain.
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// The live track currently occupying `target`'s slot, if any.
    #[must_use]
    pub fn live_track(&self, target: crate::tween::TweenTarget) -> Option<&Track> {
        self.tracks.iter().find(|t| t.is_live() && t.target() == target)
    }
}

impl std::fmt::Debug for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let running = self
            .tracks
            .iter()
            .filter(|t| t.state() == TrackState::Running)
            .count();
        f.debug_struct("Timeline")
            .field("tracks", &self.tracks.len())
            .field("running", &running)
            .finish()
    }
}

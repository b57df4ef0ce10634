//! The widget: public surface and the per-frame driver.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::{ClipAction, HingePhase, HingeState, Mixer};
use crate::bootstrap::{ElementHandle, LoadEvent, LoadedDevice, Runtime};
use crate::config::{named_preset, OnLoadAnimation, Settings};
use crate::relevance::Relevance;
use crate::scene::{Camera, DeviceModel, Stage};
use crate::theme::Theme;
use crate::tween::{AnimationRequest, Easing, Timeline, TweenCallback, TweenTarget};
use crate::utils::Timer;

/// Scroll direction across the screenshot. The original page API's
/// `forwards`/`reverse` spellings are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScrollDirection {
    #[default]
    #[serde(alias = "forwards")]
    Down,
    #[serde(alias = "reverse")]
    Up,
}

/// Request to scroll the screenshot across the device screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrollRequest {
    pub direction: ScrollDirection,
    /// Milliseconds.
    pub duration: f32,
    pub easing: Easing,
}

impl Default for ScrollRequest {
    fn default() -> Self {
        Self {
            direction: ScrollDirection::Down,
            duration: 2500.0,
            easing: Easing::EaseOutQuad,
        }
    }
}

/// Request to rotate the device to an absolute yaw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SwivelRequest {
    /// Target yaw in degrees.
    pub degrees: f32,
    /// Milliseconds.
    pub duration: f32,
    pub easing: Easing,
}

impl Default for SwivelRequest {
    fn default() -> Self {
        Self {
            degrees: 30.0,
            duration: 1000.0,
            easing: Easing::EaseOutQuad,
        }
    }
}

/// Interactive 3D device mockup.
///
/// Construction wires settings and collaborators; [`Deviceful::mount`]
/// attaches to the page and kicks off the asset load; the embedder then
/// calls [`Deviceful::frame`] from its scheduled frame callback for the
/// widget's lifetime. All other methods are fire-and-forget requests that
/// the frame loop realizes.
pub struct Deviceful {
    settings: Settings,
    runtime: Runtime,
    stage: Stage,

    timeline: Timeline,
    mixer: Mixer,
    hinge: HingeState,

    relevance: Relevance,
    clock: Timer,
    element: Option<ElementHandle>,

    load_rx: Option<flume::Receiver<LoadEvent>>,
    loading: f32,
    ready: bool,

    // Pre-load request cache: one slot per kind, newest request wins,
    // replayed exactly once at asset-ready time.
    pending_animate: Option<Vec<AnimationRequest>>,
    pending_scroll: Option<ScrollRequest>,
}

impl Deviceful {
    #[must_use]
    pub fn new(settings: Settings, runtime: Runtime) -> Self {
        let preset = *settings.camera_preset();
        let mut camera = Camera::new_perspective(preset.focal_length, 1.0, 0.1, 1000.0);
        camera.transform.position = Vec3::new(
            preset.position.x,
            settings.camera_height.unwrap_or(preset.position.y),
            settings.camera_distance.unwrap_or(preset.position.z),
        );

        let theme = Theme::build(&settings.floor, settings.enable_floor, preset.object_offset);

        Self {
            stage: Stage::new(camera, theme),
            runtime,
            settings,
            timeline: Timeline::new(),
            mixer: Mixer::new(),
            hinge: HingeState::new(),
            relevance: Relevance::new(),
            clock: Timer::new(),
            element: None,
            load_rx: None,
            loading: 0.0,
            ready: false,
            pending_animate: None,
            pending_scroll: None,
        }
    }

    // ========================================================================
    // Mounting & page events
    // ========================================================================

    /// Mount into the parent configured in settings.
    pub fn mount(&mut self) -> bool {
        let selector = self.settings.parent.clone();
        self.mount_at(&selector)
    }

    /// Mount into the element named by `selector` and start loading the
    /// device asset.
    ///
    /// Returns `false` (after a logged warning) when the selector does not
    /// resolve; the caller may retry with a valid target. Non-fatal.
    pub fn mount_at(&mut self, selector: &str) -> bool {
        let Some(element) = self.runtime.host.resolve(selector) else {
            log::warn!("mount target `{selector}` not found; widget not mounted");
            return false;
        };
        self.element = Some(element);

        let (width, height) = self.measure(element);
        self.runtime.renderer.resize(width, height);
        if height > 0.0 {
            self.stage.camera.set_aspect(width / height);
        }
        self.update_relevance();

        let path = self.settings.asset_path();
        self.load_rx = Some(self.runtime.loader.begin_load(&path, self.settings.device));
        true
    }

    /// Re-measure after a window resize. Bound by the embedder to its
    /// resize event.
    pub fn resize_window(&mut self) {
        let Some(element) = self.element else { return };
        let (width, height) = self.measure(element);
        self.runtime.renderer.resize(width, height);
        if height > 0.0 {
            self.stage.camera.set_aspect(width / height);
        }
        self.update_relevance();
    }

    /// Recompute visibility after the page scrolled. Bound by the embedder
    /// to its scroll event; relevance is deliberately not re-evaluated per
    /// frame.
    pub fn notify_scroll(&mut self) {
        self.update_relevance();
    }

    // ========================================================================
    // Animation requests
    // ========================================================================

    /// Request the lid open. Realized by reconciliation in the frame loop.
    pub fn open(&mut self) {
        self.hinge.open();
    }

    /// Request the lid closed.
    pub fn close(&mut self) {
        self.hinge.close();
    }

    /// Request the opposite lid state.
    pub fn toggle(&mut self) {
        self.hinge.toggle();
    }

    /// Rotate the device to an absolute yaw.
    pub fn swivel(&mut self, request: SwivelRequest) {
        self.animate(vec![AnimationRequest::to(
            TweenTarget::model_yaw(),
            request.degrees,
            request.duration,
            request.easing,
        )]);
    }

    /// Scroll the screenshot across the device screen.
    ///
    /// Issued before the asset is ready, the request is cached (newest
    /// wins) and replayed once after load.
    pub fn scroll(&mut self, request: ScrollRequest) {
        if self.ready {
            self.apply_scroll(request);
        } else {
            self.pending_scroll = Some(request);
        }
    }

    /// Play a batch of property animations.
    ///
    /// Issued before the asset is ready, the batch is cached (newest wins)
    /// and replayed once after load.
    pub fn animate(&mut self, requests: Vec<AnimationRequest>) {
        if self.ready {
            for request in requests {
                self.timeline.add(request, &self.stage);
            }
        } else {
            self.pending_animate = Some(requests);
        }
    }

    /// Like [`Deviceful::animate`] for a single request, with a completion
    /// callback that fires only if the resulting track completes naturally
    /// (a superseded track's callback never fires). Pre-load requests are
    /// cached without their callback.
    pub fn animate_with_callback(
        &mut self,
        request: AnimationRequest,
        on_complete: TweenCallback,
    ) {
        if self.ready {
            self.timeline
                .add_with_callback(request, Some(on_complete), &self.stage);
        } else {
            log::debug!("asset not ready; caching request and dropping its callback");
            self.pending_animate = Some(vec![request]);
        }
    }

    // ========================================================================
    // State queries
    // ========================================================================

    /// Asset load progress in percent.
    #[must_use]
    pub fn loading_percentage(&self) -> f32 {
        self.loading
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.hinge.is_open()
    }

    #[must_use]
    pub fn hinge_phase(&self) -> HingePhase {
        self.hinge.phase(self.mixer.action())
    }

    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    #[must_use]
    pub fn hinge(&self) -> &HingeState {
        &self.hinge
    }

    #[must_use]
    pub fn mixer(&self) -> &Mixer {
        &self.mixer
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ========================================================================
    // Frame loop
    // ========================================================================

    /// Advance one frame using the widget's own clock.
    pub fn frame(&mut self) {
        self.clock.tick();
        let dt = self.clock.dt_seconds();
        self.step(dt);
    }

    /// Advance one frame by an explicit delta in seconds.
    ///
    /// The step order is load-bearing: the model transform is recomputed
    /// explicitly before rendering (automatic propagation is off), while
    /// clip and tween advancement happen after the render so their effect
    /// lands in the next frame, double-buffer style.
    pub fn step(&mut self, dt: f32) {
        // 0. Consume the async load boundary.
        self.poll_loader();

        // 1. Skip everything while visually irrelevant.
        if !self.relevance.is_relevant() {
            return;
        }

        // 2. Explicit world transform update.
        if let Some(model) = self.stage.model_mut() {
            model.update_world_transform();
        }
        self.stage.camera.update_view_matrix();

        // 3. Render.
        self.runtime.renderer.render(&self.stage);

        // 4. Advance the skinned clip; completion flips the hinge state.
        if self.mixer.update(dt) {
            self.hinge.on_clip_finished();
        }

        // 5. Tick the coordinator; reclaim it once idle.
        self.timeline.tick(dt, &mut self.stage);
        if self.timeline.has_tracks() && !self.timeline.is_playing() {
            self.timeline.drain();
        }

        // 6. Open/close reconciliation.
        if self.ready {
            self.hinge
                .reconcile(self.mixer.action_mut(), self.settings.toggle_speed);
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn measure(&self, element: ElementHandle) -> (f32, f32) {
        let rect = self.runtime.host.element_rect(element);
        let height = if self.settings.auto_height {
            rect.width * 0.6
        } else {
            rect.height
        };
        (rect.width, height)
    }

    fn update_relevance(&mut self) {
        let Some(element) = self.element else { return };
        let rect = self.runtime.host.element_rect(element);
        let viewport = self.runtime.host.viewport_rect();
        self.relevance.update(rect, viewport);
    }

    fn poll_loader(&mut self) {
        let Some(rx) = self.load_rx.take() else { return };

        let mut ready: Option<Box<LoadedDevice>> = None;
        let mut closed = false;
        loop {
            match rx.try_recv() {
                Ok(LoadEvent::Progress(percent)) => {
                    self.loading = percent.clamp(0.0, 100.0);
                }
                Ok(LoadEvent::Ready(loaded)) => {
                    ready = Some(loaded);
                    break;
                }
                Ok(LoadEvent::Failed(err)) => {
                    log::error!("device asset load failed: {err}");
                    closed = true;
                    break;
                }
                Err(flume::TryRecvError::Empty) => break,
                Err(flume::TryRecvError::Disconnected) => {
                    log::error!("device asset loader went away before completing");
                    closed = true;
                    break;
                }
            }
        }

        match ready {
            Some(loaded) => self.install_device(*loaded),
            None if !closed => self.load_rx = Some(rx),
            None => {}
        }
    }

    /// Install the loaded device and run the deferred start-up behaviors:
    /// on-load settings first, then the pending request cache, exactly
    /// once, before this frame's reconciliation pass.
    fn install_device(&mut self, loaded: LoadedDevice) {
        self.loading = 100.0;

        let preset = *self.settings.camera_preset();
        let mut model = loaded.model;
        model.transform.scale = Vec3::ONE;
        model.transform.position.y = preset.object_offset;
        model.transform.position.x = self.settings.initial_device_position;
        model.transform.rotation.y = self.settings.initial_device_rotation.to_radians();

        let materials = self.runtime.materials.materials(self.settings.device);
        model.apply_materials(&materials);

        if let Some(screen) = model.screen_mut() {
            if screen.source.is_empty() {
                screen.source = self.settings.screenshot.clone();
            }
            screen.fit_screenshot(self.settings.screenshot_height);
        }

        match loaded
            .clips
            .iter()
            .find(|clip| clip.name.eq_ignore_ascii_case("open"))
        {
            Some(clip) => self.mixer.set_action(ClipAction::new(clip.clone())),
            None => log::warn!("asset has no open/close clip; toggling will not be visible"),
        }

        self.stage.set_model(model);
        self.ready = true;

        if self.settings.open_on_load {
            self.hinge.open();
        }
        if let Some(on_load) = self.settings.on_load_animation.clone() {
            match on_load {
                OnLoadAnimation::Preset(name) => match named_preset(&name) {
                    Some(moves) => self.animate(moves),
                    None => log::warn!("unknown on-load animation preset `{name}`"),
                },
                OnLoadAnimation::Moves(moves) => self.animate(moves),
            }
        }
        if self.settings.scroll_on_load {
            self.apply_scroll(ScrollRequest::default());
        }

        if let Some(requests) = self.pending_animate.take() {
            for request in requests {
                self.timeline.add(request, &self.stage);
            }
        }
        if let Some(request) = self.pending_scroll.take() {
            self.apply_scroll(request);
        }
    }

    fn apply_scroll(&mut self, request: ScrollRequest) {
        let Some(screen) = self.stage.model().and_then(DeviceModel::screen) else {
            log::debug!("no screen texture on model; scroll ignored");
            return;
        };
        let to = match request.direction {
            ScrollDirection::Down => screen.max_scroll_offset(),
            ScrollDirection::Up => 0.0,
        };
        self.timeline.add(
            AnimationRequest::to(
                TweenTarget::screen_scroll(),
                to,
                request.duration,
                request.easing,
            ),
            &self.stage,
        );
    }
}

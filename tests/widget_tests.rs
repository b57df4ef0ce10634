//! Widget Integration Tests
//!
//! Drives `Deviceful` end-to-end against fake collaborators:
//! - mount / resize / relevance gating
//! - pre-load request caching and exactly-once replay
//! - scroll aspect math against the screenshot height
//! - frame step ordering (render sees last frame's tween values)
//! - open/close coalescing through the real frame loop

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use deviceful::{
    AnimationRequest, Deviceful, DeviceKind, DeviceLoader, DeviceMesh, DeviceModel,
    DevicefulError, Easing, ElementHandle, EmbedHost, HingeClip, HingePhase, LoadEvent,
    LoadedDevice, MaterialSpec, OnLoadAnimation, Rect, RenderBackend, Runtime, ScreenTexture,
    ScrollRequest, Settings, Stage, StockMaterials, SwivelRequest, TweenTarget,
};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Fake collaborators
// ============================================================================

const PARENT: &str = "#stage";

struct TestHost {
    element: Rc<Cell<Rect>>,
    viewport: Rc<Cell<Rect>>,
}

impl EmbedHost for TestHost {
    fn resolve(&self, selector: &str) -> Option<ElementHandle> {
        (selector == PARENT).then_some(ElementHandle(1))
    }

    fn element_rect(&self, _element: ElementHandle) -> Rect {
        self.element.get()
    }

    fn viewport_rect(&self) -> Rect {
        self.viewport.get()
    }
}

#[derive(Debug, Clone, Copy)]
struct RenderSnapshot {
    model_x: f32,
    screen_offset_y: f32,
}

struct RecordingRenderer {
    frames: Rc<RefCell<Vec<RenderSnapshot>>>,
    size: Rc<Cell<(f32, f32)>>,
}

impl RenderBackend for RecordingRenderer {
    fn resize(&mut self, width: f32, height: f32) {
        self.size.set((width, height));
    }

    fn render(&mut self, stage: &Stage) {
        let model_x = stage
            .model()
            .map_or(0.0, |m| m.transform.world_matrix().translation.x);
        let screen_offset_y = stage
            .model()
            .and_then(DeviceModel::screen)
            .map_or(0.0, |s| s.offset.y);
        self.frames.borrow_mut().push(RenderSnapshot {
            model_x,
            screen_offset_y,
        });
    }
}

struct ChannelLoader {
    sender: Rc<RefCell<Option<flume::Sender<LoadEvent>>>>,
    requested: Rc<RefCell<Option<String>>>,
}

impl DeviceLoader for ChannelLoader {
    fn begin_load(&mut self, path: &str, _device: DeviceKind) -> flume::Receiver<LoadEvent> {
        let (tx, rx) = flume::unbounded();
        *self.sender.borrow_mut() = Some(tx);
        *self.requested.borrow_mut() = Some(path.to_string());
        rx
    }
}

struct Fixture {
    widget: Deviceful,
    frames: Rc<RefCell<Vec<RenderSnapshot>>>,
    size: Rc<Cell<(f32, f32)>>,
    sender: Rc<RefCell<Option<flume::Sender<LoadEvent>>>>,
    requested: Rc<RefCell<Option<String>>>,
    element: Rc<Cell<Rect>>,
    viewport: Rc<Cell<Rect>>,
}

fn fixture(mut settings: Settings) -> Fixture {
    let _ = env_logger::builder().is_test(true).try_init();

    settings.parent = PARENT.to_string();

    let frames = Rc::new(RefCell::new(Vec::new()));
    let size = Rc::new(Cell::new((0.0, 0.0)));
    let sender = Rc::new(RefCell::new(None));
    let requested = Rc::new(RefCell::new(None));
    let element = Rc::new(Cell::new(Rect::new(0.0, 0.0, 800.0, 400.0)));
    let viewport = Rc::new(Cell::new(Rect::new(0.0, 0.0, 1024.0, 768.0)));

    let runtime = Runtime::new(
        Box::new(RecordingRenderer {
            frames: Rc::clone(&frames),
            size: Rc::clone(&size),
        }),
        Box::new(ChannelLoader {
            sender: Rc::clone(&sender),
            requested: Rc::clone(&requested),
        }),
        Box::new(StockMaterials),
        Box::new(TestHost {
            element: Rc::clone(&element),
            viewport: Rc::clone(&viewport),
        }),
    );

    Fixture {
        widget: Deviceful::new(settings, runtime),
        frames,
        size,
        sender,
        requested,
        element,
        viewport,
    }
}

fn loaded_device(device: DeviceKind, with_clip: bool) -> LoadedDevice {
    let mut model = DeviceModel::new(device);
    model.meshes.push(DeviceMesh::new("body"));
    model.meshes.push(DeviceMesh::new("screen"));
    model.screen = Some(ScreenTexture::new("", device.screen_pixel_height()));

    let clips = if with_clip {
        vec![HingeClip::new("Open", 1.0)]
    } else {
        Vec::new()
    };
    LoadedDevice { model, clips }
}

impl Fixture {
    fn send(&self, event: LoadEvent) {
        self.sender
            .borrow()
            .as_ref()
            .expect("load not started")
            .send(event)
            .expect("widget dropped the load channel");
    }

    fn deliver(&self, device: DeviceKind, with_clip: bool) {
        self.send(LoadEvent::Ready(Box::new(loaded_device(device, with_clip))));
    }

    fn frame_count(&self) -> usize {
        self.frames.borrow().len()
    }
}

// ============================================================================
// Mounting
// ============================================================================

#[test]
fn mount_fails_without_parent_element() {
    let mut fix = fixture(Settings {
        parent: "#not-there".to_string(),
        ..Settings::default()
    });
    // fixture() pins `parent`; use the explicit-selector form instead.
    assert!(!fix.widget.mount_at("#not-there"));
    assert!(fix.requested.borrow().is_none(), "no load without a mount");

    // The caller may retry with a valid target.
    assert!(fix.widget.mount_at(PARENT));
}

#[test]
fn mount_starts_asset_load_and_sizes_backend() {
    let mut fix = fixture(Settings::default());
    assert!(fix.widget.mount());
    assert_eq!(
        fix.requested.borrow().as_deref(),
        Some("./public/laptop.glb")
    );
    assert_eq!(fix.size.get(), (800.0, 400.0));
    assert!(approx(fix.widget.stage().camera.aspect, 2.0));
}

#[test]
fn auto_height_derives_height_from_width() {
    let mut fix = fixture(Settings {
        auto_height: true,
        ..Settings::default()
    });
    fix.widget.mount();
    assert_eq!(fix.size.get(), (800.0, 480.0));
}

#[test]
fn resize_window_updates_camera_aspect() {
    let mut fix = fixture(Settings::default());
    fix.widget.mount();

    fix.element.set(Rect::new(0.0, 0.0, 900.0, 300.0));
    fix.widget.resize_window();
    assert_eq!(fix.size.get(), (900.0, 300.0));
    assert!(approx(fix.widget.stage().camera.aspect, 3.0));
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn loading_percentage_tracks_progress() {
    let mut fix = fixture(Settings::default());
    fix.widget.mount();

    fix.send(LoadEvent::Progress(42.0));
    fix.widget.step(0.016);
    assert!(approx(fix.widget.loading_percentage(), 42.0));
    assert!(!fix.widget.is_ready());

    fix.deliver(DeviceKind::Laptop, true);
    fix.widget.step(0.016);
    assert!(fix.widget.is_ready());
    assert!(approx(fix.widget.loading_percentage(), 100.0));
}

#[test]
fn load_failure_degrades_silently() {
    let mut fix = fixture(Settings::default());
    fix.widget.mount();

    fix.send(LoadEvent::Failed(DevicefulError::AssetNotFound(
        "./public/laptop.glb".to_string(),
    )));
    let before = fix.frame_count();
    fix.widget.step(0.016);
    fix.widget.step(0.016);

    assert!(!fix.widget.is_ready());
    assert!(fix.frame_count() > before, "the empty stage still renders");
}

#[test]
fn stock_materials_are_applied_on_install() {
    let mut fix = fixture(Settings {
        screenshot: "shot.png".to_string(),
        ..Settings::default()
    });
    fix.widget.mount();
    fix.deliver(DeviceKind::Laptop, true);
    fix.widget.step(0.0);

    let model = fix.widget.stage().model().expect("model installed");
    let body = model.meshes.iter().find(|m| m.name == "body").unwrap();
    assert!(matches!(body.material, Some(MaterialSpec::Physical { .. })));
    assert!(body.cast_shadow && body.receive_shadow);
    assert!(!body.frustum_culled);

    let screen = model.meshes.iter().find(|m| m.name == "screen").unwrap();
    assert!(screen.material.is_none(), "screen keeps its texture material");
    assert_eq!(model.screen().unwrap().source, "shot.png");
}

// ============================================================================
// Pending request cache
// ============================================================================

#[test]
fn preload_scroll_replays_once_with_original_parameters() {
    let mut fix = fixture(Settings {
        device: DeviceKind::Phone,
        screenshot_height: 1909.0,
        ..Settings::default()
    });
    fix.widget.mount();

    fix.widget.scroll(ScrollRequest {
        duration: 500.0,
        ..ScrollRequest::default()
    });
    assert!(!fix.widget.timeline().has_tracks(), "cached, not scheduled");

    fix.deliver(DeviceKind::Phone, true);
    fix.widget.step(0.0);

    // aspect = 790 / 1909; the scroll runs from the current offset to
    // 1 - aspect, over the requested 500ms.
    let screen = fix.widget.stage().model().unwrap().screen().unwrap();
    assert!(approx(screen.aspect(), 790.0 / 1909.0));

    assert_eq!(fix.widget.timeline().active_count(), 1);
    let track = fix
        .widget
        .timeline()
        .live_track(TweenTarget::screen_scroll())
        .expect("one scroll track");
    assert!(approx(track.duration(), 0.5));
    assert!((track.end_value() - 0.5862).abs() < 1e-3);

    // Replay happened exactly once: further frames only advance the track.
    fix.widget.step(0.1);
    let after_one = fix.widget.stage().value_of(TweenTarget::screen_scroll()).unwrap();
    fix.widget.step(0.1);
    let after_two = fix.widget.stage().value_of(TweenTarget::screen_scroll()).unwrap();
    assert_eq!(fix.widget.timeline().active_count(), 1);
    assert!(after_two > after_one, "offset keeps advancing, no restart");
}

#[test]
fn newest_preload_animate_batch_wins() {
    let mut fix = fixture(Settings::default());
    fix.widget.mount();

    let camera_x = TweenTarget::new(
        deviceful::tween::TargetObject::Camera,
        deviceful::tween::TargetProperty::Position,
        deviceful::tween::Axis::X,
    );
    fix.widget.animate(vec![AnimationRequest::to(
        camera_x,
        10.0,
        1000.0,
        Easing::Linear,
    )]);
    fix.widget.animate(vec![AnimationRequest::to(
        camera_x,
        20.0,
        1000.0,
        Easing::Linear,
    )]);

    fix.deliver(DeviceKind::Laptop, true);
    fix.widget.step(0.0);

    assert_eq!(fix.widget.timeline().active_count(), 1);
    let track = fix.widget.timeline().live_track(camera_x).unwrap();
    assert!(approx(track.end_value(), 20.0), "only the newest batch runs");
}

#[test]
fn preload_swivel_is_cached_as_an_animate_batch() {
    let mut fix = fixture(Settings::default());
    fix.widget.mount();

    fix.widget.swivel(SwivelRequest {
        degrees: 30.0,
        ..SwivelRequest::default()
    });
    fix.deliver(DeviceKind::Laptop, true);
    fix.widget.step(0.0);

    let track = fix
        .widget
        .timeline()
        .live_track(TweenTarget::model_yaw())
        .expect("swivel replayed after load");
    assert!(approx(track.end_value(), 30f32.to_radians()));
}

// ============================================================================
// Frame ordering
// ============================================================================

#[test]
fn render_sees_previous_frames_tween_values() {
    let mut fix = fixture(Settings::default());
    fix.widget.mount();
    fix.deliver(DeviceKind::Laptop, true);
    fix.widget.step(0.0);

    let model_x = TweenTarget::new(
        deviceful::tween::TargetObject::Model,
        deviceful::tween::TargetProperty::Position,
        deviceful::tween::Axis::X,
    );
    fix.widget.animate(vec![AnimationRequest::to(
        model_x,
        5.0,
        1000.0,
        Easing::Linear,
    )]);

    fix.widget.step(0.25);
    fix.widget.step(0.25);

    let frames = fix.frames.borrow();
    let n = frames.len();
    // The render in a frame happens before that frame's tween tick: the
    // first post-request render still shows 0, the next shows 1.25.
    assert!(approx(frames[n - 2].model_x, 0.0));
    assert!(approx(frames[n - 1].model_x, 1.25));
    drop(frames);

    assert!(approx(fix.widget.stage().value_of(model_x).unwrap(), 2.5));
}

// ============================================================================
// Relevance gating
// ============================================================================

#[test]
fn offscreen_widget_skips_frames_until_notified_back() {
    let mut fix = fixture(Settings::default());
    fix.widget.mount();
    fix.deliver(DeviceKind::Laptop, true);
    fix.widget.step(0.016);
    let visible = fix.frame_count();
    assert!(visible > 0);

    // Scrolled far out of view (beyond the margin): frames stop.
    fix.element.set(Rect::new(0.0, 10_000.0, 800.0, 400.0));
    fix.widget.notify_scroll();
    fix.widget.step(0.016);
    fix.widget.step(0.016);
    assert_eq!(fix.frame_count(), visible);

    // Relevance is cached: moving back without a notification changes
    // nothing until the scroll event arrives.
    fix.element.set(Rect::new(0.0, 0.0, 800.0, 400.0));
    fix.widget.step(0.016);
    assert_eq!(fix.frame_count(), visible);

    fix.widget.notify_scroll();
    fix.widget.step(0.016);
    assert_eq!(fix.frame_count(), visible + 1);

    // Scrolling the viewport down to a far-away element works too.
    fix.element.set(Rect::new(0.0, 10_000.0, 800.0, 400.0));
    fix.viewport.set(Rect::new(0.0, 9_800.0, 1024.0, 768.0));
    fix.widget.notify_scroll();
    fix.widget.step(0.016);
    assert_eq!(fix.frame_count(), visible + 2);
}

// ============================================================================
// Open/close through the frame loop
// ============================================================================

#[test]
fn open_then_close_coalesces_to_final_state() {
    let mut fix = fixture(Settings::default());
    fix.widget.mount();
    fix.deliver(DeviceKind::Laptop, true);
    fix.widget.step(0.0);

    fix.widget.open();
    fix.widget.step(0.1);
    assert_eq!(fix.widget.hinge_phase(), HingePhase::Opening);

    // Change of heart mid-open.
    fix.widget.close();

    let mut was_open = false;
    for _ in 0..20 {
        fix.widget.step(0.25);
        was_open |= fix.widget.is_open();
    }

    assert!(was_open, "the first play still completed the open");
    assert!(!fix.widget.is_open(), "last request decides the outcome");
    assert_eq!(fix.widget.hinge_phase(), HingePhase::Closed);
}

#[test]
fn toggle_without_clip_flips_flags_only() {
    let mut fix = fixture(Settings::default());
    fix.widget.mount();
    fix.deliver(DeviceKind::Laptop, false);
    fix.widget.step(0.0);

    fix.widget.open();
    fix.widget.step(0.016);
    assert!(fix.widget.is_open());
    assert!(!fix.widget.mixer().has_action());
}

// ============================================================================
// On-load behaviors
// ============================================================================

#[test]
fn unknown_on_load_preset_resolves_to_no_animation() {
    let mut fix = fixture(Settings {
        on_load_animation: Some(OnLoadAnimation::Preset("warpSpeed".to_string())),
        ..Settings::default()
    });
    fix.widget.mount();
    fix.deliver(DeviceKind::Laptop, true);
    fix.widget.step(0.016);

    assert!(!fix.widget.timeline().has_tracks());
}

#[test]
fn drive_in_preset_schedules_all_four_moves() {
    let mut fix = fixture(Settings {
        on_load_animation: Some(OnLoadAnimation::Preset("driveIn".to_string())),
        ..Settings::default()
    });
    fix.widget.mount();
    fix.deliver(DeviceKind::Laptop, true);
    fix.widget.step(0.0);

    assert_eq!(fix.widget.timeline().active_count(), 4);
}

#[test]
fn open_and_scroll_on_load() {
    let mut fix = fixture(Settings {
        open_on_load: true,
        scroll_on_load: true,
        ..Settings::default()
    });
    fix.widget.mount();
    fix.deliver(DeviceKind::Laptop, true);
    fix.widget.step(0.1);

    assert!(fix.widget.hinge().should_be_open());
    assert!(fix
        .widget
        .timeline()
        .live_track(TweenTarget::screen_scroll())
        .is_some());

    for _ in 0..20 {
        fix.widget.step(0.25);
    }
    assert!(fix.widget.is_open());
}

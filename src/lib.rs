//! Deviceful: an embeddable, animated 3D device mockup.
//!
//! The widget opens and closes a hinged device model, swivels it, scrolls a
//! screenshot across its screen, and plays composed camera/model move
//! sequences, all driven from a single per-frame callback. The heart of the
//! crate is the tween [`Timeline`] coordinator: many independently
//! requested property animations coexist under a one-live-track-per-target
//! discipline, alongside the stateful open/close clip, including requests
//! issued before the device asset has finished loading.
//!
//! Rendering, asset decoding, and page wiring are collaborator traits (see
//! [`bootstrap`]); the widget owns scheduling, conflict resolution, and
//! frame ordering.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod relevance;
pub mod scene;
pub mod theme;
pub mod tween;
pub mod utils;
pub mod widget;

pub use animation::{ClipAction, HingeClip, HingePhase, HingeState, Mixer};
pub use bootstrap::{
    DeviceLoader, ElementHandle, EmbedHost, LoadEvent, LoadedDevice, MaterialResolver, Rect,
    RenderBackend, Runtime, StockMaterials,
};
pub use config::{named_preset, CameraStyle, DeviceKind, OnLoadAnimation, Settings};
pub use errors::{DevicefulError, Result};
pub use relevance::Relevance;
pub use scene::{Camera, DeviceMesh, DeviceModel, MaterialSet, MaterialSpec, ScreenTexture, Stage};
pub use theme::Theme;
pub use tween::{AnimationRequest, Easing, Timeline, Track, TrackState, TweenTarget};
pub use utils::Timer;
pub use widget::{Deviceful, ScrollDirection, ScrollRequest, SwivelRequest};

//! External collaborator seams.
//!
//! Scene bootstrap (GPU renderer construction, asset fetching/decoding,
//! material libraries, DOM wiring) is out of the widget's scope. The
//! traits here are the seams those collaborators plug into, and
//! [`Runtime`] is the explicitly constructed, caller-owned context that
//! replaces module-scoped singletons: two widget instances never share
//! hidden state.

use crate::animation::HingeClip;
use crate::config::DeviceKind;
use crate::errors::DevicefulError;
use crate::scene::{DeviceModel, MaterialSet, MaterialSpec, Stage};

/// Axis-aligned rectangle in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Opaque handle to a resolved page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementHandle(pub u32);

/// The page the widget is embedded in.
pub trait EmbedHost {
    /// Resolve a selector to an element, if it exists.
    fn resolve(&self, selector: &str) -> Option<ElementHandle>;
    fn element_rect(&self, element: ElementHandle) -> Rect;
    fn viewport_rect(&self) -> Rect;
}

/// Draws the stage. The widget drives *when* to draw and guarantees the
/// model's world transform is current before each call.
pub trait RenderBackend {
    fn resize(&mut self, width: f32, height: f32);
    fn render(&mut self, stage: &Stage);
}

/// Everything the loader hands back for one device asset.
#[derive(Debug, Clone)]
pub struct LoadedDevice {
    pub model: DeviceModel,
    /// Authored clips on the asset; the widget looks for the open/close
    /// clip by name.
    pub clips: Vec<HingeClip>,
}

/// Events on the asynchronous load channel, in order: any number of
/// `Progress` updates, then one terminal `Ready` or `Failed`.
#[derive(Debug)]
pub enum LoadEvent {
    /// Load progress in percent, `0.0..=100.0`.
    Progress(f32),
    Ready(Box<LoadedDevice>),
    Failed(DevicefulError),
}

/// Fetches and decodes device assets off the frame loop.
///
/// The returned channel is the entire async boundary: the widget polls it
/// non-blockingly once per frame and never registers callbacks.
pub trait DeviceLoader {
    fn begin_load(&mut self, path: &str, device: DeviceKind) -> flume::Receiver<LoadEvent>;
}

/// Resolves the material table for a device.
pub trait MaterialResolver {
    fn materials(&self, device: DeviceKind) -> MaterialSet;
}

/// Caller-owned collaborator bundle handed to the widget at construction.
pub struct Runtime {
    pub renderer: Box<dyn RenderBackend>,
    pub loader: Box<dyn DeviceLoader>,
    pub materials: Box<dyn MaterialResolver>,
    pub host: Box<dyn EmbedHost>,
}

impl Runtime {
    #[must_use]
    pub fn new(
        renderer: Box<dyn RenderBackend>,
        loader: Box<dyn DeviceLoader>,
        materials: Box<dyn MaterialResolver>,
        host: Box<dyn EmbedHost>,
    ) -> Self {
        Self {
            renderer,
            loader,
            materials,
            host,
        }
    }
}

/// Built-in studio material table.
///
/// The stock looks of the shipped device assets; embedders with bespoke
/// assets implement [`MaterialResolver`] themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct StockMaterials;

impl StockMaterials {
    fn space_gray() -> MaterialSpec {
        MaterialSpec::Physical {
            color: 0x858a8b,
            metalness: 1.0,
            roughness: 0.5,
            reflectivity: 2.0,
            opacity: 1.0,
            transparent: false,
            env_map_intensity: 3.0,
        }
    }

    fn glass() -> MaterialSpec {
        MaterialSpec::Physical {
            color: 0xffffff,
            metalness: 1.0,
            roughness: 0.0,
            reflectivity: 2.0,
            opacity: 0.15,
            transparent: true,
            env_map_intensity: 2.0,
        }
    }

    fn black_gloss() -> MaterialSpec {
        MaterialSpec::Phong {
            color: 0x111111,
            shininess: 100.0,
        }
    }
}

impl MaterialResolver for StockMaterials {
    fn materials(&self, device: DeviceKind) -> MaterialSet {
        let mut set = MaterialSet::new();
        set.insert("body", Self::space_gray());
        set.insert("glass", Self::glass());
        set.insert("camera", Self::black_gloss());
        set.insert("screen_frame", Self::black_gloss());
        if device == DeviceKind::Laptop {
            set.insert("lid", Self::space_gray());
            set.insert("hinge", Self::space_gray());
            set.insert(
                "lip_strip",
                MaterialSpec::Phong {
                    color: 0x111111,
                    shininess: 0.0,
                },
            );
            set.insert(
                "keyboard",
                MaterialSpec::Phong {
                    color: 0x181c20,
                    shininess: 30.0,
                },
            );
        }
        set
    }
}

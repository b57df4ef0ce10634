//! Widget settings and the named on-load animation presets.
//!
//! `Settings` mirrors the embedding page's configuration object, camelCase
//! field names included, so a page-side JSON blob deserializes directly.
//! Everything is defaulted; an empty `{}` is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::tween::{
    AnimationRequest, Axis, Easing, TargetObject, TargetProperty, TweenTarget,
};

/// Which device asset to load and animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceKind {
    #[default]
    Laptop,
    Phone,
}

impl DeviceKind {
    /// Asset file stem under the configured base path.
    #[must_use]
    pub fn asset_name(self) -> &'static str {
        match self {
            DeviceKind::Laptop => "laptop",
            DeviceKind::Phone => "phone",
        }
    }

    /// Native pixel height of the device's screen area in the authored
    /// screen texture layout.
    #[must_use]
    pub fn screen_pixel_height(self) -> f32 {
        match self {
            DeviceKind::Laptop => 900.0,
            DeviceKind::Phone => 790.0,
        }
    }
}

/// Camera preset selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CameraStyle {
    /// Head-on, long-lens look.
    Flat,
    #[default]
    Standard,
}

/// A point in the page-side `{x, y, z}` shape.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position3 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<Position3> for glam::Vec3 {
    fn from(p: Position3) -> Self {
        glam::Vec3::new(p.x, p.y, p.z)
    }
}

/// One camera preset: where the camera sits, its focal length (vertical
/// field of view in degrees), and how far the device is pushed down to
/// center it in frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CameraPreset {
    pub position: Position3,
    pub focal_length: f32,
    pub object_offset: f32,
}

impl Default for CameraPreset {
    fn default() -> Self {
        CameraPresets::default().standard
    }
}

/// The two built-in presets, overridable from settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPresets {
    pub flat: CameraPreset,
    pub standard: CameraPreset,
}

impl Default for CameraPresets {
    fn default() -> Self {
        Self {
            flat: CameraPreset {
                position: Position3::new(0.0, -2.0, 25.0),
                focal_length: 10.0,
                object_offset: -3.75,
            },
            standard: CameraPreset {
                position: Position3::new(0.0, 1.6, 11.0),
                focal_length: 25.0,
                object_offset: 0.0,
            },
        }
    }
}

/// Floor styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FloorSettings {
    pub color: String,
    pub depth: f32,
    pub shadow_only: bool,
    pub shininess: f32,
    pub shadow_opacity: f32,
}

impl Default for FloorSettings {
    fn default() -> Self {
        Self {
            color: "#CBD5E0".to_string(),
            depth: 20.0,
            shadow_only: false,
            shininess: 0.0,
            shadow_opacity: 0.1,
        }
    }
}

/// Animation to run once the asset is ready: either the name of a built-in
/// preset or an explicit request list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OnLoadAnimation {
    Preset(String),
    Moves(Vec<AnimationRequest>),
}

/// Widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Selector of the element the widget mounts into.
    pub parent: String,
    pub device: DeviceKind,
    pub style: CameraStyle,
    /// Initial model yaw in degrees.
    pub initial_device_rotation: f32,
    /// Initial model X offset.
    pub initial_device_position: f32,
    pub enable_floor: bool,
    /// Overrides the preset camera Z when set.
    pub camera_distance: Option<f32>,
    /// Overrides the preset camera Y when set.
    pub camera_height: Option<f32>,
    pub on_load_animation: Option<OnLoadAnimation>,
    /// Timescale multiplier for the open/close clip.
    pub toggle_speed: f32,
    pub open_on_load: bool,
    pub scroll_on_load: bool,
    /// Derive the widget height from its width instead of the parent's
    /// measured height.
    pub auto_height: bool,
    /// Path of the screenshot shown on the device screen.
    pub screenshot: String,
    /// Pixel height of the screenshot image.
    pub screenshot_height: f32,
    /// Base path the device asset is fetched from.
    pub path: String,
    pub camera: CameraPresets,
    pub floor: FloorSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            parent: "#deviceful".to_string(),
            device: DeviceKind::default(),
            style: CameraStyle::default(),
            initial_device_rotation: 0.0,
            initial_device_position: 0.0,
            enable_floor: false,
            camera_distance: None,
            camera_height: None,
            on_load_animation: None,
            toggle_speed: 1.0,
            open_on_load: false,
            scroll_on_load: false,
            auto_height: false,
            screenshot: String::new(),
            screenshot_height: 900.0,
            path: "./public".to_string(),
            camera: CameraPresets::default(),
            floor: FloorSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from the embedding page's JSON configuration blob.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The camera preset selected by `style`.
    #[must_use]
    pub fn camera_preset(&self) -> &CameraPreset {
        match self.style {
            CameraStyle::Flat => &self.camera.flat,
            CameraStyle::Standard => &self.camera.standard,
        }
    }

    /// Full path of the device asset.
    #[must_use]
    pub fn asset_path(&self) -> String {
        format!(
            "{}/{}.glb",
            self.path.trim_end_matches('/'),
            self.device.asset_name()
        )
    }
}

/// Resolve a named on-load preset to its request list.
///
/// Unknown names yield `None`, which the widget treats as "no animation".
#[must_use]
pub fn named_preset(name: &str) -> Option<Vec<AnimationRequest>> {
    const CAMERA_POS_Y: TweenTarget =
        TweenTarget::new(TargetObject::Camera, TargetProperty::Position, Axis::Y);
    const CAMERA_POS_Z: TweenTarget =
        TweenTarget::new(TargetObject::Camera, TargetProperty::Position, Axis::Z);
    const CAMERA_ROT_X: TweenTarget =
        TweenTarget::new(TargetObject::Camera, TargetProperty::Rotation, Axis::X);

    let moves = match name {
        "driveIn" => vec![
            AnimationRequest::spring_back(TweenTarget::model_yaw(), -30.0, 1500.0, Easing::SwingTo),
            AnimationRequest::spring_back(CAMERA_POS_Y, 3.0, 2000.0, Easing::EaseOutQuad),
            AnimationRequest::spring_back(CAMERA_POS_Z, 20.0, 2000.0, Easing::EaseOutQuad),
            AnimationRequest::spring_back(CAMERA_ROT_X, -5.0, 2000.0, Easing::EaseOutQuad),
        ],
        "riseUp" => vec![AnimationRequest::spring_back(
            CAMERA_POS_Y,
            2.0,
            1500.0,
            Easing::EaseOutQuad,
        )],
        "dropDown" => vec![AnimationRequest::spring_back(
            CAMERA_POS_Y,
            -1.0,
            1500.0,
            Easing::EaseOutQuad,
        )],
        "zoomIn" => vec![AnimationRequest::spring_back(
            CAMERA_POS_Z,
            6.0,
            2000.0,
            Easing::EaseOutQuad,
        )],
        "zoomOut" => vec![AnimationRequest::spring_back(
            CAMERA_POS_Z,
            -6.0,
            2000.0,
            Easing::EaseOutQuad,
        )],
        _ => return None,
    };
    Some(moves)
}

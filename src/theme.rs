//! Lighting and floor description.
//!
//! Data-only scene dressing consumed by the render backend: the default
//! studio rig (one hemisphere fill plus two directionals, one of them a
//! shadow caster) and an optional floor plane under the device.

use glam::Vec3;

use crate::config::FloorSettings;

/// Shadow camera half-extent of the key light's orthographic frustum.
const SHADOW_EXTENT: f32 = 8.25;

#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Hemisphere {
        sky: u32,
        ground: u32,
        intensity: f32,
        position: Vec3,
    },
    Directional {
        color: u32,
        intensity: f32,
        position: Vec3,
        /// Whether this light casts shadows.
        shadows: bool,
        map_size: u32,
        /// Orthographic half-extent of the shadow camera.
        shadow_extent: f32,
    },
}

/// Floor plane under the device. A `shadow_only` floor renders nothing but
/// the shadows it receives.
#[derive(Debug, Clone, PartialEq)]
pub struct Floor {
    pub color: String,
    /// Plane size: 1500 wide by `depth` deep.
    pub depth: f32,
    pub shadow_only: bool,
    pub shininess: f32,
    pub shadow_opacity: f32,
    /// Matches the active camera preset's object offset so the device sits
    /// on the floor.
    pub position_y: f32,
    /// Plane X rotation in radians (laid flat).
    pub rotation_x: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: u32,
    pub lights: Vec<Light>,
    pub floor: Floor,
    pub floor_enabled: bool,
}

impl Theme {
    /// The default studio rig with the given floor styling.
    #[must_use]
    pub fn build(floor: &FloorSettings, floor_enabled: bool, object_offset: f32) -> Self {
        let lights = vec![
            Light::Hemisphere {
                sky: 0xffffff,
                ground: 0xffffff,
                intensity: 0.5,
                position: Vec3::new(0.0, 50.0, 0.0),
            },
            Light::Directional {
                color: 0xffffff,
                intensity: 0.5,
                position: Vec3::new(-8.0, 12.0, 8.0),
                shadows: true,
                map_size: 2048,
                shadow_extent: SHADOW_EXTENT,
            },
            Light::Directional {
                color: 0xffffff,
                intensity: 0.3,
                position: Vec3::new(8.0, 12.0, -8.0),
                shadows: false,
                map_size: 2048,
                shadow_extent: SHADOW_EXTENT,
            },
        ];

        Self {
            background: 0x151617,
            lights,
            floor: Floor {
                color: floor.color.clone(),
                depth: floor.depth,
                shadow_only: floor.shadow_only,
                shininess: floor.shininess,
                shadow_opacity: floor.shadow_opacity,
                position_y: object_offset,
                rotation_x: -0.5 * std::f32::consts::PI,
            },
            floor_enabled,
        }
    }
}

//! The loaded device model.

use crate::config::DeviceKind;
use crate::scene::material::{MaterialSet, MaterialSpec};
use crate::scene::texture::ScreenTexture;
use crate::scene::transform::Transform;

/// The mesh name carrying the screenshot texture.
pub const SCREEN_MESH: &str = "screen";

/// One mesh of the device model, as reported by the loader.
#[derive(Debug, Clone)]
pub struct DeviceMesh {
    pub name: String,
    pub material: Option<MaterialSpec>,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub frustum_culled: bool,
}

impl DeviceMesh {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            material: None,
            cast_shadow: false,
            receive_shadow: false,
            frustum_culled: true,
        }
    }
}

/// Root object of the mockup: the hinged device mesh hierarchy collapsed to
/// the state this widget animates: a root transform, the named meshes, and
/// the screen texture.
#[derive(Debug, Clone)]
pub struct DeviceModel {
    pub device: DeviceKind,
    pub transform: Transform,
    pub meshes: Vec<DeviceMesh>,
    pub screen: Option<ScreenTexture>,
}

impl DeviceModel {
    #[must_use]
    pub fn new(device: DeviceKind) -> Self {
        Self {
            device,
            transform: Transform::new(),
            meshes: Vec::new(),
            screen: None,
        }
    }

    /// Recompute the model's world matrix. The frame loop calls this
    /// explicitly every rendered frame; nothing else updates it.
    pub fn update_world_transform(&mut self) -> bool {
        self.transform.update_world_matrix(None)
    }

    /// Assign resolved materials to every non-screen mesh and configure
    /// shadow/culling flags the way the mockup expects (everything casts
    /// and receives, culling off so the open/close deformation never pops).
    pub fn apply_materials(&mut self, materials: &MaterialSet) {
        for mesh in &mut self.meshes {
            mesh.cast_shadow = true;
            mesh.receive_shadow = true;
            mesh.frustum_culled = false;
            if mesh.name == SCREEN_MESH {
                continue;
            }
            mesh.material = Some(
                materials
                    .resolve(&mesh.name)
                    .cloned()
                    .unwrap_or_else(MaterialSpec::fallback),
            );
        }
    }

    #[must_use]
    pub fn screen(&self) -> Option<&ScreenTexture> {
        self.screen.as_ref()
    }

    #[must_use]
    pub fn screen_mut(&mut self) -> Option<&mut ScreenTexture> {
        self.screen.as_mut()
    }
}

//! Material descriptions for device meshes.
//!
//! Data-only: these structs describe the look of each named mesh so a
//! render backend can build its own GPU materials. The screen mesh is not
//! described here; it is always the screenshot-mapped material driven by
//! [`crate::scene::ScreenTexture`].

use std::collections::HashMap;

/// Description of one mesh material.
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialSpec {
    /// Environment-mapped metal/glass style surface.
    Physical {
        color: u32,
        metalness: f32,
        roughness: f32,
        reflectivity: f32,
        opacity: f32,
        transparent: bool,
        env_map_intensity: f32,
    },
    /// Simple shiny surface.
    Phong { color: u32, shininess: f32 },
}

impl MaterialSpec {
    /// Loud fallback for meshes nothing was resolved for.
    #[must_use]
    pub fn fallback() -> Self {
        MaterialSpec::Phong {
            color: 0xff0000,
            shininess: 30.0,
        }
    }
}

/// Mesh-name → material mapping for one device.
///
/// Mesh names are matched by their prefix up to the first digit, so
/// `body001` and `body002` both resolve through `body`.
#[derive(Debug, Clone, Default)]
pub struct MaterialSet {
    assignments: HashMap<String, MaterialSpec>,
}

impl MaterialSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mesh: impl Into<String>, spec: MaterialSpec) {
        self.assignments.insert(mesh.into(), spec);
    }

    #[must_use]
    pub fn resolve(&self, mesh_name: &str) -> Option<&MaterialSpec> {
        let prefix = mesh_name
            .split(|c: char| c.is_ascii_digit())
            .next()
            .unwrap_or(mesh_name);
        self.assignments.get(prefix)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl FromIterator<(String, MaterialSpec)> for MaterialSet {
    fn from_iter<I: IntoIterator<Item = (String, MaterialSpec)>>(iter: I) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
        }
    }
}

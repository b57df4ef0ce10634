//! TRS transform with cached matrices and shadow-state dirty checking.

use glam::{Affine3A, EulerRot, Mat4, Quat, Vec3};

/// Position / rotation / scale of a stage object, with cached local and
/// world matrices.
///
/// Rotation is stored as XYZ Euler angles in radians so that individual
/// components can be tweened directly (the swivel axis is `rotation.y`).
///
/// There is no automatic propagation: matrices are recomputed only when
/// [`Transform::update_world_matrix`] is called, which the frame loop does
/// explicitly before rendering.
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,

    local_matrix: Affine3A,
    world_matrix: Affine3A,

    // Shadow state for the dirty check: matrices are rebuilt only when a
    // public field actually changed since the last update.
    last_position: Vec3,
    last_rotation: Vec3,
    last_scale: Vec3,
    force_update: bool,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,

            local_matrix: Affine3A::IDENTITY,
            world_matrix: Affine3A::IDENTITY,

            last_position: Vec3::ZERO,
            last_rotation: Vec3::ZERO,
            last_scale: Vec3::ONE,
            force_update: true,
        }
    }

    /// Rebuild the local matrix if position/rotation/scale changed.
    ///
    /// Returns whether anything changed.
    pub fn update_local_matrix(&mut self) -> bool {
        let changed = self.position != self.last_position
            || self.rotation != self.last_rotation
            || self.scale != self.last_scale
            || self.force_update;

        if changed {
            let quat = Quat::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            );
            self.local_matrix =
                Affine3A::from_scale_rotation_translation(self.scale, quat, self.position);

            self.last_position = self.position;
            self.last_rotation = self.rotation;
            self.last_scale = self.scale;
            self.force_update = false;
        }

        changed
    }

    /// Recompute local and world matrices.
    ///
    /// `parent` is the parent world matrix for nested objects; the widget's
    /// stage objects are roots and pass `None`. Returns whether the world
    /// matrix changed.
    pub fn update_world_matrix(&mut self, parent: Option<&Affine3A>) -> bool {
        let changed = self.update_local_matrix();
        if changed {
            self.world_matrix = match parent {
                Some(parent) => *parent * self.local_matrix,
                None => self.local_matrix,
            };
        }
        changed
    }

    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> &Affine3A {
        &self.local_matrix
    }

    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.world_matrix
    }

    /// World matrix as `Mat4`, the form render backends upload.
    #[inline]
    #[must_use]
    pub fn world_matrix_as_mat4(&self) -> Mat4 {
        Mat4::from(self.world_matrix)
    }

    #[inline]
    #[must_use]
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Force a matrix rebuild on the next update.
    pub fn mark_dirty(&mut self) {
        self.force_update = true;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

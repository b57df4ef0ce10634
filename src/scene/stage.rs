//! The widget's stage: camera, model, and theme in one mutable unit.

use glam::Vec3;

use crate::scene::camera::Camera;
use crate::scene::model::DeviceModel;
use crate::theme::Theme;
use crate::tween::{Axis, TargetObject, TargetProperty, TweenTarget};

/// Everything the render backend draws and the tween timeline mutates.
///
/// `Stage` is also the resolver for [`TweenTarget`]s: [`Stage::value_of`]
/// and [`Stage::apply`] are the typed accessor pair behind every track.
pub struct Stage {
    pub camera: Camera,
    pub model: Option<DeviceModel>,
    pub theme: Theme,
}

impl Stage {
    #[must_use]
    pub fn new(camera: Camera, theme: Theme) -> Self {
        Self {
            camera,
            model: None,
            theme,
        }
    }

    pub fn set_model(&mut self, model: DeviceModel) {
        self.model = Some(model);
    }

    #[must_use]
    pub fn model(&self) -> Option<&DeviceModel> {
        self.model.as_ref()
    }

    #[must_use]
    pub fn model_mut(&mut self) -> Option<&mut DeviceModel> {
        self.model.as_mut()
    }

    /// Read the scalar a target points at, if it resolves on the current
    /// stage contents.
    #[must_use]
    pub fn value_of(&self, target: TweenTarget) -> Option<f32> {
        match target.object {
            TargetObject::Camera => {
                vector_property(&self.camera.transform, target.property).map(|v| component(v, target.axis))
            }
            TargetObject::Model => self
                .model
                .as_ref()
                .and_then(|m| vector_property(&m.transform, target.property))
                .map(|v| component(v, target.axis)),
            TargetObject::ScreenTexture => {
                if target.property != TargetProperty::Offset {
                    return None;
                }
                let screen = self.model.as_ref().and_then(DeviceModel::screen)?;
                match target.axis {
                    Axis::X => Some(screen.offset.x),
                    Axis::Y => Some(screen.offset.y),
                    Axis::Z => None,
                }
            }
        }
    }

    /// Write a tweened scalar through to the stage.
    ///
    /// Returns whether the target resolved; a `false` means the object
    /// disappeared mid-flight, which the caller treats as a silent no-op.
    pub fn apply(&mut self, target: TweenTarget, value: f32) -> bool {
        match target.object {
            TargetObject::Camera => {
                write_vector_property(&mut self.camera.transform, target, value)
            }
            TargetObject::Model => self
                .model
                .as_mut()
                .is_some_and(|m| write_vector_property(&mut m.transform, target, value)),
            TargetObject::ScreenTexture => {
                if target.property != TargetProperty::Offset {
                    return false;
                }
                let Some(screen) = self.model.as_mut().and_then(DeviceModel::screen_mut) else {
                    return false;
                };
                match target.axis {
                    Axis::X => screen.offset.x = value,
                    Axis::Y => screen.offset.y = value,
                    Axis::Z => return false,
                }
                true
            }
        }
    }
}

fn vector_property(
    transform: &crate::scene::Transform,
    property: TargetProperty,
) -> Option<Vec3> {
    match property {
        TargetProperty::Position => Some(transform.position),
        TargetProperty::Rotation => Some(transform.rotation),
        TargetProperty::Offset => None,
    }
}

fn write_vector_property(
    transform: &mut crate::scene::Transform,
    target: TweenTarget,
    value: f32,
) -> bool {
    let vector = match target.property {
        TargetProperty::Position => &mut transform.position,
        TargetProperty::Rotation => &mut transform.rotation,
        TargetProperty::Offset => return false,
    };
    set_component(vector, target.axis, value);
    true
}

#[inline]
fn component(v: Vec3, axis: Axis) -> f32 {
    match axis {
        Axis::X => v.x,
        Axis::Y => v.y,
        Axis::Z => v.z,
    }
}

#[inline]
fn set_component(v: &mut Vec3, axis: Axis, value: f32) {
    match axis {
        Axis::X => v.x = value,
        Axis::Y => v.y = value,
        Axis::Z => v.z = value,
    }
}

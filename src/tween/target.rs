//! Typed animation targets.
//!
//! A [`TweenTarget`] names one animatable scalar as an (object, property,
//! axis) triple over a closed set of variants, replacing the string-keyed
//! property paths of dynamic tween engines. Resolution against the stage
//! happens at request time; an unresolvable triple (wrong property for the
//! object, or the object not yet loaded) simply yields `None` and the
//! request is discarded upstream.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The scene object owning the animated property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetObject {
    Camera,
    Model,
    ScreenTexture,
}

/// The animated property on the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetProperty {
    Position,
    /// Euler rotation; request values are degrees, stage values radians.
    Rotation,
    /// Texture UV offset. Only meaningful for [`TargetObject::ScreenTexture`].
    Offset,
}

/// Component selector within the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One animatable scalar on the stage.
///
/// Serialized with the field names of the embedding-page request schema
/// (`object` / `move` / `axis`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweenTarget {
    pub object: TargetObject,
    #[serde(rename = "move")]
    pub property: TargetProperty,
    pub axis: Axis,
}

impl TweenTarget {
    #[must_use]
    pub const fn new(object: TargetObject, property: TargetProperty, axis: Axis) -> Self {
        Self {
            object,
            property,
            axis,
        }
    }

    /// The model's Y (yaw) rotation, the swivel axis.
    #[must_use]
    pub const fn model_yaw() -> Self {
        Self::new(TargetObject::Model, TargetProperty::Rotation, Axis::Y)
    }

    /// The screen texture's vertical UV offset, the scroll axis.
    #[must_use]
    pub const fn screen_scroll() -> Self {
        Self::new(TargetObject::ScreenTexture, TargetProperty::Offset, Axis::Y)
    }

    /// Whether request values for this target are degrees needing conversion.
    #[must_use]
    pub fn is_angular(self) -> bool {
        self.property == TargetProperty::Rotation
    }
}

impl fmt::Display for TweenTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}.{:?}.{:?}", self.object, self.property, self.axis)
    }
}

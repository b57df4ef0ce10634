//! Mixer advancing the device's clip action each frame.

use crate::animation::action::ClipAction;

/// Holds the (at most one) skinned action of the loaded device and advances
/// it by the frame's measured real-time delta.
#[derive(Debug, Default)]
pub struct Mixer {
    action: Option<ClipAction>,
}

impl Mixer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_action(&mut self, action: ClipAction) {
        self.action = Some(action);
    }

    #[must_use]
    pub fn action(&self) -> Option<&ClipAction> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn action_mut(&mut self) -> Option<&mut ClipAction> {
        self.action.as_mut()
    }

    #[must_use]
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Advance the action by `dt` seconds.
    ///
    /// Returns `true` when the action finished a play during this update.
    pub fn update(&mut self, dt: f32) -> bool {
        self.action.as_mut().is_some_and(|action| action.update(dt))
    }
}

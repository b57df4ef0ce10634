//! Screen texture state.
//!
//! The screenshot shown on the device's screen is taller than the visible
//! screen area; scrolling animates the vertical UV offset across the
//! overflow. Only the repeat/offset state lives here; decoding and GPU
//! upload belong to the render backend.

use glam::Vec2;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    Clamp,
    Repeat,
}

#[derive(Debug, Clone)]
pub struct ScreenTexture {
    pub uuid: Uuid,
    /// Path of the screenshot image, resolved by the render backend.
    pub source: String,
    pub offset: Vec2,
    pub repeat: Vec2,
    pub wrap_t: WrapMode,
    pub flip_y: bool,
    /// Native pixel height of the device's screen area.
    pub pixel_height: f32,
}

impl ScreenTexture {
    #[must_use]
    pub fn new(source: impl Into<String>, pixel_height: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            source: source.into(),
            offset: Vec2::ZERO,
            repeat: Vec2::ONE,
            wrap_t: WrapMode::Repeat,
            flip_y: false,
            pixel_height,
        }
    }

    /// Fit the visible window to a screenshot of `screenshot_height` pixels:
    /// the screen shows `pixel_height / screenshot_height` of it vertically.
    pub fn fit_screenshot(&mut self, screenshot_height: f32) {
        if screenshot_height > 0.0 {
            self.repeat.y = self.pixel_height / screenshot_height;
        }
    }

    /// Fraction of the screenshot visible at once.
    #[inline]
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.repeat.y
    }

    /// Offset Y at which the bottom of the screenshot lines up with the
    /// bottom of the screen, the far end of a downward scroll.
    #[inline]
    #[must_use]
    pub fn max_scroll_offset(&self) -> f32 {
        1.0 - self.repeat.y
    }
}

//! Skinned open/close clip playback and hinge state.

pub mod action;
pub mod mixer;
pub mod toggle;

pub use action::{ClipAction, HingeClip};
pub use mixer::Mixer;
pub use toggle::{HingePhase, HingeState};

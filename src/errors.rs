//! Error types.
//!
//! The widget surface itself degrades silently: a broken mockup must never
//! disrupt the hosting page, so missing parents, missing clips, unknown
//! presets and conflicting tween requests are logged and swallowed. The
//! error type below is for the places where a caller genuinely needs the
//! failure: collaborator implementations (loaders, hosts) and settings
//! parsing.

use thiserror::Error;

/// Failures surfaced by collaborator implementations and settings parsing.
#[derive(Error, Debug)]
pub enum DevicefulError {
    /// The requested asset was not found.
    #[error("asset not found: {0}")]
    AssetNotFound(String),

    /// The loader's channel closed before delivering the device.
    #[error("asset load channel closed before completion")]
    LoadChannelClosed,

    /// Settings could not be deserialized.
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),

    /// File I/O error from a loader implementation.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, DevicefulError>`.
pub type Result<T> = std::result::Result<T, DevicefulError>;

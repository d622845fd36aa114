//! Error types used by the crate.

use thiserror::Error;

/// Ortelius error type.
#[derive(Debug, Error)]
pub enum OrteliusError {
    /// The color option does not match the accepted `rgb(r, g, b)` form.
    #[error("Color field must be of form 'rgb(%d, %d, %d)'")]
    InvalidColorFormat,
    /// Failed to load a style from the remote service.
    #[error("failed to load style")]
    StyleFetch,
    /// The style service returned a body that is not a valid style document.
    #[error("failed to decode style: {0}")]
    StyleDecode(#[from] serde_json::Error),
    /// The widget is configured incorrectly.
    #[error("{0}")]
    Configuration(String),
}

impl From<reqwest::Error> for OrteliusError {
    fn from(_value: reqwest::Error) -> Self {
        Self::StyleFetch
    }
}

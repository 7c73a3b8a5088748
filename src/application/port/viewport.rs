// SPDX-License-Identifier: MPL-2.0
//! Fullscreen port definition.

/// Failure reported by the platform when changing fullscreen mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewportError {
    /// The platform has no fullscreen support.
    #[error("fullscreen is not supported")]
    Unsupported,

    /// The platform refused the request (no user gesture, policy, ...).
    #[error("fullscreen request denied: {0}")]
    Denied(String),
}

/// Port for the platform fullscreen API.
pub trait FullscreenPort {
    /// Requests fullscreen for the player viewport.
    ///
    /// # Errors
    ///
    /// Returns a [`ViewportError`] if the platform refuses.
    fn request_fullscreen(&mut self) -> Result<(), ViewportError>;

    /// Leaves fullscreen.
    ///
    /// # Errors
    ///
    /// Returns a [`ViewportError`] if the platform refuses.
    fn exit_fullscreen(&mut self) -> Result<(), ViewportError>;
}

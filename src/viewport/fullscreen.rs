// SPDX-License-Identifier: MPL-2.0
//! Fullscreen state tracking on top of a [`FullscreenPort`].

use crate::application::port::{FullscreenPort, ViewportError};

/// Tracks whether the player viewport is fullscreen.
///
/// The platform may leave fullscreen on its own (Escape key, window manager);
/// report that through [`FullscreenManager::on_external_change`] so the next
/// toggle goes the right way.
#[derive(Debug, Clone, Default)]
pub struct FullscreenManager<P> {
    port: P,
    fullscreen: bool,
}

impl<P: FullscreenPort> FullscreenManager<P> {
    #[must_use]
    pub fn new(port: P) -> Self {
        Self {
            port,
            fullscreen: false,
        }
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Switches mode. Returns the new fullscreen flag.
    ///
    /// # Errors
    ///
    /// Returns the port's error; the mode is then unchanged.
    pub fn toggle(&mut self) -> Result<bool, ViewportError> {
        if self.fullscreen {
            self.exit()
        } else {
            self.enter()
        }
    }

    /// Enters fullscreen. Already fullscreen is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the port's error; the mode is then unchanged.
    pub fn enter(&mut self) -> Result<bool, ViewportError> {
        if !self.fullscreen {
            self.port.request_fullscreen().inspect_err(|err| {
                tracing::warn!(%err, "fullscreen request failed");
            })?;
            self.fullscreen = true;
            tracing::debug!("entered fullscreen");
        }
        Ok(self.fullscreen)
    }

    /// Leaves fullscreen. Not fullscreen is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the port's error; the mode is then unchanged.
    pub fn exit(&mut self) -> Result<bool, ViewportError> {
        if self.fullscreen {
            self.port.exit_fullscreen().inspect_err(|err| {
                tracing::warn!(%err, "leaving fullscreen failed");
            })?;
            self.fullscreen = false;
            tracing::debug!("left fullscreen");
        }
        Ok(self.fullscreen)
    }

    /// Records a mode change the platform made on its own.
    pub fn on_external_change(&mut self, fullscreen: bool) {
        if self.fullscreen != fullscreen {
            tracing::debug!(fullscreen, "fullscreen changed externally");
            self.fullscreen = fullscreen;
        }
    }
}

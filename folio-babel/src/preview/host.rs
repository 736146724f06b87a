//! Collaborator traits for the external preview surface.
//!
//! The preview manager never creates windows, files or tabs itself. A host
//! provisions surfaces on request and each surface exposes the handful of
//! operations the manager needs to keep it in sync.

use crate::error::SurfaceError;

/// Provisions independent preview surfaces.
pub trait PreviewHost {
    type Surface: PreviewSurface;

    /// Create a new surface, or `None` when the host refuses (a blocked
    /// popup, an unwritable directory). Refusal is not an error.
    fn provision(&mut self, title: &str) -> Option<Self::Surface>;
}

/// A live, independently rendered document the manager writes into.
///
/// A push is always `begin_write`, one or more `write` calls and
/// `finish_write`, replacing the whole document.
pub trait PreviewSurface {
    fn begin_write(&mut self) -> Result<(), SurfaceError>;

    fn write(&mut self, chunk: &str) -> Result<(), SurfaceError>;

    fn finish_write(&mut self) -> Result<(), SurfaceError>;

    /// Whether the surface still exists. The end user may close it at any
    /// time without telling anyone; polling this is how that is noticed.
    fn is_live(&self) -> bool;

    fn close(&mut self) -> Result<(), SurfaceError>;
}

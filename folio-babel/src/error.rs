//! Error types for conversion and preview operations

use crate::mode::Mode;
use thiserror::Error;

/// Errors that can occur while converting between dialects
///
/// None of these ever reach the caller of
/// [`ModeController::convert`](crate::controller::ModeController::convert): the
/// controller logs them and hands back the original content.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The structural parser rejected its input
    #[error("Parse error: {0}")]
    Parse(String),
    /// The node tree nests deeper than the converter will recurse
    #[error("Document nests deeper than {limit} elements")]
    TooDeep { limit: usize },
    /// An opaque code placeholder had no stored fragment to restore
    #[error("Unknown code placeholder #{0}")]
    Placeholder(usize),
    /// No converter is registered for the requested mode pair
    #[error("No converter registered for '{from}' -> '{to}'")]
    NotRegistered { from: Mode, to: Mode },
}

/// Errors reported by a preview surface
///
/// The preview manager treats every write error as the surface having gone
/// away, and swallows errors from close requests.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The surface was closed or navigated away
    #[error("Preview surface is gone")]
    Gone,
    /// Underlying I/O failure
    #[error("Preview surface I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The finished document could not be moved into place
    #[error("Could not replace preview document: {0}")]
    Persist(String),
}

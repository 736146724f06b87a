//! Dialect implementations
//!
//! This module contains the two converters between the structural (tag-based)
//! dialect and the lightweight (plain-text) dialect.

pub mod lightweight;
pub mod structural;

pub use lightweight::StructuralToText;
pub use structural::{Html5everParser, StructuralParser, TextToStructural};

/// Deepest element nesting the converters will walk.
pub const MAX_DEPTH: usize = 512;

//! Mode controller
//!
//! Holds the editor's current mode and is the single entry point for
//! converting content when the mode changes. Conversion is total: whatever
//! goes wrong inside a converter, the caller gets a string back (the original
//! content, on failure) and the converting flag is cleared.

use crate::mode::Mode;
use crate::registry::ConverterRegistry;

/// Current mode plus the dispatch from mode pairs to converters.
pub struct ModeController {
    current_mode: Mode,
    is_converting: bool,
    registry: ConverterRegistry,
}

impl ModeController {
    /// A controller in `structural` mode using the default converters.
    pub fn new() -> Self {
        Self::with_registry(ConverterRegistry::with_defaults())
    }

    /// A controller dispatching through a custom registry.
    pub fn with_registry(registry: ConverterRegistry) -> Self {
        Self {
            current_mode: Mode::default(),
            is_converting: false,
            registry,
        }
    }

    pub fn current_mode(&self) -> Mode {
        self.current_mode
    }

    /// Switch modes. This never converts or inspects content; callers convert
    /// explicitly with [`ModeController::convert`].
    pub fn set_mode(&mut self, mode: Mode) {
        self.current_mode = mode;
    }

    /// True only while a dialect conversion is running.
    pub fn is_converting(&self) -> bool {
        self.is_converting
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    /// Convert `content` from one mode to another.
    ///
    /// - Equal modes return the content unchanged without touching the flag.
    /// - Dialect pairs run the registered converter; on failure the error is
    ///   logged and the original content is returned.
    /// - Pairs involving a view arrangement (`preview`, `split-*`) return the
    ///   content unchanged.
    pub fn convert(&mut self, content: &str, from: Mode, to: Mode) -> String {
        if from == to || !from.is_dialect() || !to.is_dialect() {
            return content.to_string();
        }

        self.is_converting = true;
        let result = self.registry.convert(content, from, to);
        self.is_converting = false;

        match result {
            Ok(converted) => {
                tracing::debug!(%from, %to, bytes = converted.len(), "converted content");
                converted
            }
            Err(err) => {
                tracing::warn!(%from, %to, error = %err, "conversion failed, keeping original content");
                content.to_string()
            }
        }
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

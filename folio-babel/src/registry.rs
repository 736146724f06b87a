//! Converter registry for dialect pair lookup
//!
//! This module provides a centralized registry of the available converters,
//! keyed by their `(source, target)` mode pair.

use crate::converter::Converter;
use crate::error::ConvertError;
use crate::formats::{Html5everParser, StructuralToText, TextToStructural};
use crate::mode::Mode;
use std::collections::HashMap;

/// Registry of dialect converters
///
/// # Examples
///
/// ```ignore
/// let registry = ConverterRegistry::with_defaults();
/// let markdown = registry.convert("<h1>Hi</h1>", Mode::Structural, Mode::Lightweight)?;
/// ```
pub struct ConverterRegistry {
    converters: HashMap<(Mode, Mode), Box<dyn Converter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ConverterRegistry {
            converters: HashMap::new(),
        }
    }

    /// Register a converter
    ///
    /// If a converter for the same mode pair already exists, it will be replaced.
    pub fn register<C: Converter + 'static>(&mut self, converter: C) {
        self.converters
            .insert((converter.source(), converter.target()), Box::new(converter));
    }

    /// Get the converter for a mode pair
    pub fn get(&self, from: Mode, to: Mode) -> Result<&dyn Converter, ConvertError> {
        self.converters
            .get(&(from, to))
            .map(|c| c.as_ref())
            .ok_or(ConvertError::NotRegistered { from, to })
    }

    /// Check if a converter exists for a mode pair
    pub fn has(&self, from: Mode, to: Mode) -> bool {
        self.converters.contains_key(&(from, to))
    }

    /// List all registered mode pairs (sorted by wire token)
    pub fn list_pairs(&self) -> Vec<(Mode, Mode)> {
        let mut pairs: Vec<_> = self.converters.keys().copied().collect();
        pairs.sort_by_key(|(from, to)| (from.as_str(), to.as_str()));
        pairs
    }

    /// Convert using the converter registered for `from -> to`
    pub fn convert(&self, input: &str, from: Mode, to: Mode) -> Result<String, ConvertError> {
        self.get(from, to)?.convert(input)
    }

    /// Create a registry with the two dialect converters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(StructuralToText::new(Html5everParser));
        registry.register(TextToStructural);

        registry
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

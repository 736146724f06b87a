//! Converter trait definition
//!
//! This module defines the trait every dialect converter implements. A
//! converter turns text in its source mode into text in its target mode and is
//! looked up by that mode pair in the [`ConverterRegistry`](crate::registry::ConverterRegistry).

use crate::error::ConvertError;
use crate::mode::Mode;

/// Trait for dialect converters
///
/// Implementors are pure: the same input always yields the same output and
/// nothing outside the returned string is touched.
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Converter for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn source(&self) -> Mode {
///         Mode::Lightweight
///     }
///
///     fn target(&self) -> Mode {
///         Mode::Structural
///     }
///
///     fn convert(&self, input: &str) -> Result<String, ConvertError> {
///         Ok(input.to_uppercase())
///     }
/// }
/// ```
pub trait Converter {
    /// The name of this converter (e.g., "structural-to-lightweight")
    fn name(&self) -> &str;

    /// Optional description of this converter
    fn description(&self) -> &str {
        ""
    }

    /// Mode of the text this converter accepts
    fn source(&self) -> Mode;

    /// Mode of the text this converter produces
    fn target(&self) -> Mode;

    /// Convert `input` from [`Converter::source`] to [`Converter::target`]
    fn convert(&self, input: &str) -> Result<String, ConvertError>;
}

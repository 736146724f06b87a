//! Editor mode tokens
//!
//! A mode selects either a markup dialect (`structural`, `lightweight`) or a
//! display arrangement (`preview`, `split-a`, `split-b`). Only the dialects
//! take part in conversion; the arrangements are pass-through.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The five editor modes, serialized as their wire tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Rendered, tag-based markup
    #[default]
    #[serde(rename = "structural")]
    Structural,
    /// Plain-text markup (hashes, asterisks, dashes, fences)
    #[serde(rename = "lightweight")]
    Lightweight,
    #[serde(rename = "preview")]
    Preview,
    #[serde(rename = "split-a")]
    SplitA,
    #[serde(rename = "split-b")]
    SplitB,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Structural,
        Mode::Lightweight,
        Mode::Preview,
        Mode::SplitA,
        Mode::SplitB,
    ];

    /// The wire token for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Structural => "structural",
            Mode::Lightweight => "lightweight",
            Mode::Preview => "preview",
            Mode::SplitA => "split-a",
            Mode::SplitB => "split-b",
        }
    }

    /// Whether this mode names a markup dialect rather than a view arrangement
    pub fn is_dialect(&self) -> bool {
        matches!(self, Mode::Structural | Mode::Lightweight)
    }

    /// Guess the dialect of a file from its extension
    pub fn from_extension(filename: &str) -> Option<Mode> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        match extension {
            "html" | "htm" => Some(Mode::Structural),
            "md" | "markdown" => Some(Mode::Lightweight),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown mode '{0}' (expected one of: structural, lightweight, preview, split-a, split-b)")]
pub struct ModeParseError(pub String);

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ModeParseError(s.to_string()))
    }
}

//! Contains the dialect-agnostic machinery shared by the converters.

pub mod list_grouping;
pub mod stash;

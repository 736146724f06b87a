//! Structural node tree.
//!
//! This module defines the parsed form of structural markup that the
//! structural-to-lightweight converter walks. Trees come either from the
//! injected [`StructuralParser`](crate::formats::structural::StructuralParser)
//! or are built by hand (see the builder methods on [`Element`]).

pub mod nodes;
pub mod tags;

pub use nodes::{Element, Node};
pub use tags::Tag;

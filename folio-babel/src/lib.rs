//! Structural/lightweight markup conversion with a live external preview
//!
//!     This crate converts documents between two markup dialects and keeps an external
//!     preview surface in sync with an editable buffer:
//!
//!     - The structural dialect: tag based markup (`<h1>`, `<strong>`, `<ul>`...), read as text
//!       and parsed into a node tree.
//!     - The lightweight dialect: plain text markup (`#`, `**`, `- `, fenced code...).
//!
//!     TLDR:
//!         - Converters only ever produce strings; the controller never lets a conversion error
//!           reach its caller, it logs and hands back the original content.
//!         - Structural parsing is an injected capability (StructuralParser), the tree walker is
//!           tested with hand-built trees.
//!         - The preview manager owns its timers as deadlines; the host's event loop drives it
//!           with tick(now).
//!         - This is a pure lib: no code here supposes a shell, prints to std streams or reads
//!           env vars. The folio-cli crate is the shell.
//!
//! Architecture
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # ConvertError, SurfaceError
//!     ├── mode.rs                 # Mode tokens
//!     ├── converter.rs            # Converter trait
//!     ├── registry.rs             # ConverterRegistry keyed by mode pair
//!     ├── controller.rs           # ModeController, the conversion entry point
//!     ├── tree                    # Node tree and tag classification
//!     ├── formats
//!     │   ├── structural
//!     │   │   ├── parser.rs       # markup text -> node tree (html5ever)
//!     │   │   ├── serializer.rs   # lightweight text -> markup text
//!     │   │   └── mod.rs
//!     │   └── lightweight
//!     │       ├── serializer.rs   # node tree -> lightweight text
//!     │       └── mod.rs
//!     ├── common                  # List grouping state machine, code placeholders
//!     └── preview                 # Preview manager, host traits, document, file host
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Core Algorithms
//!
//!     Structural to lightweight is a post-order walk: each element converts its children and wraps
//!     the result in a per-tag template (see ./formats/lightweight/serializer.rs). Unknown tags pass
//!     their children through, so new markup degrades to text instead of failing.
//!
//!     Lightweight to structural is an ordered series of rewrite passes over the whole text (see
//!     ./formats/structural/serializer.rs). Code is converted first and stashed behind opaque
//!     placeholders so no later pass can touch it, and list items are grouped by an explicit
//!     three-state machine (./common/list_grouping.rs) that never nests wrappers.
//!
//!     Both directions are lossy on purpose for ordered lists (every item becomes `1.`), tables and
//!     attributes; round trips are exact only for the constrained subset both dialects share.
//!
//! Library Choices
//!
//!     Markup parsing is offloaded to html5ever, which handles fragments and malformed markup the
//!     way a browser does. The lightweight side is parsed with the regex crate, as the dialect
//!     subset handled here is line oriented.
//!
pub mod common;
pub mod controller;
pub mod converter;
pub mod error;
pub mod formats;
pub mod mode;
pub mod preview;
pub mod registry;
pub mod tree;

pub use controller::ModeController;
pub use converter::Converter;
pub use error::{ConvertError, SurfaceError};
pub use mode::{Mode, ModeParseError};
pub use preview::{PreviewHost, PreviewManager, PreviewOptions, PreviewSurface};
pub use registry::ConverterRegistry;

//! Rendering and format interop for hashmark documents
//!
//!     This crate takes the document tree built by hashmark-core and turns it into text. It is a
//!     pure lib: it powers hashmark-cli but is shell agnostic, so no code here prints, reads env
//!     vars or touches the file system.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── render.rs               # render(source, OutputFormat), the one-call entry point
//!     ├── formats
//!     │   ├── plain               # hashmark source, re-emitted with indentation
//!     │   ├── html
//!     │   ├── wiki                # MediaWiki markup
//!     │   ├── tag                 # XML-like dump of the tree
//!     │   └── treeviz             # box-drawing dump of the tree
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     └── <format>
//!         ├── <testname>.rs
//!         └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait. Formats have a name,
//!     file extensions and parse() and/or serialize() methods. See the trait def [./format.rs ]
//!     - Format trait: Uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: Centralized discovery and selection of formats
//!     - Format implementations: Concrete implementations for each supported format
//!
//!     The hashmark markup itself is the `plain` format, so reading source text and writing the
//!     normalized echo go through the same interface as every other format.
//!
//!     Every renderer visits the tree in the same order and differs only in surface syntax. None
//!     of them escapes payload text except the inspection dumps.
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod render;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
pub use render::{render, render_named, OutputFormat};

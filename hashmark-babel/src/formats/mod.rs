//! Format implementations
//!
//! The plain, html and wiki formats are the three rendering targets of the hashmark markup.
//! The tag and treeviz formats dump the document tree for inspection.

pub mod html;
pub mod icons;
pub mod plain;
pub mod tag;
pub mod treeviz;
pub mod wiki;

pub use html::{HtmlFormat, HtmlOptions};
pub use plain::{PlainOptions, PlainTextFormat};
pub use tag::TagFormat;
pub use treeviz::TreevizFormat;
pub use wiki::WikiFormat;

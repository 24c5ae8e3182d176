//! Readers and writers for the Well-Known Text and Well-Known Binary geometry encodings, and
//! the settings objects that configure them.

/// Deepest collection nesting either reader accepts. The outermost geometry is at depth 0.
pub const MAX_NESTING_DEPTH: usize = 128;

pub mod settings;
mod stream;
pub mod wkb;
pub mod wkt;

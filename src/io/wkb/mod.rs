//! Reading and writing ISO-flavored WKB-encoded geometries.
//!
//! Every record starts with its own byte order marker and type code, so each member of a
//! multi geometry or collection can be decoded on its own. The writer produces little-endian
//! output only; the reader accepts both byte orders.

mod api;
mod common;
mod reader;
mod writer;

pub use api::{from_wkb, to_wkb};
pub use reader::WkbReader;
pub use writer::{geometry_wkb_size, write_geometry_as_wkb, WkbWriter};

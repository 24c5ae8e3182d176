//! Reading and writing Well-Known Text.

mod reader;
mod writer;

pub use reader::{parse_wkt, WktReader};
pub use writer::{to_wkt, WktWriter};

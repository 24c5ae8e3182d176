use std::io::Write;

use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::{GeometryTrait, Point};
use crate::io::wkb::common::{write_coord, write_count, write_header, HEADER_BYTES};

/// The byte length of a WKBPoint
pub fn point_wkb_size(geom: &Point) -> usize {
    match geom.coord() {
        Some(_) => HEADER_BYTES + geom.dim().size() * 8,
        None => HEADER_BYTES + 4,
    }
}

/// Write a Point geometry to a Writer encoded as WKB
///
/// An empty point is written like any other empty geometry, as its header and a zero count.
pub fn write_point_as_wkb<W: Write + ?Sized>(writer: &mut W, geom: &Point) -> Result<()> {
    write_header(writer, GeometryType::Point, geom.dim())?;
    match geom.coord() {
        Some(coord) => write_coord(writer, coord),
        None => write_count(writer, 0),
    }
}

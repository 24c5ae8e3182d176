use std::io::Write;

use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::{GeometryTrait, LineString};
use crate::io::wkb::common::{write_coord, write_count, write_header, HEADER_BYTES};

/// The byte length of a coordinate sequence: count plus ordinates.
pub(crate) fn coords_wkb_size(geom: &LineString) -> usize {
    4 + geom.num_coords() * geom.dim().size() * 8
}

/// The byte length of a WKBLineString
pub fn line_string_wkb_size(geom: &LineString) -> usize {
    HEADER_BYTES + coords_wkb_size(geom)
}

/// Write the count and coordinates of a line string, without a header.
///
/// This is also the layout of a polygon ring.
pub(crate) fn write_coords<W: Write + ?Sized>(writer: &mut W, geom: &LineString) -> Result<()> {
    write_count(writer, geom.num_coords())?;
    for coord in geom.coords() {
        write_coord(writer, coord)?;
    }
    Ok(())
}

/// Write a LineString geometry to a Writer encoded as WKB
pub fn write_line_string_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &LineString,
) -> Result<()> {
    write_header(writer, GeometryType::LineString, geom.dim())?;
    write_coords(writer, geom)
}

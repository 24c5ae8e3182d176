use std::io::Write;

use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::{GeometryCollection, GeometryTrait};
use crate::io::wkb::common::{write_count, write_header, HEADER_BYTES};
use crate::io::wkb::writer::geometry::{geometry_wkb_size, write_geometry_as_wkb};

/// The byte length of a WKBGeometryCollection
pub fn geometry_collection_wkb_size(geom: &GeometryCollection) -> usize {
    HEADER_BYTES
        + 4
        + geom
            .geometries()
            .iter()
            .map(geometry_wkb_size)
            .sum::<usize>()
}

/// Write a GeometryCollection geometry to a Writer encoded as WKB
pub fn write_geometry_collection_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &GeometryCollection,
) -> Result<()> {
    write_header(writer, GeometryType::GeometryCollection, geom.dim())?;
    write_count(writer, geom.num_geometries())?;
    for member in geom.geometries() {
        write_geometry_as_wkb(writer, member)?;
    }
    Ok(())
}

use std::io::Write;

use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::{GeometryTrait, Polygon};
use crate::io::wkb::common::{write_count, write_header, HEADER_BYTES};
use crate::io::wkb::writer::linestring::{coords_wkb_size, write_coords};

/// The byte length of a WKBPolygon
pub fn polygon_wkb_size(geom: &Polygon) -> usize {
    HEADER_BYTES + 4 + geom.rings().iter().map(coords_wkb_size).sum::<usize>()
}

/// Write a Polygon geometry to a Writer encoded as WKB
///
/// Rings are written as a count followed by coordinates, without their own header.
pub fn write_polygon_as_wkb<W: Write + ?Sized>(writer: &mut W, geom: &Polygon) -> Result<()> {
    write_header(writer, GeometryType::Polygon, geom.dim())?;
    write_count(writer, geom.num_rings())?;
    for ring in geom.rings() {
        write_coords(writer, ring)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::Dimension;
    use crate::test::coord::{exterior, hole};
    use crate::test::polygon::p_holes;
    use crate::test::wkb::WkbBytes;

    #[test]
    fn polygon_with_holes() {
        let geom = p_holes(Dimension::XYM);
        let mut buf = Vec::new();
        write_polygon_as_wkb(&mut buf, &geom).unwrap();

        let expected = WkbBytes::new()
            .header(2003)
            .count(3)
            .coords(&exterior(Dimension::XYM))
            .coords(&hole(Dimension::XYM))
            .coords(&hole(Dimension::XYM))
            .build();
        assert_eq!(buf, expected);
        assert_eq!(buf.len(), polygon_wkb_size(&geom));
    }

    #[test]
    fn empty_polygon() {
        let mut buf = Vec::new();
        write_polygon_as_wkb(&mut buf, &Polygon::empty(Dimension::XY)).unwrap();
        assert_eq!(buf, WkbBytes::new().header(3).count(0).build());
    }
}

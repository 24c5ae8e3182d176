use std::io::Write;

use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::{GeometryTrait, MultiPolygon};
use crate::io::wkb::common::{write_count, write_header, HEADER_BYTES};
use crate::io::wkb::writer::polygon::{polygon_wkb_size, write_polygon_as_wkb};

/// The byte length of a WKBMultiPolygon
pub fn multi_polygon_wkb_size(geom: &MultiPolygon) -> usize {
    HEADER_BYTES + 4 + geom.polygons().iter().map(polygon_wkb_size).sum::<usize>()
}

/// Write a MultiPolygon geometry to a Writer encoded as WKB
pub fn write_multi_polygon_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &MultiPolygon,
) -> Result<()> {
    write_header(writer, GeometryType::MultiPolygon, geom.dim())?;
    write_count(writer, geom.num_polygons())?;
    for polygon in geom.polygons() {
        write_polygon_as_wkb(writer, polygon)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::Dimension;
    use crate::test::coord::exterior;
    use crate::test::multipolygon::mp0;
    use crate::test::wkb::WkbBytes;

    #[test]
    fn multi_polygon() {
        let geom = mp0(Dimension::XYZM);
        let mut buf = Vec::new();
        write_multi_polygon_as_wkb(&mut buf, &geom).unwrap();

        let polygon = WkbBytes::new()
            .header(3003)
            .count(1)
            .coords(&exterior(Dimension::XYZM))
            .build();
        let expected = WkbBytes::new()
            .header(3006)
            .count(2)
            .bytes(polygon.clone())
            .bytes(polygon)
            .build();
        assert_eq!(buf, expected);
        assert_eq!(buf.len(), multi_polygon_wkb_size(&geom));
    }
}

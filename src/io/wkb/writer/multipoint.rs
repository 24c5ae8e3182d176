use std::io::Write;

use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::{GeometryTrait, MultiPoint};
use crate::io::wkb::common::{write_count, write_header, HEADER_BYTES};
use crate::io::wkb::writer::point::{point_wkb_size, write_point_as_wkb};

/// The byte length of a WKBMultiPoint
pub fn multi_point_wkb_size(geom: &MultiPoint) -> usize {
    HEADER_BYTES + 4 + geom.points().iter().map(point_wkb_size).sum::<usize>()
}

/// Write a MultiPoint geometry to a Writer encoded as WKB
pub fn write_multi_point_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &MultiPoint,
) -> Result<()> {
    write_header(writer, GeometryType::MultiPoint, geom.dim())?;
    write_count(writer, geom.num_points())?;
    for point in geom.points() {
        write_point_as_wkb(writer, point)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::Dimension;
    use crate::test::multipoint::mp0;
    use crate::test::wkb::WkbBytes;

    #[test]
    fn members_are_full_records() {
        let geom = mp0(Dimension::XYZ);
        let mut buf = Vec::new();
        write_multi_point_as_wkb(&mut buf, &geom).unwrap();

        let expected = WkbBytes::new()
            .header(1004)
            .count(2)
            .header(1001)
            .f64(-10.1)
            .f64(15.5)
            .f64(100.5)
            .header(1001)
            .f64(20.2)
            .f64(-25.5)
            .f64(200.5)
            .build();
        assert_eq!(buf, expected);
        assert_eq!(buf.len(), multi_point_wkb_size(&geom));
    }
}

use std::io::Write;

use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::{GeometryTrait, MultiLineString};
use crate::io::wkb::common::{write_count, write_header, HEADER_BYTES};
use crate::io::wkb::writer::linestring::{line_string_wkb_size, write_line_string_as_wkb};

/// The byte length of a WKBMultiLineString
pub fn multi_line_string_wkb_size(geom: &MultiLineString) -> usize {
    HEADER_BYTES
        + 4
        + geom
            .line_strings()
            .iter()
            .map(line_string_wkb_size)
            .sum::<usize>()
}

/// Write a MultiLineString geometry to a Writer encoded as WKB
pub fn write_multi_line_string_as_wkb<W: Write + ?Sized>(
    writer: &mut W,
    geom: &MultiLineString,
) -> Result<()> {
    write_header(writer, GeometryType::MultiLineString, geom.dim())?;
    write_count(writer, geom.num_line_strings())?;
    for line_string in geom.line_strings() {
        write_line_string_as_wkb(writer, line_string)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::Dimension;
    use crate::test::coord::exterior;
    use crate::test::multilinestring::ml0;
    use crate::test::wkb::WkbBytes;

    #[test]
    fn multi_line_string() {
        let geom = ml0(Dimension::XY);
        let mut buf = Vec::new();
        write_multi_line_string_as_wkb(&mut buf, &geom).unwrap();

        let expected = WkbBytes::new()
            .header(5)
            .count(2)
            .header(2)
            .coords(&exterior(Dimension::XY))
            .header(2)
            .coords(&exterior(Dimension::XY))
            .build();
        assert_eq!(buf, expected);
        assert_eq!(buf.len(), multi_line_string_wkb_size(&geom));
    }
}

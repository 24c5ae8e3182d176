use crate::error::{Result, WkxError};
use crate::geometry::Geometry;
use crate::io::wkb::common::ByteReader;
use crate::io::wkb::reader::read_geometry;
use crate::io::wkb::writer::{geometry_wkb_size, write_geometry_as_wkb};

/// Encode a geometry to a little-endian WKB buffer.
///
/// ```
/// use geo_wkx::geometry::{Coord, Point};
/// use geo_wkx::io::wkb::to_wkb;
///
/// let buf = to_wkb(&Point::new(Coord::new(-10.1, 15.5)).into()).unwrap();
/// assert_eq!(buf.len(), 21);
/// assert_eq!(buf[0], 1);
/// ```
pub fn to_wkb(geometry: &Geometry) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(geometry_wkb_size(geometry));
    write_geometry_as_wkb(&mut buf, geometry)?;
    Ok(buf)
}

/// Decode a buffer holding exactly one WKB record.
pub fn from_wkb(buf: &[u8]) -> Result<Geometry> {
    let mut reader = ByteReader::new(buf);
    let geometry = read_geometry(&mut reader, 0)?;
    let consumed = reader.offset();
    if consumed != buf.len() as u64 {
        return Err(WkxError::WkbFormat(format!(
            "{} trailing bytes after geometry",
            buf.len() as u64 - consumed
        )));
    }
    Ok(geometry)
}

use std::io::Read;

use crate::datatypes::{split_wkb_type_code, Dimension, GeometryType};
use crate::error::{Result, WkxError};
use crate::geometry::{
    Geometry, GeometryCollection, GeometryTrait, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::io::settings::Encoding;
use crate::io::wkb::common::{is_header, ByteReader, HEADER_BYTES, MAX_PREALLOC};
use crate::io::MAX_NESTING_DEPTH;

/// Decode one complete WKB record, byte order marker included.
pub(crate) fn read_geometry<R: Read>(
    reader: &mut ByteReader<R>,
    depth: usize,
) -> Result<Geometry> {
    let marker = reader.read_u8()?;
    read_geometry_after_marker(reader, marker, depth)
}

/// Decode the rest of a record whose byte order marker has already been consumed.
///
/// `depth` is the number of records enclosing this one.
pub(crate) fn read_geometry_after_marker<R: Read>(
    reader: &mut ByteReader<R>,
    marker: u8,
    depth: usize,
) -> Result<Geometry> {
    if depth > MAX_NESTING_DEPTH {
        return Err(WkxError::WkbFormat(format!(
            "Geometry nested deeper than {MAX_NESTING_DEPTH} levels at offset {}",
            reader.offset() - 1
        )));
    }
    let order = Encoding::try_from(marker)
        .map_err(|_| WkxError::WkbFormat(format!("Invalid byte order marker {marker}")))?;
    let (geometry_type, dim) = split_wkb_type_code(reader.read_u32(order)?)?;

    let geometry = match geometry_type {
        GeometryType::Point => read_point(reader, order, dim)?.into(),
        GeometryType::LineString => read_line_string(reader, order, dim)?.into(),
        GeometryType::Polygon => read_polygon(reader, order, dim)?.into(),
        GeometryType::MultiPoint => {
            let points = read_members(reader, order, depth, |member| match member {
                Geometry::Point(point) => Ok(point),
                other => Err(unexpected_member(GeometryType::MultiPoint, &other)),
            })?;
            MultiPoint::try_new(dim, points)?.into()
        }
        GeometryType::MultiLineString => {
            let line_strings = read_members(reader, order, depth, |member| match member {
                Geometry::LineString(line_string) => Ok(line_string),
                other => Err(unexpected_member(GeometryType::MultiLineString, &other)),
            })?;
            MultiLineString::try_new(dim, line_strings)?.into()
        }
        GeometryType::MultiPolygon => {
            let polygons = read_members(reader, order, depth, |member| match member {
                Geometry::Polygon(polygon) => Ok(polygon),
                other => Err(unexpected_member(GeometryType::MultiPolygon, &other)),
            })?;
            MultiPolygon::try_new(dim, polygons)?.into()
        }
        GeometryType::GeometryCollection => {
            let geometries = read_members(reader, order, depth, Ok)?;
            GeometryCollection::try_new(dim, geometries)?.into()
        }
    };
    Ok(geometry)
}

fn read_point<R: Read>(
    reader: &mut ByteReader<R>,
    order: Encoding,
    dim: Dimension,
) -> Result<Point> {
    if at_empty_point_count(reader, order)? {
        reader.read_count(order)?;
        return Ok(Point::empty(dim));
    }
    Ok(Point::new(reader.read_coord(order, dim)?))
}

/// An empty point carries a zero count where its coordinate would be. Four zero bytes may
/// also be the first half of an ordinate, so they are only taken as the count when the input
/// ends right after them or a record header in the same byte order follows.
fn at_empty_point_count<R: Read>(reader: &mut ByteReader<R>, order: Encoding) -> Result<bool> {
    let ahead = reader.peek(4 + HEADER_BYTES)?;
    if ahead.len() < 4 || ahead[..4] != [0; 4] {
        return Ok(false);
    }
    Ok(ahead.len() == 4 || is_header(&ahead[4..], order))
}

/// A count followed by that many coordinates. Also the layout of a polygon ring.
fn read_line_string<R: Read>(
    reader: &mut ByteReader<R>,
    order: Encoding,
    dim: Dimension,
) -> Result<LineString> {
    let num_coords = reader.read_count(order)?;
    let mut coords = Vec::with_capacity(num_coords.min(MAX_PREALLOC));
    for _ in 0..num_coords {
        coords.push(reader.read_coord(order, dim)?);
    }
    LineString::try_new(dim, coords)
}

fn read_polygon<R: Read>(
    reader: &mut ByteReader<R>,
    order: Encoding,
    dim: Dimension,
) -> Result<Polygon> {
    let num_rings = reader.read_count(order)?;
    let mut rings = Vec::with_capacity(num_rings.min(MAX_PREALLOC));
    for _ in 0..num_rings {
        rings.push(read_line_string(reader, order, dim)?);
    }
    Polygon::try_new(dim, rings)
}

/// Read a member count and that many full sub-records, each with its own byte order.
fn read_members<R: Read, T>(
    reader: &mut ByteReader<R>,
    order: Encoding,
    depth: usize,
    mut convert: impl FnMut(Geometry) -> Result<T>,
) -> Result<Vec<T>> {
    let num_members = reader.read_count(order)?;
    let mut members = Vec::with_capacity(num_members.min(MAX_PREALLOC));
    for _ in 0..num_members {
        members.push(convert(read_geometry(reader, depth + 1)?)?);
    }
    Ok(members)
}

fn unexpected_member(container: GeometryType, member: &Geometry) -> WkxError {
    WkxError::WkbFormat(format!(
        "Unexpected {} member in {container}",
        member.geometry_type()
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Coord;
    use crate::test::point::p0;
    use crate::test::polygon::p_holes;
    use crate::test::wkb::WkbBytes;

    fn decode(buf: &[u8]) -> Result<Geometry> {
        read_geometry(&mut ByteReader::new(buf), 0)
    }

    #[test]
    fn big_endian_point() {
        let mut buf = vec![0];
        buf.extend_from_slice(&1001u32.to_be_bytes());
        for value in [-10.1f64, 15.5, 100.5] {
            buf.extend_from_slice(&value.to_be_bytes());
        }
        assert_eq!(decode(&buf).unwrap(), p0(Dimension::XYZ).into());
    }

    #[test]
    fn members_switch_byte_order() {
        let mut big_endian_point = vec![0];
        big_endian_point.extend_from_slice(&1u32.to_be_bytes());
        big_endian_point.extend_from_slice(&(-10.1f64).to_be_bytes());
        big_endian_point.extend_from_slice(&15.5f64.to_be_bytes());

        let buf = WkbBytes::new()
            .header(4)
            .count(1)
            .bytes(big_endian_point)
            .build();
        let multi_point = decode(&buf).unwrap().into_multi_point().unwrap();
        assert_eq!(multi_point.points(), &[p0(Dimension::XY)]);
    }

    #[test]
    fn zero_count_point_is_empty() {
        assert_eq!(
            decode(&[1, 1, 0, 0, 0, 0, 0, 0, 0]).unwrap(),
            Point::empty(Dimension::XY).into()
        );
        assert_eq!(
            decode(&WkbBytes::new().header(3001).count(0).build()).unwrap(),
            Point::empty(Dimension::XYZM).into()
        );

        let mut big_endian = vec![0];
        big_endian.extend_from_slice(&1u32.to_be_bytes());
        big_endian.extend_from_slice(&0u32.to_be_bytes());
        assert_eq!(decode(&big_endian).unwrap(), Point::empty(Dimension::XY).into());
    }

    #[test]
    fn empty_point_between_members() {
        let buf = WkbBytes::new()
            .header(4)
            .count(3)
            .header(1)
            .count(0)
            .header(1)
            .f64(1.)
            .f64(2.)
            .header(1)
            .count(0)
            .build();
        let multi_point = decode(&buf).unwrap().into_multi_point().unwrap();
        assert_eq!(
            multi_point.points(),
            &[
                Point::empty(Dimension::XY),
                Point::new(Coord::new(1., 2.)),
                Point::empty(Dimension::XY),
            ]
        );
    }

    #[test]
    fn zero_low_bytes_are_an_ordinate() {
        // 1.0 and 0.0 both start with four zero bytes in little-endian order
        for (x, y) in [(1., 2.), (0., 0.), (0., 1.0000000000000007)] {
            let buf = WkbBytes::new().header(1).f64(x).f64(y).build();
            assert_eq!(decode(&buf).unwrap(), Point::new(Coord::new(x, y)).into());
        }

        let buf = WkbBytes::new().header(1).f64(f64::NAN).f64(f64::NAN).build();
        assert!(!decode(&buf).unwrap().is_empty());
    }

    #[test]
    fn nesting_limit() {
        let nested = |levels: usize| {
            let mut bytes = WkbBytes::new();
            for _ in 0..levels {
                bytes = bytes.header(7).count(1);
            }
            bytes.header(7).count(0).build()
        };
        assert!(decode(&nested(MAX_NESTING_DEPTH)).is_ok());

        let err = decode(&nested(MAX_NESTING_DEPTH + 1)).unwrap_err();
        assert!(matches!(err, WkxError::WkbFormat(_)));
        assert!(err.to_string().contains("nested deeper"));

        assert!(matches!(
            decode(&nested(200_000)),
            Err(WkxError::WkbFormat(_))
        ));
    }

    #[test]
    fn polygon_rings() {
        let expected = p_holes(Dimension::XYZ);
        let mut bytes = WkbBytes::new().header(1003).count(3);
        for ring in expected.rings() {
            bytes = bytes.coords(ring.coords());
        }
        assert_eq!(decode(&bytes.build()).unwrap(), expected.into());
    }

    #[test]
    fn wrong_member_type() {
        let buf = WkbBytes::new()
            .header(5)
            .count(1)
            .header(1)
            .f64(1.)
            .f64(2.)
            .build();
        let err = decode(&buf).unwrap_err();
        assert!(matches!(err, WkxError::WkbFormat(_)));
        assert!(err.to_string().contains("point member in multilinestring"));
    }

    #[test]
    fn bad_header() {
        assert!(matches!(
            decode(&WkbBytes::new().header(9).build()),
            Err(WkxError::WkbFormat(_))
        ));
        assert!(matches!(
            decode(&WkbBytes::new().header(4002).build()),
            Err(WkxError::WkbFormat(_))
        ));
        assert!(matches!(decode(&[2, 1, 0, 0, 0]), Err(WkxError::WkbFormat(_))));
    }

    #[test]
    fn truncated_input() {
        let buf = WkbBytes::new().header(1).f64(1.).build();
        assert!(matches!(
            decode(&buf),
            Err(WkxError::Truncated { offset: 13 })
        ));
        assert!(matches!(decode(&[]), Err(WkxError::Truncated { offset: 0 })));
    }

    #[test]
    fn corrupt_count_fails_without_huge_allocation() {
        let buf = WkbBytes::new().header(2).count(u32::MAX).build();
        assert!(matches!(
            decode(&buf),
            Err(WkxError::Truncated { offset: 9 })
        ));
    }
}

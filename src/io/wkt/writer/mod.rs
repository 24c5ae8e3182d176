//! Write [`Geometry`] values as Well-Known Text.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, trace};

use crate::datatypes::{Dimension, GeometryType};
use crate::error::Result;
use crate::geometry::{
    Coord, Geometry, GeometryCollection, GeometryTrait, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::io::stream::{create_file, OutputStream};

/// Encode a geometry as WKT.
///
/// Keywords and dimension tags are written in lowercase, and numbers use the shortest
/// representation that parses back to the same value.
///
/// ```
/// use geo_wkx::geometry::{Coord, Point};
/// use geo_wkx::io::wkt::to_wkt;
///
/// let point = Point::new(Coord::new_z(1.5, -2.0, 10.0));
/// assert_eq!(to_wkt(&point.into()), "point z (1.5 -2.0 10.0)");
/// ```
pub fn to_wkt(geometry: &Geometry) -> String {
    let mut out = String::new();
    write_geometry(&mut out, geometry);
    out
}

fn write_geometry(out: &mut String, geometry: &Geometry) {
    write_tag(out, geometry.geometry_type(), geometry.dim());
    if geometry.is_empty() {
        out.push_str("empty");
        return;
    }
    match geometry {
        Geometry::Point(g) => write_point_body(out, g),
        Geometry::LineString(g) => write_line_string_body(out, g),
        Geometry::Polygon(g) => write_polygon_body(out, g),
        Geometry::MultiPoint(g) => write_multi_point_body(out, g),
        Geometry::MultiLineString(g) => write_multi_line_string_body(out, g),
        Geometry::MultiPolygon(g) => write_multi_polygon_body(out, g),
        Geometry::GeometryCollection(g) => write_geometry_collection_body(out, g),
    }
}

/// `keyword [dimension] `
fn write_tag(out: &mut String, geometry_type: GeometryType, dim: Dimension) {
    out.push_str(geometry_type.wkt_keyword());
    out.push(' ');
    if let Some(tag) = dim.wkt_tag() {
        out.push_str(tag);
        out.push(' ');
    }
}

fn write_number(out: &mut String, value: f64) {
    let mut buffer = [0u8; lexical_core::BUFFER_SIZE];
    let digits = lexical_core::write(value, &mut buffer);
    out.extend(digits.iter().map(|&b| b as char));
}

fn write_coord(out: &mut String, coord: &Coord) {
    for (i, value) in coord.ordinates().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_number(out, value);
    }
}

/// Write `(item,item,...)`, with `empty` standing in for empty items.
fn write_list<T: GeometryTrait>(
    out: &mut String,
    items: &[T],
    write_item: impl Fn(&mut String, &T),
) {
    out.push('(');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if item.is_empty() {
            out.push_str("empty");
        } else {
            write_item(out, item);
        }
    }
    out.push(')');
}

fn write_point_body(out: &mut String, point: &Point) {
    out.push('(');
    if let Some(coord) = point.coord() {
        write_coord(out, coord);
    }
    out.push(')');
}

fn write_line_string_body(out: &mut String, line_string: &LineString) {
    out.push('(');
    for (i, coord) in line_string.coords().iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_coord(out, coord);
    }
    out.push(')');
}

fn write_polygon_body(out: &mut String, polygon: &Polygon) {
    write_list(out, polygon.rings(), write_line_string_body);
}

fn write_multi_point_body(out: &mut String, multi_point: &MultiPoint) {
    write_list(out, multi_point.points(), write_point_body);
}

fn write_multi_line_string_body(out: &mut String, multi_line_string: &MultiLineString) {
    write_list(
        out,
        multi_line_string.line_strings(),
        write_line_string_body,
    );
}

fn write_multi_polygon_body(out: &mut String, multi_polygon: &MultiPolygon) {
    write_list(out, multi_polygon.polygons(), write_polygon_body);
}

fn write_geometry_collection_body(out: &mut String, collection: &GeometryCollection) {
    out.push('(');
    for (i, member) in collection.geometries().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_geometry(out, member);
    }
    out.push(')');
}

/// Writes geometries as WKT, one per line.
pub struct WktWriter<W: Write> {
    stream: OutputStream<W>,
    written: usize,
}

impl<W: Write> WktWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            stream: OutputStream::new(writer),
            written: 0,
        }
    }

    pub fn write(&mut self, geometry: &Geometry) -> Result<()> {
        let mut line = to_wkt(geometry);
        line.push('\n');
        self.stream.get_mut()?.write_all(line.as_bytes())?;
        self.written += 1;
        trace!("wrote WKT {} geometry", geometry.geometry_type());
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn finish(self) -> Result<W> {
        debug!("finishing WKT writer after {} geometries", self.written);
        self.stream.finish()
    }
}

impl WktWriter<BufWriter<File>> {
    /// Create the file at `path`, truncating any existing content.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(create_file(path.as_ref())?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{linestring, multilinestring, multipoint, multipolygon, point, polygon};

    #[test]
    fn point() {
        assert_eq!(
            to_wkt(&point::p0(Dimension::XY).into()),
            "point (-10.1 15.5)"
        );
        assert_eq!(
            to_wkt(&point::p0(Dimension::XYM).into()),
            "point m (-10.1 15.5 1000.5)"
        );
        assert_eq!(to_wkt(&Point::empty(Dimension::XYZ).into()), "point z empty");
    }

    #[test]
    fn line_string() {
        assert_eq!(
            to_wkt(&linestring::ls0(Dimension::XYZ).into()),
            "linestring z (-10.1 15.5 100.5, 20.2 -25.5 200.5, 30.3 35.5 -300.5)"
        );
        assert_eq!(
            to_wkt(&LineString::empty(Dimension::XYZM).into()),
            "linestring zm empty"
        );
    }

    #[test]
    fn polygon() {
        assert_eq!(
            to_wkt(&polygon::p0().into()),
            "polygon ((-10.1 15.5, 20.2 -25.5, 30.3 35.5))"
        );
        let polygon = Polygon::try_new(
            Dimension::XY,
            vec![
                linestring::ls0(Dimension::XY),
                linestring::ls1(Dimension::XY),
            ],
        )
        .unwrap();
        assert_eq!(
            to_wkt(&polygon.into()),
            "polygon ((-10.1 15.5, 20.2 -25.5, 30.3 35.5),(-1.1 1.5, 2.2 -2.5, 3.3 3.5))"
        );
    }

    #[test]
    fn multi_geometries() {
        assert_eq!(
            to_wkt(&multipoint::mp0(Dimension::XY).into()),
            "multipoint ((-10.1 15.5),(20.2 -25.5))"
        );
        assert_eq!(
            to_wkt(&multilinestring::ml0(Dimension::XY).into()),
            "multilinestring ((-10.1 15.5, 20.2 -25.5, 30.3 35.5),(-10.1 15.5, 20.2 -25.5, 30.3 35.5))"
        );
        assert_eq!(
            to_wkt(&multipolygon::mp0(Dimension::XY).into()),
            "multipolygon (((-10.1 15.5, 20.2 -25.5, 30.3 35.5)),((-10.1 15.5, 20.2 -25.5, 30.3 35.5)))"
        );
    }

    #[test]
    fn empty_members() {
        let multi_point = MultiPoint::try_new(
            Dimension::XY,
            vec![point::p0(Dimension::XY), Point::empty(Dimension::XY)],
        )
        .unwrap();
        assert_eq!(
            to_wkt(&multi_point.into()),
            "multipoint ((-10.1 15.5),empty)"
        );
    }

    #[test]
    fn nested_collection() {
        let inner = GeometryCollection::try_new(
            Dimension::XY,
            vec![point::p0(Dimension::XY).into()],
        )
        .unwrap();
        let outer = GeometryCollection::try_new(
            Dimension::XY,
            vec![inner.into(), LineString::empty(Dimension::XY).into()],
        )
        .unwrap();
        assert_eq!(
            to_wkt(&outer.into()),
            "geometrycollection (geometrycollection (point (-10.1 15.5)),linestring empty)"
        );
    }

    #[test]
    fn writer_writes_one_geometry_per_line() {
        let mut writer = WktWriter::new(Vec::new());
        writer.write(&point::p0(Dimension::XY).into()).unwrap();
        writer
            .write(&GeometryCollection::empty(Dimension::XY).into())
            .unwrap();
        let out = writer.finish().unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "point (-10.1 15.5)\ngeometrycollection empty\n"
        );
    }
}

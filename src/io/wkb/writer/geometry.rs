use std::io::Write;

use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::wkb::writer::{
    geometry_collection_wkb_size, line_string_wkb_size, multi_line_string_wkb_size,
    multi_point_wkb_size, multi_polygon_wkb_size, point_wkb_size, polygon_wkb_size,
    write_geometry_collection_as_wkb, write_line_string_as_wkb, write_multi_line_string_as_wkb,
    write_multi_point_as_wkb, write_multi_polygon_as_wkb, write_point_as_wkb,
    write_polygon_as_wkb,
};

/// The byte length of the WKB encoding of any geometry
pub fn geometry_wkb_size(geom: &Geometry) -> usize {
    match geom {
        Geometry::Point(g) => point_wkb_size(g),
        Geometry::LineString(g) => line_string_wkb_size(g),
        Geometry::Polygon(g) => polygon_wkb_size(g),
        Geometry::MultiPoint(g) => multi_point_wkb_size(g),
        Geometry::MultiLineString(g) => multi_line_string_wkb_size(g),
        Geometry::MultiPolygon(g) => multi_polygon_wkb_size(g),
        Geometry::GeometryCollection(g) => geometry_collection_wkb_size(g),
    }
}

/// Write a geometry to a Writer encoded as WKB
pub fn write_geometry_as_wkb<W: Write + ?Sized>(writer: &mut W, geom: &Geometry) -> Result<()> {
    match geom {
        Geometry::Point(g) => write_point_as_wkb(writer, g),
        Geometry::LineString(g) => write_line_string_as_wkb(writer, g),
        Geometry::Polygon(g) => write_polygon_as_wkb(writer, g),
        Geometry::MultiPoint(g) => write_multi_point_as_wkb(writer, g),
        Geometry::MultiLineString(g) => write_multi_line_string_as_wkb(writer, g),
        Geometry::MultiPolygon(g) => write_multi_polygon_as_wkb(writer, g),
        Geometry::GeometryCollection(g) => write_geometry_collection_as_wkb(writer, g),
    }
}

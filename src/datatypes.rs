//! Geometry kinds, ordinate dimensions and the mapping of both onto WKT keywords and WKB type
//! codes.
//!
//! Both codecs go through the functions in this module so that the text and binary encodings
//! always agree on what a tag means.

use std::fmt::Display;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WkxError};

/// The ordinate profile of a coordinate or geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimension {
    /// Two-dimensional.
    #[default]
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Build the dimension from the presence of the optional ordinates.
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }

    /// Returns the number of ordinates per coordinate.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    /// The ISO addend to a base WKB type code.
    pub fn wkb_offset(&self) -> u32 {
        match self {
            Dimension::XY => 0,
            Dimension::XYZ => 1000,
            Dimension::XYM => 2000,
            Dimension::XYZM => 3000,
        }
    }

    pub fn from_wkb_offset(offset: u32) -> Option<Self> {
        match offset {
            0 => Some(Dimension::XY),
            1000 => Some(Dimension::XYZ),
            2000 => Some(Dimension::XYM),
            3000 => Some(Dimension::XYZM),
            _ => None,
        }
    }

    /// The WKT dimension keyword, `None` for plain 2D.
    pub fn wkt_tag(&self) -> Option<&'static str> {
        match self {
            Dimension::XY => None,
            Dimension::XYZ => Some("z"),
            Dimension::XYM => Some("m"),
            Dimension::XYZM => Some("zm"),
        }
    }

    /// Case-insensitive lookup of a WKT dimension keyword.
    pub fn from_wkt_tag(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("z") {
            Some(Dimension::XYZ)
        } else if tag.eq_ignore_ascii_case("m") {
            Some(Dimension::XYM)
        } else if tag.eq_ignore_ascii_case("zm") {
            Some(Dimension::XYZM)
        } else {
            None
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

/// The base geometry kinds, numbered as their 2D WKB type codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum GeometryType {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl GeometryType {
    pub fn wkt_keyword(&self) -> &'static str {
        match self {
            GeometryType::Point => "point",
            GeometryType::LineString => "linestring",
            GeometryType::Polygon => "polygon",
            GeometryType::MultiPoint => "multipoint",
            GeometryType::MultiLineString => "multilinestring",
            GeometryType::MultiPolygon => "multipolygon",
            GeometryType::GeometryCollection => "geometrycollection",
        }
    }

    /// Case-insensitive lookup of a WKT geometry keyword.
    pub fn from_wkt_keyword(word: &str) -> Option<Self> {
        use GeometryType::*;
        [
            Point,
            LineString,
            Polygon,
            MultiPoint,
            MultiLineString,
            MultiPolygon,
            GeometryCollection,
        ]
        .into_iter()
        .find(|t| t.wkt_keyword().eq_ignore_ascii_case(word))
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wkt_keyword())
    }
}

/// The full WKB type code of a geometry kind with the given dimension.
pub fn wkb_type_code(geometry_type: GeometryType, dim: Dimension) -> u32 {
    u32::from(geometry_type) + dim.wkb_offset()
}

/// Decompose a WKB type code into its base type and dimension.
pub fn split_wkb_type_code(code: u32) -> Result<(GeometryType, Dimension)> {
    let dim = Dimension::from_wkb_offset(code - code % 1000).ok_or_else(|| {
        WkxError::WkbFormat(format!("Unsupported dimension offset in type code {code}"))
    })?;
    let geometry_type = GeometryType::try_from_primitive(code % 1000)
        .map_err(|_| WkxError::WkbFormat(format!("Unknown geometry type code {code}")))?;
    Ok((geometry_type, dim))
}

//! The owned geometry model shared by every reader and writer in this crate.
//!
//! Composite geometries own their children by value. Every geometry records its [Dimension], so
//! the ordinate profile of empty geometries survives encoding and decoding.

pub use coord::Coord;
pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
pub use scalar::Geometry;

mod coord;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;
mod scalar;

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{Result, WkxError};

/// Accessors shared by all geometry kinds.
pub trait GeometryTrait {
    /// The ordinate profile of every coordinate in this geometry.
    fn dim(&self) -> Dimension;

    fn geometry_type(&self) -> GeometryType;

    /// `true` when the geometry has no coordinates, rings or members.
    fn is_empty(&self) -> bool;

    /// `true` when coordinates carry a Z ordinate.
    fn is_3d(&self) -> bool {
        self.dim().has_z()
    }

    /// `true` when coordinates carry an M ordinate.
    fn is_measured(&self) -> bool {
        self.dim().has_m()
    }
}

/// Check that every non-empty child has the expected dimension.
///
/// Empty children have no ordinates, so they are compatible with any dimension.
pub(crate) fn check_children<'a, G: GeometryTrait + 'a>(
    dim: Dimension,
    children: impl IntoIterator<Item = &'a G>,
) -> Result<()> {
    for child in children {
        if !child.is_empty() && child.dim() != dim {
            return Err(WkxError::DimensionMismatch {
                expected: dim,
                found: child.dim(),
            });
        }
    }
    Ok(())
}

/// The dimension of the first non-empty child, defaulting to [Dimension::XY].
pub(crate) fn infer_dim<'a, G: GeometryTrait + 'a>(
    children: impl IntoIterator<Item = &'a G>,
) -> Dimension {
    children
        .into_iter()
        .find(|child| !child.is_empty())
        .map(|child| child.dim())
        .unwrap_or_default()
}

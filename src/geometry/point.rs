use crate::datatypes::{Dimension, GeometryType};
use crate::geometry::{Coord, GeometryTrait};

/// A single position, or an empty point.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coord: Option<Coord>,
    dim: Dimension,
}

impl Point {
    pub fn new(coord: Coord) -> Self {
        Self {
            dim: coord.dim(),
            coord: Some(coord),
        }
    }

    /// An empty point that keeps the given ordinate profile.
    pub fn empty(dim: Dimension) -> Self {
        Self { coord: None, dim }
    }

    pub fn coord(&self) -> Option<&Coord> {
        self.coord.as_ref()
    }
}

impl GeometryTrait for Point {
    fn dim(&self) -> Dimension {
        self.dim
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }

    fn is_empty(&self) -> bool {
        self.coord.is_none()
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_point_keeps_dimension() {
        let point = Point::empty(Dimension::XYM);
        assert!(point.is_empty());
        assert!(point.is_measured());
        assert!(!point.is_3d());
        assert!(point.coord().is_none());
    }

    #[test]
    fn dimension_follows_coord() {
        let point = Point::new(Coord::new_z(1., 2., 3.));
        assert!(!point.is_empty());
        assert!(point.is_3d());
        assert!(!point.is_measured());
    }
}

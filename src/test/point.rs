use crate::datatypes::Dimension;
use crate::geometry::Point;
use crate::test::coord::{c0, c1};

pub(crate) fn p0(dim: Dimension) -> Point {
    Point::new(c0(dim))
}

pub(crate) fn p1(dim: Dimension) -> Point {
    Point::new(c1(dim))
}

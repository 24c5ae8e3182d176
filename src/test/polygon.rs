use crate::datatypes::Dimension;
use crate::geometry::Polygon;
use crate::test::linestring::{ls0, ls1};

/// Exterior ring only, 2D
pub(crate) fn p0() -> Polygon {
    p_ext(Dimension::XY)
}

pub(crate) fn p_ext(dim: Dimension) -> Polygon {
    Polygon::try_new(dim, vec![ls0(dim)]).unwrap()
}

/// Exterior ring plus two identical holes
pub(crate) fn p_holes(dim: Dimension) -> Polygon {
    Polygon::try_new(dim, vec![ls0(dim), ls1(dim), ls1(dim)]).unwrap()
}

pub(crate) fn p_holes_zm() -> Polygon {
    p_holes(Dimension::XYZM)
}

use crate::datatypes::Dimension;
use crate::geometry::Coord;

const C0: [f64; 4] = [-10.1, 15.5, 100.5, 1000.5];
const C1: [f64; 4] = [20.2, -25.5, 200.5, 2000.5];
const C2: [f64; 4] = [30.3, 35.5, -300.5, -3000.5];

const H0: [f64; 4] = [-1.1, 1.5, 10.5, 100.5];
const H1: [f64; 4] = [2.2, -2.5, 20.5, 200.5];
const H2: [f64; 4] = [3.3, 3.5, -30.5, -300.5];

fn coord(dim: Dimension, [x, y, z, m]: [f64; 4]) -> Coord {
    match dim {
        Dimension::XY => Coord::new(x, y),
        Dimension::XYZ => Coord::new_z(x, y, z),
        Dimension::XYM => Coord::new_m(x, y, m),
        Dimension::XYZM => Coord::new_zm(x, y, z, m),
    }
}

pub(crate) fn c0(dim: Dimension) -> Coord {
    coord(dim, C0)
}

pub(crate) fn c1(dim: Dimension) -> Coord {
    coord(dim, C1)
}

pub(crate) fn c2(dim: Dimension) -> Coord {
    coord(dim, C2)
}

/// The three coordinates of the exterior ring used across tests
pub(crate) fn exterior(dim: Dimension) -> Vec<Coord> {
    vec![c0(dim), c1(dim), c2(dim)]
}

/// The three coordinates of the hole used across tests
pub(crate) fn hole(dim: Dimension) -> Vec<Coord> {
    vec![coord(dim, H0), coord(dim, H1), coord(dim, H2)]
}

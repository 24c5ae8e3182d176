use crate::datatypes::Dimension;

/// A single position with optional elevation (Z) and measure (M) ordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    pub fn new_z(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    pub fn new_m(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: Some(m),
        }
    }

    pub fn new_zm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    /// Build a coordinate from ordinates in X, Y, [Z], [M] order.
    ///
    /// `ordinates` must hold exactly `dim.size()` values.
    pub(crate) fn from_ordinates(dim: Dimension, ordinates: &[f64]) -> Self {
        debug_assert_eq!(ordinates.len(), dim.size());
        let (x, y) = (ordinates[0], ordinates[1]);
        match dim {
            Dimension::XY => Self::new(x, y),
            Dimension::XYZ => Self::new_z(x, y, ordinates[2]),
            Dimension::XYM => Self::new_m(x, y, ordinates[2]),
            Dimension::XYZM => Self::new_zm(x, y, ordinates[2], ordinates[3]),
        }
    }

    pub fn dim(&self) -> Dimension {
        Dimension::from_flags(self.z.is_some(), self.m.is_some())
    }

    /// The ordinates in X, Y, [Z], [M] order.
    pub fn ordinates(&self) -> impl Iterator<Item = f64> {
        [Some(self.x), Some(self.y), self.z, self.m]
            .into_iter()
            .flatten()
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

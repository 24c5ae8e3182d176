use crate::datatypes::{Dimension, GeometryType};
use crate::error::{Result, WkxError};
use crate::geometry::{Coord, GeometryTrait};

/// An ordered sequence of coordinates. Also used for polygon rings.
///
/// No minimum length is enforced; validity checks are outside the scope of this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    coords: Vec<Coord>,
    dim: Dimension,
}

impl LineString {
    /// Create a LineString, checking that every coordinate has the ordinate profile `dim`.
    pub fn try_new(dim: Dimension, coords: Vec<Coord>) -> Result<Self> {
        if let Some(coord) = coords.iter().find(|coord| coord.dim() != dim) {
            return Err(WkxError::DimensionMismatch {
                expected: dim,
                found: coord.dim(),
            });
        }
        Ok(Self { coords, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            coords: Vec::new(),
            dim,
        }
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn num_coords(&self) -> usize {
        self.coords.len()
    }

    pub fn into_coords(self) -> Vec<Coord> {
        self.coords
    }
}

impl GeometryTrait for LineString {
    fn dim(&self) -> Dimension {
        self.dim
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::LineString
    }

    fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

impl TryFrom<Vec<Coord>> for LineString {
    type Error = WkxError;

    /// The dimension is taken from the first coordinate, [Dimension::XY] if there is none.
    fn try_from(value: Vec<Coord>) -> Result<Self> {
        let dim = value.first().map(Coord::dim).unwrap_or_default();
        Self::try_new(dim, value)
    }
}

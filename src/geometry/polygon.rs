use crate::datatypes::{Dimension, GeometryType};
use crate::error::{Result, WkxError};
use crate::geometry::{check_children, infer_dim, GeometryTrait, LineString};

/// A polygon made of an exterior ring followed by zero or more interior rings (holes).
///
/// An empty polygon has no rings at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<LineString>,
    dim: Dimension,
}

impl Polygon {
    pub fn try_new(dim: Dimension, rings: Vec<LineString>) -> Result<Self> {
        check_children(dim, &rings)?;
        Ok(Self { rings, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            rings: Vec::new(),
            dim,
        }
    }

    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or_default()
    }

    pub fn num_interiors(&self) -> usize {
        self.rings.len().saturating_sub(1)
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }
}

impl GeometryTrait for Polygon {
    fn dim(&self) -> Dimension {
        self.dim
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::Polygon
    }

    fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

impl TryFrom<Vec<LineString>> for Polygon {
    type Error = WkxError;

    fn try_from(value: Vec<LineString>) -> Result<Self> {
        let dim = infer_dim(&value);
        Self::try_new(dim, value)
    }
}

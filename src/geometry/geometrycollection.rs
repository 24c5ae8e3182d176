use crate::datatypes::{Dimension, GeometryType};
use crate::error::{Result, WkxError};
use crate::geometry::{check_children, infer_dim, Geometry, GeometryTrait};

/// A heterogeneous, ordered collection of geometries. Members may themselves be collections.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    dim: Dimension,
}

impl GeometryCollection {
    pub fn try_new(dim: Dimension, geometries: Vec<Geometry>) -> Result<Self> {
        check_children(dim, &geometries)?;
        Ok(Self { geometries, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            geometries: Vec::new(),
            dim,
        }
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn into_geometries(self) -> Vec<Geometry> {
        self.geometries
    }
}

impl GeometryTrait for GeometryCollection {
    fn dim(&self) -> Dimension {
        self.dim
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::GeometryCollection
    }

    fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}

impl TryFrom<Vec<Geometry>> for GeometryCollection {
    type Error = WkxError;

    fn try_from(value: Vec<Geometry>) -> Result<Self> {
        let dim = infer_dim(&value);
        Self::try_new(dim, value)
    }
}

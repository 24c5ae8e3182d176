use crate::datatypes::{Dimension, GeometryType};
use crate::error::{Result, WkxError};
use crate::geometry::{check_children, infer_dim, GeometryTrait, Polygon};

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    dim: Dimension,
}

impl MultiPolygon {
    pub fn try_new(dim: Dimension, polygons: Vec<Polygon>) -> Result<Self> {
        check_children(dim, &polygons)?;
        Ok(Self { polygons, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            polygons: Vec::new(),
            dim,
        }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }
}

impl GeometryTrait for MultiPolygon {
    fn dim(&self) -> Dimension {
        self.dim
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPolygon
    }

    fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

impl TryFrom<Vec<Polygon>> for MultiPolygon {
    type Error = WkxError;

    fn try_from(value: Vec<Polygon>) -> Result<Self> {
        let dim = infer_dim(&value);
        Self::try_new(dim, value)
    }
}

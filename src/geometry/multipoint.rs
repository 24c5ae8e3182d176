use crate::datatypes::{Dimension, GeometryType};
use crate::error::{Result, WkxError};
use crate::geometry::{check_children, infer_dim, GeometryTrait, Point};

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    points: Vec<Point>,
    dim: Dimension,
}

impl MultiPoint {
    pub fn try_new(dim: Dimension, points: Vec<Point>) -> Result<Self> {
        check_children(dim, &points)?;
        Ok(Self { points, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            points: Vec::new(),
            dim,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }
}

impl GeometryTrait for MultiPoint {
    fn dim(&self) -> Dimension {
        self.dim
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPoint
    }

    fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl TryFrom<Vec<Point>> for MultiPoint {
    type Error = WkxError;

    fn try_from(value: Vec<Point>) -> Result<Self> {
        let dim = infer_dim(&value);
        Self::try_new(dim, value)
    }
}

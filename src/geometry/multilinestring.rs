use crate::datatypes::{Dimension, GeometryType};
use crate::error::{Result, WkxError};
use crate::geometry::{check_children, infer_dim, GeometryTrait, LineString};

#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
    dim: Dimension,
}

impl MultiLineString {
    pub fn try_new(dim: Dimension, line_strings: Vec<LineString>) -> Result<Self> {
        check_children(dim, &line_strings)?;
        Ok(Self { line_strings, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            line_strings: Vec::new(),
            dim,
        }
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }
}

impl GeometryTrait for MultiLineString {
    fn dim(&self) -> Dimension {
        self.dim
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiLineString
    }

    fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }
}

impl TryFrom<Vec<LineString>> for MultiLineString {
    type Error = WkxError;

    fn try_from(value: Vec<LineString>) -> Result<Self> {
        let dim = infer_dim(&value);
        Self::try_new(dim, value)
    }
}

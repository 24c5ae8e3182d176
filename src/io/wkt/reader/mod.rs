//! Parse Well-Known Text into [`Geometry`] values.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::trace;

use crate::error::Result;
use crate::geometry::{Geometry, GeometryTrait};
use crate::io::stream::open_file;
use crate::io::wkt::reader::lexer::{tokenize, Token};
use crate::io::wkt::reader::parser::Parser;

mod lexer;
mod parser;

/// Parse a single geometry from WKT text.
///
/// The whole input must be consumed: anything after the geometry is an error.
///
/// ```
/// use geo_wkx::geometry::GeometryTrait;
/// use geo_wkx::io::wkt::parse_wkt;
///
/// let geom = parse_wkt("LINESTRING Z (1 2 3, 4 5 6)").unwrap();
/// assert!(geom.is_3d());
/// assert!(!geom.is_measured());
/// ```
pub fn parse_wkt(input: &str) -> Result<Geometry> {
    let tokens = tokenize(input)?;
    let mut parser = Parser::new(input, &tokens, 0);
    let geometry = parser.parse_geometry()?;
    parser.expect_end()?;
    Ok(geometry)
}

/// Reads a WKT document holding any number of whitespace-separated geometries.
///
/// The document is loaded and tokenized on the first call to [`WktReader::read`]; geometries
/// are then parsed one at a time.
pub struct WktReader<R: Read> {
    source: Option<R>,
    input: String,
    tokens: Vec<Token>,
    index: usize,
    failed: bool,
}

impl<R: Read> WktReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source: Some(source),
            input: String::new(),
            tokens: Vec::new(),
            index: 0,
            failed: false,
        }
    }

    /// The next geometry of the document, or `None` once every geometry has been read.
    pub fn read(&mut self) -> Result<Option<Geometry>> {
        if let Some(mut source) = self.source.take() {
            source.read_to_string(&mut self.input)?;
            self.tokens = tokenize(&self.input)?;
        }

        let mut parser = Parser::new(&self.input, &self.tokens, self.index);
        if parser.is_finished() {
            return Ok(None);
        }
        let geometry = parser.parse_geometry()?;
        self.index = parser.index();
        trace!("read WKT {} geometry", geometry.geometry_type());
        Ok(Some(geometry))
    }
}

impl WktReader<BufReader<File>> {
    /// Open the WKT file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(open_file(path.as_ref())?))
    }
}

impl<R: Read> Iterator for WktReader<R> {
    type Item = Result<Geometry>;

    /// Yields every geometry in turn. Iteration stops after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.read().transpose();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

//! Decode ISO WKB in either byte order.

mod geometry;

pub(crate) use geometry::{read_geometry, read_geometry_after_marker};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::trace;

use crate::error::Result;
use crate::geometry::{Geometry, GeometryTrait};
use crate::io::stream::open_file;
use crate::io::wkb::common::ByteReader;

/// Reads consecutive WKB records from a stream.
pub struct WkbReader<R: Read> {
    reader: ByteReader<R>,
    failed: bool,
}

impl<R: Read> WkbReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: ByteReader::new(reader),
            failed: false,
        }
    }

    /// The next geometry, or `None` if the input ends between records.
    ///
    /// Input that ends inside a record is a [`Truncated`](crate::error::WkxError::Truncated)
    /// error.
    pub fn read(&mut self) -> Result<Option<Geometry>> {
        let Some(marker) = self.reader.read_marker_or_eof()? else {
            return Ok(None);
        };
        let geometry = read_geometry_after_marker(&mut self.reader, marker, 0)?;
        trace!("read WKB {} geometry", geometry.geometry_type());
        Ok(Some(geometry))
    }
}

impl WkbReader<BufReader<File>> {
    /// Open the WKB file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(open_file(path.as_ref())?))
    }
}

impl<R: Read> Iterator for WkbReader<R> {
    type Item = Result<Geometry>;

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

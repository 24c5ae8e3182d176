//! Encode geometries as ISO WKB.

mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use geometry::{geometry_wkb_size, write_geometry_as_wkb};
pub use geometrycollection::{geometry_collection_wkb_size, write_geometry_collection_as_wkb};
pub use linestring::{line_string_wkb_size, write_line_string_as_wkb};
pub use multilinestring::{multi_line_string_wkb_size, write_multi_line_string_as_wkb};
pub use multipoint::{multi_point_wkb_size, write_multi_point_as_wkb};
pub use multipolygon::{multi_polygon_wkb_size, write_multi_polygon_as_wkb};
pub use point::{point_wkb_size, write_point_as_wkb};
pub use polygon::{polygon_wkb_size, write_polygon_as_wkb};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use log::{debug, trace};

use crate::error::{Result, WkxError};
use crate::geometry::{Geometry, GeometryTrait};
use crate::io::settings::{Encoding, WkbWriterSettings};
use crate::io::stream::{create_file, OutputStream};

/// Writes a sequence of geometries as consecutive WKB records.
///
/// The writer keeps its [`WkbWriterSettings`] for its whole lifetime, which makes them read-only
/// (see [`SettingsHandle`](crate::io::settings::SettingsHandle)).
#[derive(Debug)]
pub struct WkbWriter<W: Write> {
    stream: OutputStream<W>,
    settings: Arc<WkbWriterSettings>,
    written: usize,
}

impl<W: Write> WkbWriter<W> {
    /// Wrap an output stream.
    ///
    /// Fails with [`WkxError::NotSupported`] for any encoding but little-endian. No bytes are
    /// written to `writer` in that case.
    pub fn new(writer: W, settings: Arc<WkbWriterSettings>) -> Result<Self> {
        check_settings(&settings)?;
        Ok(Self {
            stream: OutputStream::new(writer),
            settings,
            written: 0,
        })
    }

    /// Append one geometry record.
    pub fn write(&mut self, geometry: &Geometry) -> Result<()> {
        write_geometry_as_wkb(self.stream.get_mut()?, geometry)?;
        self.written += 1;
        trace!("wrote WKB {} geometry", geometry.geometry_type());
        Ok(())
    }

    /// The settings this writer was created with.
    pub fn settings(&self) -> &Arc<WkbWriterSettings> {
        &self.settings
    }

    /// Flush and return the underlying writer.
    pub fn finish(self) -> Result<W> {
        debug!("finishing WKB writer after {} geometries", self.written);
        self.stream.finish()
    }
}

impl WkbWriter<BufWriter<File>> {
    /// Create the file at `path`, truncating any existing content.
    ///
    /// The settings are checked before the file is touched.
    pub fn create(path: impl AsRef<Path>, settings: Arc<WkbWriterSettings>) -> Result<Self> {
        check_settings(&settings)?;
        Self::new(create_file(path.as_ref())?, settings)
    }
}

fn check_settings(settings: &WkbWriterSettings) -> Result<()> {
    match settings.encoding() {
        Encoding::LittleEndian => Ok(()),
        Encoding::BigEndian => Err(WkxError::NotSupported(
            "BigEndian encoding is not supported by the WKB writer".to_string(),
        )),
    }
}

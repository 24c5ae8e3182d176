use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, warn};

use crate::error::{Result, WkxError};

/// A destination owned by a writer for its whole lifetime.
///
/// The stream is flushed exactly once: by [`OutputStream::finish`], or on drop if the writer
/// is dropped without finishing.
#[derive(Debug)]
pub(crate) struct OutputStream<W: Write>(Option<W>);

impl<W: Write> OutputStream<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self(Some(inner))
    }

    pub(crate) fn get_mut(&mut self) -> Result<&mut W> {
        self.0
            .as_mut()
            .ok_or(WkxError::InvalidState("Closed stream".to_string()))
    }

    /// Flush and hand back the underlying stream.
    pub(crate) fn finish(mut self) -> Result<W> {
        let mut inner = self
            .0
            .take()
            .ok_or(WkxError::InvalidState("Closed stream".to_string()))?;
        inner.flush()?;
        Ok(inner)
    }
}

impl<W: Write> Drop for OutputStream<W> {
    fn drop(&mut self) {
        if let Some(mut inner) = self.0.take() {
            if let Err(err) = inner.flush() {
                warn!("failed to flush output stream on drop: {err}");
            }
        }
    }
}

fn check_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(WkxError::InvalidArgument("path must not be empty".to_string()));
    }
    Ok(())
}

/// Create (or truncate) the file at `path` for writing.
pub(crate) fn create_file(path: &Path) -> Result<BufWriter<File>> {
    check_path(path)?;
    debug!("creating output file {}", path.display());
    Ok(BufWriter::new(File::create(path)?))
}

pub(crate) fn open_file(path: &Path) -> Result<BufReader<File>> {
    check_path(path)?;
    debug!("opening input file {}", path.display());
    Ok(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(
            create_file(Path::new("")),
            Err(WkxError::InvalidArgument(_))
        ));
        assert!(matches!(
            open_file(Path::new("")),
            Err(WkxError::InvalidArgument(_))
        ));
    }

    #[test]
    fn finish_returns_inner() {
        let mut stream = OutputStream::new(Vec::new());
        stream.get_mut().unwrap().write_all(b"abc").unwrap();
        assert_eq!(stream.finish().unwrap(), b"abc".to_vec());
    }
}

use std::io::{ErrorKind, Read, Write};

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::datatypes::{split_wkb_type_code, wkb_type_code, Dimension, GeometryType};
use crate::error::{Result, WkxError};
use crate::geometry::Coord;
use crate::io::settings::Encoding;

/// Byte order marker plus type code
pub(crate) const HEADER_BYTES: usize = 1 + 4;

/// Upper bound on the capacity reserved from a count read off the wire.
pub(crate) const MAX_PREALLOC: usize = 4096;

/// Write the record header in little-endian byte order.
pub(crate) fn write_header<W: Write + ?Sized>(
    writer: &mut W,
    geometry_type: GeometryType,
    dim: Dimension,
) -> Result<()> {
    writer.write_u8(Encoding::LittleEndian.into())?;
    writer.write_u32::<LittleEndian>(wkb_type_code(geometry_type, dim))?;
    Ok(())
}

/// Write a coordinate, member or ring count, which must fit in 4 bytes.
pub(crate) fn write_count<W: Write + ?Sized>(writer: &mut W, count: usize) -> Result<()> {
    let count = u32::try_from(count).map_err(|_| WkxError::Overflow)?;
    writer.write_u32::<LittleEndian>(count)?;
    Ok(())
}

pub(crate) fn write_coord<W: Write + ?Sized>(writer: &mut W, coord: &Coord) -> Result<()> {
    for value in coord.ordinates() {
        writer.write_f64::<LittleEndian>(value)?;
    }
    Ok(())
}

/// Whether `bytes` starts with a record header in the byte order `order`.
pub(crate) fn is_header(bytes: &[u8], order: Encoding) -> bool {
    if bytes.len() < HEADER_BYTES || bytes[0] != u8::from(order) {
        return false;
    }
    let code = match order {
        Encoding::LittleEndian => LittleEndian::read_u32(&bytes[1..HEADER_BYTES]),
        Encoding::BigEndian => BigEndian::read_u32(&bytes[1..HEADER_BYTES]),
    };
    split_wkb_type_code(code).is_ok()
}

/// A reader that can look at upcoming bytes without consuming them.
struct Lookahead<R> {
    inner: R,
    buffered: Vec<u8>,
}

impl<R: Read> Lookahead<R> {
    /// Up to `n` upcoming bytes. Fewer are returned only at the end of the input.
    fn peek(&mut self, n: usize) -> std::io::Result<&[u8]> {
        let mut chunk = [0u8; 16];
        while self.buffered.len() < n {
            let want = (n - self.buffered.len()).min(chunk.len());
            match self.inner.read(&mut chunk[..want]) {
                Ok(0) => break,
                Ok(read) => self.buffered.extend_from_slice(&chunk[..read]),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(&self.buffered[..n.min(self.buffered.len())])
    }
}

impl<R: Read> Read for Lookahead<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.buffered.is_empty() {
            return self.inner.read(buf);
        }
        let n = buf.len().min(self.buffered.len());
        buf[..n].copy_from_slice(&self.buffered[..n]);
        self.buffered.drain(..n);
        Ok(n)
    }
}

/// Reads WKB fields while tracking the offset, so that running out of input is reported as
/// [`WkxError::Truncated`] at the field that could not be read.
pub(crate) struct ByteReader<R> {
    inner: Lookahead<R>,
    offset: u64,
}

impl<R: Read> ByteReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner: Lookahead {
                inner,
                buffered: Vec::new(),
            },
            offset: 0,
        }
    }

    /// Up to `n` upcoming bytes, left unconsumed.
    pub(crate) fn peek(&mut self, n: usize) -> Result<&[u8]> {
        Ok(self.inner.peek(n)?)
    }

    /// Number of bytes consumed so far.
    pub(crate) fn offset(&self) -> u64 {
        self.offset
    }

    /// Read a byte order marker, or `None` if the input ends cleanly before it.
    pub(crate) fn read_marker_or_eof(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.offset += 1;
                    return Ok(Some(byte[0]));
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8> {
        let value = self.inner.read_u8().map_err(|err| self.truncated(err))?;
        self.offset += 1;
        Ok(value)
    }

    pub(crate) fn read_u32(&mut self, order: Encoding) -> Result<u32> {
        let value = match order {
            Encoding::LittleEndian => self.inner.read_u32::<LittleEndian>(),
            Encoding::BigEndian => self.inner.read_u32::<BigEndian>(),
        }
        .map_err(|err| self.truncated(err))?;
        self.offset += 4;
        Ok(value)
    }

    /// Read a count and convert it to a length.
    pub(crate) fn read_count(&mut self, order: Encoding) -> Result<usize> {
        usize::try_from(self.read_u32(order)?).map_err(|_| WkxError::Overflow)
    }

    pub(crate) fn read_f64(&mut self, order: Encoding) -> Result<f64> {
        let value = match order {
            Encoding::LittleEndian => self.inner.read_f64::<LittleEndian>(),
            Encoding::BigEndian => self.inner.read_f64::<BigEndian>(),
        }
        .map_err(|err| self.truncated(err))?;
        self.offset += 8;
        Ok(value)
    }

    pub(crate) fn read_coord(&mut self, order: Encoding, dim: Dimension) -> Result<Coord> {
        let mut ordinates = [0f64; 4];
        for ordinate in ordinates.iter_mut().take(dim.size()) {
            *ordinate = self.read_f64(order)?;
        }
        Ok(Coord::from_ordinates(dim, &ordinates[..dim.size()]))
    }

    fn truncated(&self, err: std::io::Error) -> WkxError {
        if err.kind() == ErrorKind::UnexpectedEof {
            WkxError::Truncated {
                offset: self.offset,
            }
        } else {
            err.into()
        }
    }
}

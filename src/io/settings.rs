//! Settings objects consumed by the writers in this crate.
//!
//! Writers receive their settings as an [`Arc`] and keep a clone for their whole lifetime. While a
//! writer holds that clone the settings can no longer be changed: [`SettingsHandle::try_modify`]
//! only succeeds when the caller owns the sole reference.

use std::sync::Arc;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WkxError};

/// Byte order of binary output. The discriminant is the WKB byte order marker.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    TryFromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum Encoding {
    BigEndian = 0,
    #[default]
    LittleEndian = 1,
}

/// Settings for [`WkbWriter`](crate::io::wkb::WkbWriter).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WkbWriterSettings {
    encoding: Encoding,
}

impl WkbWriterSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = encoding;
    }
}

/// Settings for a GPX track/route writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpxWriterSettings {
    write_metadata: bool,
    generator_name: Option<String>,
}

impl Default for GpxWriterSettings {
    fn default() -> Self {
        Self {
            write_metadata: true,
            generator_name: None,
        }
    }
}

impl GpxWriterSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_write_metadata(mut self, write_metadata: bool) -> Self {
        self.write_metadata = write_metadata;
        self
    }

    pub fn with_generator_name(mut self, generator_name: impl Into<String>) -> Self {
        self.generator_name = Some(generator_name.into());
        self
    }

    /// Whether entity metadata is written.
    pub fn write_metadata(&self) -> bool {
        self.write_metadata
    }

    /// The name of the program recorded in the output file.
    pub fn generator_name(&self) -> Option<&str> {
        self.generator_name.as_deref()
    }

    pub fn set_write_metadata(&mut self, write_metadata: bool) {
        self.write_metadata = write_metadata;
    }

    pub fn set_generator_name(&mut self, generator_name: Option<String>) {
        self.generator_name = generator_name;
    }
}

/// Guarded mutation of settings that may be shared with a writer.
pub trait SettingsHandle<S> {
    /// Apply `f` to the settings, or fail with [`WkxError::InvalidState`] if they are bound to
    /// a writer. `property` names the property being changed in the error message.
    fn try_modify<F: FnOnce(&mut S)>(&mut self, property: &str, f: F) -> Result<()>;

    /// `true` while the settings are shared with a writer.
    fn is_read_only(&self) -> bool;
}

impl<S> SettingsHandle<S> for Arc<S> {
    fn try_modify<F: FnOnce(&mut S)>(&mut self, property: &str, f: F) -> Result<()> {
        let settings = Arc::get_mut(self).ok_or_else(|| {
            WkxError::InvalidState(format!(
                "Cannot change the '{property}' property - settings are read-only once bound to a writer."
            ))
        })?;
        f(settings);
        Ok(())
    }

    fn is_read_only(&self) -> bool {
        Arc::strong_count(self) > 1 || Arc::weak_count(self) > 0
    }
}

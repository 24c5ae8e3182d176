//! A geometry model with readers and writers for Well-Known Text (WKT) and ISO Well-Known
//! Binary (WKB).
//!
//! Every geometry tracks whether its coordinates carry Z and/or M ordinates, and both codecs
//! preserve that through a round trip, including for empty geometries.
//!
//! ```
//! use geo_wkx::io::wkb::{from_wkb, to_wkb};
//! use geo_wkx::io::wkt::{parse_wkt, to_wkt};
//!
//! let geometry = parse_wkt("LINESTRING ZM (-10.1 15.5 100.5 1000.5, 20.2 -25.5 200.5 2000.5)")?;
//! let decoded = from_wkb(&to_wkb(&geometry)?)?;
//! assert_eq!(decoded, geometry);
//! assert_eq!(
//!     to_wkt(&decoded),
//!     "linestring zm (-10.1 15.5 100.5 1000.5, 20.2 -25.5 200.5 2000.5)"
//! );
//! # Ok::<(), geo_wkx::error::WkxError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use geometry::{Geometry, GeometryTrait};

pub mod datatypes;
pub mod error;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;

//! # cdfview
//!
//! Project self-describing array containers (NetCDF) into JSON, or summarize station temperature
//! files.
//!
//! A [`Catalog`] wraps anything implementing [`container::Container`]: a NetCDF file (feature
//! `netcdf`) or an in-memory [`container::MemContainer`]. From the catalog the whole file can be
//! dumped:
//!
//! ```
//! use cdfview::prelude::*;
//!
//! let c = Catalog::new(
//!     MemContainer::new()
//!         .with_dimension("stations", 2)
//!         .with_variable(MemVariable::strings("stationname", &["stations"], &["A", "B"])),
//! );
//!
//! let json = cdfview::dump::to_string(&c, Style::Compact).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"dimensions":{"stations":2},"variables":{"stationname":{"values":["A","B"]}}}"#
//! );
//! ```
//!
//! or reduced to a station [report].

#[macro_use]
extern crate log;

pub mod catalog;
pub mod container;
pub mod dump;
pub mod error;
pub mod project;
pub mod report;
pub mod ser;

pub use catalog::Catalog;
pub use error::{Error, Result};

pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::container::{
        Container, Dimension, ElementType, MemAttribute, MemContainer, MemVariable, VariableMeta,
    };
    pub use crate::project::{ArrayPayload, AttrValue, Attribute};
    pub use crate::ser::{Node, Style};
}

//! The read-only capability surface of an array-storage container.
//!
//! Everything above this module (catalog, projectors, report) is generic over [`Container`], so
//! the same code runs against a NetCDF file ([`nc::NcContainer`], feature `netcdf`) or an
//! in-memory [`MemContainer`].
use std::fmt;

use crate::error::Result;

pub mod memory;
#[cfg(feature = "netcdf")]
pub mod nc;

pub use memory::{MemAttribute, MemContainer, MemVariable};

/// A named axis with a fixed length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    pub name: String,
    pub len: usize,
}

impl Dimension {
    pub fn new(name: impl Into<String>, len: usize) -> Dimension {
        Dimension {
            name: name.into(),
            len,
        }
    }
}

/// Declared element type of a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementType {
    /// Fixed-width characters (`NC_CHAR`).
    Text,
    Float32,
    Float64,
    /// Variable-length strings (`NC_STRING`).
    String,
    Other(String),
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Text => f.write_str("text"),
            ElementType::Float32 => f.write_str("float32"),
            ElementType::Float64 => f.write_str("float64"),
            ElementType::String => f.write_str("string"),
            ElementType::Other(t) => f.write_str(t),
        }
    }
}

/// Metadata of a single variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableMeta {
    /// Position in the container's variable enumeration.
    pub index: usize,
    pub name: String,
    pub element_type: ElementType,
    /// Referenced dimensions in declared axis order.
    pub dimensions: Vec<Dimension>,
    pub attribute_count: usize,
}

impl VariableMeta {
    #[must_use]
    pub fn rank(&self) -> usize {
        self.dimensions.len()
    }

    /// Number of elements, `None` if the product of the dimension lengths overflows.
    #[must_use]
    pub fn element_count(&self) -> Option<usize> {
        self.dimensions
            .iter()
            .try_fold(1usize, |n, d| n.checked_mul(d.len))
    }
}

/// Declared type of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeType {
    /// Character text, read whole by [`Container::attribute_text`].
    Text,
    Float64,
    Float32,
    Other(String),
}

pub trait Container {
    /// Dimensions in declaration order.
    fn dimensions(&self) -> Result<Vec<Dimension>>;

    /// Variable at `index`, `None` once `index` is past the last variable.
    fn variable(&self, index: usize) -> Result<Option<VariableMeta>>;

    fn variable_by_name(&self, name: &str) -> Result<Option<VariableMeta>>;

    /// Attribute names of `var` in declaration order.
    fn attribute_names(&self, var: &VariableMeta) -> Result<Vec<String>>;

    fn attribute_type(&self, var: &VariableMeta, name: &str) -> Result<AttributeType>;

    fn attribute_text(&self, var: &VariableMeta, name: &str) -> Result<String>;

    fn attribute_f64(&self, var: &VariableMeta, name: &str) -> Result<f64>;

    fn attribute_f32(&self, var: &VariableMeta, name: &str) -> Result<f32>;

    /// All values of a floating point variable in native (row-major) order.
    fn read_f64(&self, var: &VariableMeta) -> Result<Vec<f64>>;

    /// All values of a string variable in native order.
    fn read_strings(&self, var: &VariableMeta) -> Result<Vec<String>>;

    /// Release the container. No further reads are possible after this.
    fn close(self) -> Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

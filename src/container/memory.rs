//! An in-memory container.
//!
//! ```
//! use cdfview::container::{MemAttribute, MemContainer, MemVariable};
//!
//! let c = MemContainer::new()
//!     .with_dimension("stations", 2)
//!     .with_variable(
//!         MemVariable::doubles("tn", &["stations"], vec![1.5, 2.0])
//!             .with_attribute("units", MemAttribute::Text("degC".into())),
//!     );
//! ```
use super::{AttributeType, Container, Dimension, ElementType, VariableMeta};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum MemAttribute {
    Text(String),
    Double(f64),
    Float(f32),
    /// An attribute of a type the projectors do not support, described by its type name.
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
enum MemData {
    Empty,
    Doubles(Vec<f64>),
    Strings(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemVariable {
    name: String,
    element_type: ElementType,
    dimensions: Vec<String>,
    attributes: Vec<(String, MemAttribute)>,
    data: MemData,
}

impl MemVariable {
    /// A variable with metadata but no payload.
    pub fn typed(name: impl Into<String>, element_type: ElementType, dimensions: &[&str]) -> Self {
        MemVariable {
            name: name.into(),
            element_type,
            dimensions: dimensions.iter().map(|d| d.to_string()).collect(),
            attributes: Vec::new(),
            data: MemData::Empty,
        }
    }

    /// A `float64` variable, `values` in row-major order.
    pub fn doubles(name: impl Into<String>, dimensions: &[&str], values: Vec<f64>) -> Self {
        MemVariable {
            data: MemData::Doubles(values),
            ..MemVariable::typed(name, ElementType::Float64, dimensions)
        }
    }

    pub fn strings<S>(name: impl Into<String>, dimensions: &[&str], values: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        MemVariable {
            data: MemData::Strings(values.iter().map(|s| s.as_ref().to_string()).collect()),
            ..MemVariable::typed(name, ElementType::String, dimensions)
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: MemAttribute) -> Self {
        self.attributes.push((name.into(), value));
        self
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemContainer {
    dimensions: Vec<Dimension>,
    variables: Vec<MemVariable>,
}

impl MemContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimension(mut self, name: impl Into<String>, len: usize) -> Self {
        self.dimensions.push(Dimension::new(name, len));
        self
    }

    pub fn with_variable(mut self, var: MemVariable) -> Self {
        self.variables.push(var);
        self
    }

    fn meta(&self, index: usize, var: &MemVariable) -> Result<VariableMeta> {
        let dimensions = var
            .dimensions
            .iter()
            .map(|name| {
                self.dimensions
                    .iter()
                    .find(|d| &d.name == name)
                    .cloned()
                    .ok_or_else(|| {
                        Error::metadata(
                            format!("dimensions of `{}`", var.name),
                            format!("unknown dimension `{name}`"),
                        )
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(VariableMeta {
            index,
            name: var.name.clone(),
            element_type: var.element_type.clone(),
            dimensions,
            attribute_count: var.attributes.len(),
        })
    }

    fn lookup(&self, var: &VariableMeta) -> Result<&MemVariable> {
        self.variables
            .get(var.index)
            .filter(|v| v.name == var.name)
            .ok_or_else(|| Error::metadata("variable lookup", format!("no variable `{}`", var.name)))
    }

    fn attribute(&self, var: &VariableMeta, name: &str) -> Result<&MemAttribute> {
        self.lookup(var)?
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
            .ok_or_else(|| {
                Error::metadata(
                    format!("attribute lookup on `{}`", var.name),
                    format!("no attribute `{name}`"),
                )
            })
    }

    fn mismatch(var: &VariableMeta, name: &str, wanted: &str) -> Error {
        Error::metadata(
            format!("reading attribute `{}:{name}`", var.name),
            format!("attribute is not {wanted}"),
        )
    }
}

impl Container for MemContainer {
    fn dimensions(&self) -> Result<Vec<Dimension>> {
        Ok(self.dimensions.clone())
    }

    fn variable(&self, index: usize) -> Result<Option<VariableMeta>> {
        self.variables
            .get(index)
            .map(|v| self.meta(index, v))
            .transpose()
    }

    fn variable_by_name(&self, name: &str) -> Result<Option<VariableMeta>> {
        self.variables
            .iter()
            .position(|v| v.name == name)
            .map(|i| self.meta(i, &self.variables[i]))
            .transpose()
    }

    fn attribute_names(&self, var: &VariableMeta) -> Result<Vec<String>> {
        Ok(self
            .lookup(var)?
            .attributes
            .iter()
            .map(|(n, _)| n.clone())
            .collect())
    }

    fn attribute_type(&self, var: &VariableMeta, name: &str) -> Result<AttributeType> {
        Ok(match self.attribute(var, name)? {
            MemAttribute::Text(_) => AttributeType::Text,
            MemAttribute::Double(_) => AttributeType::Float64,
            MemAttribute::Float(_) => AttributeType::Float32,
            MemAttribute::Other(t) => AttributeType::Other(t.clone()),
        })
    }

    fn attribute_text(&self, var: &VariableMeta, name: &str) -> Result<String> {
        match self.attribute(var, name)? {
            MemAttribute::Text(s) => Ok(s.clone()),
            _ => Err(Self::mismatch(var, name, "text")),
        }
    }

    fn attribute_f64(&self, var: &VariableMeta, name: &str) -> Result<f64> {
        match self.attribute(var, name)? {
            MemAttribute::Double(v) => Ok(*v),
            _ => Err(Self::mismatch(var, name, "a double")),
        }
    }

    fn attribute_f32(&self, var: &VariableMeta, name: &str) -> Result<f32> {
        match self.attribute(var, name)? {
            MemAttribute::Float(v) => Ok(*v),
            _ => Err(Self::mismatch(var, name, "a float")),
        }
    }

    fn read_f64(&self, var: &VariableMeta) -> Result<Vec<f64>> {
        match &self.lookup(var)?.data {
            MemData::Doubles(v) => Ok(v.clone()),
            _ => Err(Error::metadata(
                format!("reading `{}`", var.name),
                "variable holds no floating point data",
            )),
        }
    }

    fn read_strings(&self, var: &VariableMeta) -> Result<Vec<String>> {
        match &self.lookup(var)?.data {
            MemData::Strings(v) => Ok(v.clone()),
            _ => Err(Error::metadata(
                format!("reading `{}`", var.name),
                "variable holds no string data",
            )),
        }
    }
}

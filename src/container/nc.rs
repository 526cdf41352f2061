//! NetCDF backend using the `netcdf` crate.
use std::path::Path;

use netcdf::types::{FloatType, NcVariableType};
use netcdf::AttributeValue;

use super::{AttributeType, Container, Dimension, ElementType, VariableMeta};
use crate::error::{Error, Result};

/// An open NetCDF file. The underlying handle is closed when this is dropped.
pub struct NcContainer {
    file: netcdf::File,
}

impl NcContainer {
    pub fn open<P>(path: P) -> Result<NcContainer>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let file = netcdf::open(path).map_err(|e| Error::FileOpen {
            path: path.into(),
            reason: e.to_string(),
        })?;

        debug!("opened {}", path.display());

        Ok(NcContainer { file })
    }

    fn var(&self, var: &VariableMeta) -> Result<netcdf::Variable<'_>> {
        self.file.variable(&var.name).ok_or_else(|| {
            Error::metadata("variable lookup", format!("no variable `{}`", var.name))
        })
    }

    fn attribute_value(&self, var: &VariableMeta, name: &str) -> Result<AttributeValue> {
        let op = || format!("reading attribute `{}:{name}`", var.name);

        self.var(var)?
            .attribute(name)
            .ok_or_else(|| Error::metadata(op(), "no such attribute"))?
            .value()
            .map_err(|e| Error::metadata(op(), e))
    }
}

fn element_type(t: &NcVariableType) -> ElementType {
    match t {
        NcVariableType::Char => ElementType::Text,
        NcVariableType::Float(FloatType::F32) => ElementType::Float32,
        NcVariableType::Float(FloatType::F64) => ElementType::Float64,
        NcVariableType::String => ElementType::String,
        other => ElementType::Other(variant_name(other)),
    }
}

/// `Shorts([1, 2])` -> `shorts`.
fn variant_name<T: std::fmt::Debug>(v: &T) -> String {
    let s = format!("{v:?}");
    s.split('(').next().unwrap_or(&s).to_lowercase()
}

fn meta(index: usize, v: &netcdf::Variable) -> VariableMeta {
    VariableMeta {
        index,
        name: v.name(),
        element_type: element_type(&v.vartype()),
        dimensions: v
            .dimensions()
            .iter()
            .map(|d| Dimension::new(d.name(), d.len()))
            .collect(),
        attribute_count: v.attributes().count(),
    }
}

/// Row-major multi-index of the flat position `i`.
fn unravel(mut i: usize, shape: &[usize]) -> Vec<usize> {
    let mut idx = vec![0; shape.len()];
    for (k, len) in shape.iter().enumerate().rev() {
        idx[k] = i % len;
        i /= len;
    }
    idx
}

impl Container for NcContainer {
    fn dimensions(&self) -> Result<Vec<Dimension>> {
        Ok(self
            .file
            .dimensions()
            .map(|d| Dimension::new(d.name(), d.len()))
            .collect())
    }

    fn variable(&self, index: usize) -> Result<Option<VariableMeta>> {
        Ok(self.file.variables().nth(index).map(|v| meta(index, &v)))
    }

    fn variable_by_name(&self, name: &str) -> Result<Option<VariableMeta>> {
        Ok(self
            .file
            .variables()
            .enumerate()
            .find(|(_, v)| v.name() == name)
            .map(|(i, v)| meta(i, &v)))
    }

    fn attribute_names(&self, var: &VariableMeta) -> Result<Vec<String>> {
        Ok(self
            .var(var)?
            .attributes()
            .map(|a| a.name().to_string())
            .collect())
    }

    fn attribute_type(&self, var: &VariableMeta, name: &str) -> Result<AttributeType> {
        Ok(match self.attribute_value(var, name)? {
            AttributeValue::Str(_) => AttributeType::Text,
            AttributeValue::Double(_) => AttributeType::Float64,
            AttributeValue::Float(_) => AttributeType::Float32,
            other => AttributeType::Other(variant_name(&other)),
        })
    }

    fn attribute_text(&self, var: &VariableMeta, name: &str) -> Result<String> {
        match self.attribute_value(var, name)? {
            AttributeValue::Str(s) => Ok(s),
            _ => Err(Error::metadata(
                format!("reading attribute `{}:{name}`", var.name),
                "attribute is not text",
            )),
        }
    }

    fn attribute_f64(&self, var: &VariableMeta, name: &str) -> Result<f64> {
        match self.attribute_value(var, name)? {
            AttributeValue::Double(v) => Ok(v),
            _ => Err(Error::metadata(
                format!("reading attribute `{}:{name}`", var.name),
                "attribute is not a double",
            )),
        }
    }

    fn attribute_f32(&self, var: &VariableMeta, name: &str) -> Result<f32> {
        match self.attribute_value(var, name)? {
            AttributeValue::Float(v) => Ok(v),
            _ => Err(Error::metadata(
                format!("reading attribute `{}:{name}`", var.name),
                "attribute is not a float",
            )),
        }
    }

    fn read_f64(&self, var: &VariableMeta) -> Result<Vec<f64>> {
        self.var(var)?
            .get_values::<f64, _>(..)
            .map_err(|e| Error::metadata(format!("reading `{}`", var.name), e))
    }

    fn read_strings(&self, var: &VariableMeta) -> Result<Vec<String>> {
        let v = self.var(var)?;
        let shape: Vec<usize> = var.dimensions.iter().map(|d| d.len).collect();
        let count = var
            .element_count()
            .ok_or(Error::Allocation { count: usize::MAX })?;

        (0..count)
            .map(|i| {
                let idx = unravel(i, &shape);
                v.get_string(&idx[..])
                    .map_err(|e| Error::metadata(format!("reading `{}`", var.name), e))
            })
            .collect()
    }

    fn close(self) -> Result<()> {
        drop(self.file);
        debug!("closed container");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unravel_row_major() {
        assert_eq!(unravel(0, &[2, 3]), vec![0, 0]);
        assert_eq!(unravel(4, &[2, 3]), vec![1, 1]);
        assert_eq!(unravel(5, &[2, 3]), vec![1, 2]);
        assert_eq!(unravel(3, &[]), Vec::<usize>::new());
    }

    #[test]
    fn attribute_variant_names() {
        assert_eq!(variant_name(&AttributeValue::Shorts(vec![1, 2])), "shorts");
        assert_eq!(variant_name(&AttributeValue::Int(4)), "int");
    }

    #[test]
    fn open_missing_file() {
        let e = NcContainer::open("tests/data/does-not-exist.nc").err().unwrap();
        assert!(matches!(e, Error::FileOpen { .. }));
    }
}

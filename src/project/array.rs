use ndarray::{Array1, Array2};

use crate::container::{Container, ElementType, VariableMeta};
use crate::error::{Error, Result};
use crate::ser::Node;

/// The payload of a variable.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayPayload {
    /// Rank 1 `float64`.
    Vector(Array1<f64>),

    /// Rank 2 `float64` with shape `[len(d0), len(d1)]`, stored in native row-major order.
    ///
    /// Nested output runs over the second dimension on the outside and the first on the inside,
    /// i.e. one entry per column.
    Grid(Array2<f64>),

    /// Rank 1 strings.
    Strings(Vec<String>),
}

impl ArrayPayload {
    /// Render as a nested list.
    ///
    /// A grid with a single column is flattened to that column.
    pub fn to_node(&self) -> Result<Node> {
        match self {
            ArrayPayload::Vector(v) => numbers(v.iter().copied(), v.len()),
            ArrayPayload::Grid(g) if g.ncols() == 1 => numbers(g.column(0).iter().copied(), g.nrows()),
            ArrayPayload::Grid(g) => {
                let mut cols = alloc(g.ncols())?;
                for col in g.columns() {
                    cols.push(numbers(col.iter().copied(), col.len())?);
                }
                Ok(Node::List(cols))
            }
            ArrayPayload::Strings(s) => {
                let mut items = alloc(s.len())?;
                items.extend(s.iter().cloned().map(Node::Text));
                Ok(Node::List(items))
            }
        }
    }
}

/// An integer literal when `v` has no fractional part, a floating point literal otherwise.
#[must_use]
pub fn number(v: f64) -> Node {
    // 2^63, exactly representable.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if v.is_finite() && v.fract() == 0.0 && (-LIMIT..LIMIT).contains(&v) {
        Node::Int(v as i64)
    } else {
        Node::Double(v)
    }
}

fn numbers<I>(values: I, len: usize) -> Result<Node>
where
    I: Iterator<Item = f64>,
{
    let mut items = alloc(len)?;
    items.extend(values.map(number));
    Ok(Node::List(items))
}

fn alloc<T>(count: usize) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(count)
        .map_err(|_| Error::Allocation { count })?;
    Ok(v)
}

fn sized<T>(var: &VariableMeta, data: Vec<T>, count: usize) -> Result<Vec<T>> {
    if data.len() == count {
        Ok(data)
    } else {
        Err(Error::metadata(
            format!("reading `{}`", var.name),
            format!("expected {count} values, got {}", data.len()),
        ))
    }
}

/// Read the payload of a rank 1 or 2 `float64` variable or a rank 1 string variable.
///
/// Any other combination is an [`Error::Shape`].
pub fn read_array<C>(c: &C, var: &VariableMeta) -> Result<ArrayPayload>
where
    C: Container + ?Sized,
{
    let shape: Vec<usize> = var.dimensions.iter().map(|d| d.len).collect();

    let shape_error = || Error::Shape {
        variable: var.name.clone(),
        element_type: var.element_type.clone(),
        rank: shape.len(),
    };

    if !matches!(
        (&var.element_type, shape.len()),
        (ElementType::Float64, 1 | 2) | (ElementType::String, 1)
    ) {
        return Err(shape_error());
    }

    let count = var.element_count().ok_or(Error::Allocation { count: usize::MAX })?;

    debug!("reading {} ({}, shape {:?})", var.name, var.element_type, shape);

    match (&var.element_type, shape.as_slice()) {
        (ElementType::Float64, [_]) => {
            let data = sized(var, c.read_f64(var)?, count)?;
            Ok(ArrayPayload::Vector(Array1::from(data)))
        }
        (ElementType::Float64, &[d0, d1]) => {
            let data = sized(var, c.read_f64(var)?, count)?;
            let grid = Array2::from_shape_vec((d0, d1), data)
                .map_err(|e| Error::metadata(format!("reading `{}`", var.name), e))?;
            Ok(ArrayPayload::Grid(grid))
        }
        (ElementType::String, [_]) => Ok(ArrayPayload::Strings(sized(
            var,
            c.read_strings(var)?,
            count,
        )?)),
        _ => Err(shape_error()),
    }
}

//! Projection of a whole container into a JSON document:
//!
//! ```text
//! { "dimensions": { name: length, .. },
//!   "variables": { name: { attribute: value, .., "values": [..] }, .. } }
//! ```
//!
//! Keys follow enumeration order. Variables whose payload has no supported shape are listed with
//! their attributes only.
use std::io;

use crate::catalog::Catalog;
use crate::container::Container;
use crate::error::Result;
use crate::ser::{self, Node, Style};

pub fn project<C: Container>(catalog: &Catalog<C>) -> Result<Node> {
    let dimensions = catalog
        .dimensions()?
        .into_iter()
        .map(|d| (d.name, Node::Int(d.len as i64)))
        .collect();

    let mut variables = Vec::new();

    for var in catalog.variables()? {
        let mut entries: Vec<(String, Node)> = catalog
            .attributes(&var)?
            .into_iter()
            .map(|a| {
                let value = a.value.to_node();
                (a.name, value)
            })
            .collect();

        match catalog.read_array(&var) {
            Ok(payload) => entries.push(("values".into(), payload.to_node()?)),
            Err(e) if e.is_shape() => debug!("skipping values: {e}"),
            Err(e) => return Err(e),
        }

        variables.push((var.name, Node::Object(entries)));
    }

    Ok(Node::Object(vec![
        ("dimensions".into(), Node::Object(dimensions)),
        ("variables".into(), Node::Object(variables)),
    ]))
}

pub fn write<C, W>(catalog: &Catalog<C>, w: W, style: Style) -> Result<()>
where
    C: Container,
    W: io::Write,
{
    ser::to_writer(w, &project(catalog)?, style)
}

pub fn to_string<C: Container>(catalog: &Catalog<C>, style: Style) -> Result<String> {
    ser::to_string(&project(catalog)?, style)
}

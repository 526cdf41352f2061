use crate::container::{AttributeType, Container, VariableMeta};
use crate::error::Result;
use crate::ser::Node;

#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Double(f64),
    Float(f32),
    /// The attribute has a type that is not projected.
    Null,
}

impl AttrValue {
    #[must_use]
    pub fn to_node(&self) -> Node {
        match self {
            AttrValue::Text(s) => Node::Text(s.clone()),
            AttrValue::Double(v) => Node::Double(*v),
            AttrValue::Float(v) => Node::Float(*v),
            AttrValue::Null => Node::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: AttrValue,
}

/// Read all attributes of `var` in declaration order.
///
/// Text, double and float attributes keep their type, any other attribute type reads as
/// [`AttrValue::Null`].
pub fn read_attributes<C>(c: &C, var: &VariableMeta) -> Result<Vec<Attribute>>
where
    C: Container + ?Sized,
{
    c.attribute_names(var)?
        .into_iter()
        .map(|name| {
            let value = match c.attribute_type(var, &name)? {
                AttributeType::Text => AttrValue::Text(c.attribute_text(var, &name)?),
                AttributeType::Float64 => AttrValue::Double(c.attribute_f64(var, &name)?),
                AttributeType::Float32 => AttrValue::Float(c.attribute_f32(var, &name)?),
                AttributeType::Other(t) => {
                    trace!("{}:{name}: unsupported attribute type {t}", var.name);
                    AttrValue::Null
                }
            };

            Ok(Attribute { name, value })
        })
        .collect()
}

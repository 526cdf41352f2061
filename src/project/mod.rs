//! Projection of container attributes and payloads into typed, serializable values.
mod array;
mod attributes;

pub use array::{number, read_array, ArrayPayload};
pub use attributes::{read_attributes, AttrValue, Attribute};

//! Error types for reading and projecting containers.

use std::path::PathBuf;

use thiserror::Error;

use crate::container::ElementType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The container could not be opened.
    #[error("cannot open {}: {reason}", .path.display())]
    FileOpen { path: PathBuf, reason: String },

    /// A metadata inquiry or payload read failed, or named something that does not exist.
    #[error("{op}: {reason}")]
    Metadata { op: String, reason: String },

    /// The (rank, element type) combination of a variable has no payload representation.
    #[error("variable `{variable}`: cannot read {element_type} payload of rank {rank}")]
    Shape {
        variable: String,
        element_type: ElementType,
        rank: usize,
    },

    /// Variables that must line up along their first dimension do not.
    #[error("variable `{variable}` has {found} entries along its first dimension, expected {expected}")]
    Consistency {
        variable: String,
        expected: usize,
        found: usize,
    },

    #[error("cannot allocate a buffer of {count} elements")]
    Allocation { count: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn metadata(op: impl Into<String>, reason: impl ToString) -> Error {
        Error::Metadata {
            op: op.into(),
            reason: reason.to_string(),
        }
    }

    #[must_use]
    pub fn is_shape(&self) -> bool {
        matches!(self, Error::Shape { .. })
    }
}

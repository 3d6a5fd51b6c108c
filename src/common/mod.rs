pub mod constants;
pub mod utility;

use std::fmt;

/// Errors produced while building a [`crate::block::DataBlock`].
///
/// All of these are fatal for the block under construction: the builder
/// does not retry or partially recover, it is simply discarded (see
/// `block::builder`).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A declared column type is not one of the closed set of stored types.
    UnsupportedType { column: String, type_name: String },
    /// A value could not be coerced into the shape required by its column's
    /// declared type (e.g. a scalar where an array was required, or a
    /// widening rule violation).
    TypeMismatch {
        column: String,
        expected: String,
        found: String,
    },
    /// The variable-region byte stream could not be extended.
    IOFailure(String),
    /// Caller supplied input that is syntactically or structurally invalid,
    /// independent of a specific column (e.g. a duplicate column name).
    InvalidInput(String),
    /// A value was well-shaped but its contents could not be encoded.
    InvalidData(String),
    /// A numeric conversion would have lost information it is not allowed
    /// to lose.
    Overflow,
    /// An index was out of the valid range for the schema or the region
    /// being addressed.
    OutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedType { column, type_name } => {
                write!(f, "column '{column}': unsupported type '{type_name}'")
            }
            Error::TypeMismatch {
                column,
                expected,
                found,
            } => write!(
                f,
                "column '{column}': expected {expected}, found {found}"
            ),
            Error::IOFailure(msg) => write!(f, "I/O failure: {msg}"),
            Error::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Error::InvalidData(msg) => write!(f, "invalid data: {msg}"),
            Error::Overflow => write!(f, "numeric overflow"),
            Error::OutOfBounds => write!(f, "index out of bounds"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::IOFailure(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Builds an `Err(Error::InvalidInput(format!(...)))`, for call sites that
/// want to bail out with a formatted message in one line.
#[macro_export]
macro_rules! errinput {
    ($($args:tt)*) => {
        Err($crate::common::Error::InvalidInput(format!($($args)*)))
    };
}

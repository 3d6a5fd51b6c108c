use super::types::StoredType;
use crate::common::{Error, Result};

/// A single column declaration: a name paired with a [`StoredType`].
///
/// `stored_offset` is filled in by [`super::Schema::add_column`], not by the
/// caller: in row mode it is the column's byte offset within a row; in
/// columnar mode it is overwritten once more when `numRows` is known (see
/// `Schema::analyze_columnar`), since cumulative column offsets depend on it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    name: String,
    stored_type: StoredType,
    stored_offset: u32,
}

impl Column {
    pub fn new(name: impl Into<String>, stored_type: StoredType) -> Column {
        Column {
            name: name.into(),
            stored_type,
            stored_offset: 0,
        }
    }

    pub fn builder() -> ColumnBuilder {
        ColumnBuilder::default()
    }

    /// Declares a column from an external type name (e.g. as read from a
    /// schema description file), rather than a [`StoredType`] the caller
    /// already resolved in Rust. The only call site that can produce
    /// `Error::UnsupportedType`: `StoredType`'s own variants are a closed,
    /// exhaustive set, so the error can only arise from a name outside of
    /// it.
    pub fn from_declared_type(name: impl Into<String>, declared_type: &str) -> Result<Column> {
        let name = name.into();
        match StoredType::from_name(declared_type) {
            Some(stored_type) => Ok(Column::new(name, stored_type)),
            None => Err(Error::UnsupportedType {
                column: name,
                type_name: declared_type.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stored_type(&self) -> StoredType {
        self.stored_type
    }

    pub fn width(&self) -> usize {
        self.stored_type.fixed_width()
    }

    pub fn stored_offset(&self) -> u32 {
        self.stored_offset
    }

    pub(super) fn set_stored_offset(&mut self, offset: u32) {
        self.stored_offset = offset;
    }
}

#[derive(Default)]
pub struct ColumnBuilder {
    name: Option<String>,
    stored_type: Option<StoredType>,
}

impl ColumnBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn stored_type(mut self, stored_type: StoredType) -> Self {
        self.stored_type = Some(stored_type);
        self
    }

    pub fn build(self) -> Column {
        Column::new(
            self.name.expect("name must be specified before building."),
            self.stored_type
                .expect("stored_type must be specified before building."),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_declared_type_resolves_a_known_name_case_insensitively() {
        let column = Column::from_declared_type("a", "string").unwrap();
        assert_eq!(column.stored_type(), StoredType::String);

        let column = Column::from_declared_type("b", "LONG_ARRAY").unwrap();
        assert_eq!(column.stored_type(), StoredType::LongArray);
    }

    #[test]
    fn from_declared_type_rejects_an_unknown_name() {
        let err = Column::from_declared_type("c", "NOT_A_TYPE").unwrap_err();
        match err {
            Error::UnsupportedType { column, type_name } => {
                assert_eq!(column, "c");
                assert_eq!(type_name, "NOT_A_TYPE");
            }
            other => panic!("expected UnsupportedType, got {other:?}"),
        }
    }
}

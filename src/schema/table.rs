use super::column::Column;
use super::types::StoredType;
use crate::common::{Error, Result};
use crate::errinput;
use itertools::Itertools;
use std::collections::HashSet;
use std::fmt;

/// An ordered, name-unique sequence of [`Column`] declarations.
///
/// A `Schema` does not itself write any bytes; it precomputes the byte
/// geometry that `block::fixed` writes into.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    pub fn new() -> Schema {
        Schema { columns: Vec::new() }
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Appends a column, assigning its row-mode `stored_offset` (the running
    /// sum of preceding fixed widths). Errors if the name is already used.
    pub fn add_column(&mut self, mut column: Column) -> Result<()> {
        if self.columns.iter().any(|c| c.name() == column.name()) {
            return errinput!("duplicate column name '{}'", column.name());
        }
        let offset = self.row_stride();
        column.set_stored_offset(offset as u32);
        self.columns.push(column);
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn col_count(&self) -> usize {
        self.columns.len()
    }

    pub fn get_column(&self, index: usize) -> Result<&Column> {
        self.columns.get(index).ok_or(Error::OutOfBounds)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    /// Row stride: the sum of stored widths, no padding.
    pub fn row_stride(&self) -> usize {
        self.columns.iter().map(|c| c.width()).sum()
    }

    /// Per-column byte offset within one row. Row-mode offsets do not depend
    /// on `numRows` and are stable for the life of the schema.
    pub fn row_offsets(&self) -> Vec<u32> {
        self.columns.iter().map(|c| c.stored_offset()).collect()
    }

    /// Per-column `(size, cumulative_offset)` within the columnar fixed
    /// region, given a fixed `numRows`. Column *i* occupies
    /// `numRows * widthOf(columnᵢ)` bytes, back to back. Cumulative offsets
    /// depend on `numRows`, so the caller must supply it before these
    /// offsets are meaningful; the builder enforces this by requiring
    /// `numRows` at construction (see `block::builder`).
    pub fn columnar_layout(&self, num_rows: usize) -> ColumnarLayout {
        let mut sizes = Vec::with_capacity(self.columns.len());
        let mut offsets = Vec::with_capacity(self.columns.len());
        let mut cumulative = 0usize;
        for column in &self.columns {
            let size = num_rows * column.width();
            offsets.push(cumulative as u32);
            sizes.push(size as u32);
            cumulative += size;
        }
        ColumnarLayout {
            sizes,
            offsets,
            total: cumulative,
        }
    }

    pub fn stored_type_of(&self, index: usize) -> Result<StoredType> {
        Ok(self.get_column(index)?.stored_type())
    }
}

/// `name:TYPE` pairs joined in declaration order, e.g. `id:INT, name:STRING`.
/// Used by diagnostic/log output, not the wire format.
impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.columns
                .iter()
                .map(|c| format!("{}:{}", c.name(), c.stored_type()))
                .join(", ")
        )
    }
}

/// Precomputed columnar fixed-region geometry for a specific `numRows`.
#[derive(Debug, Clone)]
pub struct ColumnarLayout {
    sizes: Vec<u32>,
    offsets: Vec<u32>,
    total: usize,
}

impl ColumnarLayout {
    pub fn size_of(&self, column_index: usize) -> u32 {
        self.sizes[column_index]
    }

    pub fn offset_of(&self, column_index: usize) -> u32 {
        self.offsets[column_index]
    }

    pub fn total_bytes(&self) -> usize {
        self.total
    }
}

#[derive(Default)]
pub struct SchemaBuilder {
    columns: Vec<Column>,
    seen: HashSet<String>,
}

impl SchemaBuilder {
    pub fn column(mut self, column: Column) -> Self {
        assert!(
            self.seen.insert(column.name().to_string()),
            "duplicate column name '{}'",
            column.name()
        );
        self.columns.push(column);
        self
    }

    pub fn build(self) -> Result<Schema> {
        let mut schema = Schema::new();
        for column in self.columns {
            schema.add_column(column)?;
        }
        Ok(schema)
    }
}

#[cfg(test)]
mod tests;

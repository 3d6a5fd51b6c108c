mod column;
mod table;
pub mod types;

pub use column::{Column, ColumnBuilder};
pub use table::{ColumnarLayout, Schema, SchemaBuilder};
pub use types::StoredType;

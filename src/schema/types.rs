use crate::common::constants::{I32_BYTES, I64_BYTES, INDIRECTION_BYTES};
use std::fmt;

/// The closed set of column types a [`super::Schema`] may declare.
///
/// This enum is exhaustive by design: the cell dispatcher (`block::dispatcher`)
/// matches on it without a catch-all arm, so adding a variant here is a
/// deliberate wire-format change, not an incidental one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum StoredType {
    Int,
    Long,
    Float,
    Double,
    BigDecimal,
    String,
    Bytes,
    Object,
    BooleanArray,
    IntArray,
    LongArray,
    TimestampArray,
    FloatArray,
    DoubleArray,
    StringArray,
    BytesArray,
}

impl StoredType {
    /// Bytes this type occupies inline in the fixed region: a plain
    /// primitive for `Int`/`Long`/`Float`/`Double`, a dictionary id for
    /// `String`, or an `(offset, length)` indirection pair into the
    /// variable region for everything else.
    pub fn fixed_width(&self) -> usize {
        use StoredType::*;
        match self {
            Int | Float | String => I32_BYTES,
            Long | Double => I64_BYTES,
            BigDecimal | Bytes | Object | BooleanArray | IntArray | LongArray | TimestampArray
            | FloatArray | DoubleArray | StringArray | BytesArray => INDIRECTION_BYTES,
        }
    }

    /// Whether this type's fixed-region cell is a `(offset, length)`
    /// indirection pair into the variable region, as opposed to an inline
    /// primitive or dictionary id.
    pub fn is_variable_indirect(&self) -> bool {
        use StoredType::*;
        !matches!(self, Int | Long | Float | Double | String)
    }

    /// Whether this column type carries string data and therefore owns a
    /// per-column dictionary.
    pub fn is_dictionary_backed(&self) -> bool {
        matches!(self, StoredType::String | StoredType::StringArray | StoredType::BytesArray)
    }

    pub fn is_array(&self) -> bool {
        use StoredType::*;
        matches!(
            self,
            BooleanArray
                | IntArray
                | LongArray
                | TimestampArray
                | FloatArray
                | DoubleArray
                | StringArray
                | BytesArray
        )
    }
}

impl StoredType {
    /// Parses a column's declared type name as it would appear in an
    /// external schema description (case-insensitive). Unknown names come
    /// back as `None` so the caller can attach the column name and produce
    /// `Error::UnsupportedType`; this is the only place that error variant
    /// can originate, since the Rust-side `StoredType` enum is otherwise
    /// exhaustive and closed.
    pub fn from_name(name: &str) -> Option<StoredType> {
        use StoredType::*;
        Some(match name.to_ascii_uppercase().as_str() {
            "INT" => Int,
            "LONG" => Long,
            "FLOAT" => Float,
            "DOUBLE" => Double,
            "BIG_DECIMAL" => BigDecimal,
            "STRING" => String,
            "BYTES" => Bytes,
            "OBJECT" => Object,
            "BOOLEAN_ARRAY" => BooleanArray,
            "INT_ARRAY" => IntArray,
            "LONG_ARRAY" => LongArray,
            "TIMESTAMP_ARRAY" => TimestampArray,
            "FLOAT_ARRAY" => FloatArray,
            "DOUBLE_ARRAY" => DoubleArray,
            "STRING_ARRAY" => StringArray,
            "BYTES_ARRAY" => BytesArray,
            _ => return None,
        })
    }
}

impl fmt::Display for StoredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use StoredType::*;
        let name = match self {
            Int => "INT",
            Long => "LONG",
            Float => "FLOAT",
            Double => "DOUBLE",
            BigDecimal => "BIG_DECIMAL",
            String => "STRING",
            Bytes => "BYTES",
            Object => "OBJECT",
            BooleanArray => "BOOLEAN_ARRAY",
            IntArray => "INT_ARRAY",
            LongArray => "LONG_ARRAY",
            TimestampArray => "TIMESTAMP_ARRAY",
            FloatArray => "FLOAT_ARRAY",
            DoubleArray => "DOUBLE_ARRAY",
            StringArray => "STRING_ARRAY",
            BytesArray => "BYTES_ARRAY",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_table_matches_declared_sizes() {
        assert_eq!(StoredType::Int.fixed_width(), 4);
        assert_eq!(StoredType::Long.fixed_width(), 8);
        assert_eq!(StoredType::Float.fixed_width(), 4);
        assert_eq!(StoredType::Double.fixed_width(), 8);
        assert_eq!(StoredType::BigDecimal.fixed_width(), 8);
        assert_eq!(StoredType::String.fixed_width(), 4);
        assert_eq!(StoredType::Bytes.fixed_width(), 8);
        assert_eq!(StoredType::Object.fixed_width(), 8);
        for t in [
            StoredType::BooleanArray,
            StoredType::IntArray,
            StoredType::LongArray,
            StoredType::TimestampArray,
            StoredType::FloatArray,
            StoredType::DoubleArray,
            StoredType::StringArray,
            StoredType::BytesArray,
        ] {
            assert_eq!(t.fixed_width(), 8);
            assert!(t.is_variable_indirect());
        }
    }

    #[test]
    fn only_int_long_float_double_string_are_non_indirect() {
        assert!(!StoredType::Int.is_variable_indirect());
        assert!(!StoredType::Long.is_variable_indirect());
        assert!(!StoredType::Float.is_variable_indirect());
        assert!(!StoredType::Double.is_variable_indirect());
        assert!(!StoredType::String.is_variable_indirect());
        assert!(StoredType::BigDecimal.is_variable_indirect());
        assert!(StoredType::Bytes.is_variable_indirect());
        assert!(StoredType::Object.is_variable_indirect());
    }
}

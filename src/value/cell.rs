use super::array_input::ArrayInput;
use super::bigdecimal::BigDecimalValue;
use super::number::Number;

/// One caller-supplied value for one column. The dispatcher (`block::dispatcher`)
/// matches a cell's shape against the column's declared [`crate::schema::StoredType`]
/// and routes it to the fixed or variable region writer.
///
/// Nulls are not modeled here: the core treats null sentinels as ordinary
/// values of the declared type, so callers that need nullability encode
/// their own sentinel (e.g. `Cell::Number(Number::I32(i32::MIN))`) before
/// handing the cell to the builder.
#[derive(Debug, Clone)]
pub enum Cell<'a> {
    Number(Number),
    BigDecimal(BigDecimalValue),
    Str(&'a str),
    Bytes(&'a [u8]),
    Object { type_tag: i32, payload: &'a [u8] },
    Array(ArrayInput<'a>),
}

impl<'a> Cell<'a> {
    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::Number(_) => "number",
            Cell::BigDecimal(_) => "big_decimal",
            Cell::Str(_) => "string",
            Cell::Bytes(_) => "bytes",
            Cell::Object { .. } => "object",
            Cell::Array(_) => "array",
        }
    }
}

impl<'a> From<i32> for Cell<'a> {
    fn from(v: i32) -> Self {
        Cell::Number(Number::I32(v))
    }
}

impl<'a> From<i64> for Cell<'a> {
    fn from(v: i64) -> Self {
        Cell::Number(Number::I64(v))
    }
}

impl<'a> From<f32> for Cell<'a> {
    fn from(v: f32) -> Self {
        Cell::Number(Number::F32(v))
    }
}

impl<'a> From<f64> for Cell<'a> {
    fn from(v: f64) -> Self {
        Cell::Number(Number::F64(v))
    }
}

impl<'a> From<&'a str> for Cell<'a> {
    fn from(v: &'a str) -> Self {
        Cell::Str(v)
    }
}

impl<'a> From<&'a [u8]> for Cell<'a> {
    fn from(v: &'a [u8]) -> Self {
        Cell::Bytes(v)
    }
}

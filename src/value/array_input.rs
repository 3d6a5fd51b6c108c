use crate::common::{Error, Result};
use crate::schema::StoredType;

/// The observed element type of an array cell, prior to widening.
///
/// Tagging the element type statically (rather than inspecting it at
/// runtime) lets the dispatcher match on `(declared StoredType, ArrayInput
/// variant)` and pick the one widening function the pair allows.
#[derive(Debug, Clone, Copy)]
pub enum ArrayInput<'a> {
    I32(&'a [i32]),
    I64(&'a [i64]),
    F32(&'a [f32]),
    F64(&'a [f64]),
    Str(&'a [&'a str]),
}

impl<'a> ArrayInput<'a> {
    fn type_name(&self) -> &'static str {
        match self {
            ArrayInput::I32(_) => "int[]",
            ArrayInput::I64(_) => "long[]",
            ArrayInput::F32(_) => "float[]",
            ArrayInput::F64(_) => "double[]",
            ArrayInput::Str(_) => "string[]",
        }
    }
}

/// The result of widening an [`ArrayInput`] to the width a declared array
/// column requires. Widening always allocates a new element array of the
/// target width and copies element-by-element: it never narrows.
#[derive(Debug, Clone, PartialEq)]
pub enum WidenedArray {
    I32(Vec<i32>),
    I64(Vec<i64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
    Str(Vec<String>),
}

impl WidenedArray {
    pub fn len(&self) -> usize {
        match self {
            WidenedArray::I32(v) => v.len(),
            WidenedArray::I64(v) => v.len(),
            WidenedArray::F32(v) => v.len(),
            WidenedArray::F64(v) => v.len(),
            WidenedArray::Str(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Widens `input` to the element width `declared` requires, exhaustively
/// implementing the allowed promotion table. Returns `TypeMismatch` for any
/// `(declared, observed)` pair the table does not list.
pub fn widen(column: &str, declared: StoredType, input: ArrayInput) -> Result<WidenedArray> {
    use ArrayInput as A;
    use StoredType::*;
    match (declared, input) {
        (IntArray, A::I32(elems)) | (BooleanArray, A::I32(elems)) => {
            Ok(WidenedArray::I32(elems.to_vec()))
        }
        (LongArray, A::I32(elems)) | (TimestampArray, A::I32(elems)) => {
            Ok(WidenedArray::I64(elems.iter().map(|&v| v as i64).collect()))
        }
        (LongArray, A::I64(elems)) | (TimestampArray, A::I64(elems)) => {
            Ok(WidenedArray::I64(elems.to_vec()))
        }
        (FloatArray, A::F32(elems)) => Ok(WidenedArray::F32(elems.to_vec())),
        (DoubleArray, A::I32(elems)) => {
            Ok(WidenedArray::F64(elems.iter().map(|&v| v as f64).collect()))
        }
        (DoubleArray, A::I64(elems)) => {
            Ok(WidenedArray::F64(elems.iter().map(|&v| v as f64).collect()))
        }
        (DoubleArray, A::F32(elems)) => {
            Ok(WidenedArray::F64(elems.iter().map(|&v| v as f64).collect()))
        }
        (DoubleArray, A::F64(elems)) => Ok(WidenedArray::F64(elems.to_vec())),
        (StringArray, A::Str(elems)) | (BytesArray, A::Str(elems)) => Ok(WidenedArray::Str(
            elems.iter().map(|s| s.to_string()).collect(),
        )),
        (declared, observed) => Err(Error::TypeMismatch {
            column: column.to_string(),
            expected: format!("an element type accepted by {declared}"),
            found: observed.type_name().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_array_accepts_only_i32() {
        let elems = [1, 2, 3];
        let widened = widen("a", StoredType::IntArray, ArrayInput::I32(&elems)).unwrap();
        assert_eq!(widened, WidenedArray::I32(vec![1, 2, 3]));

        let err = widen("a", StoredType::IntArray, ArrayInput::I64(&[1, 2])).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn long_array_widens_int_elementwise() {
        let elems = [1i32, 2, 3];
        let widened = widen("t", StoredType::LongArray, ArrayInput::I32(&elems)).unwrap();
        assert_eq!(widened, WidenedArray::I64(vec![1, 2, 3]));
    }

    #[test]
    fn double_array_widens_int_long_and_float() {
        assert_eq!(
            widen("d", StoredType::DoubleArray, ArrayInput::I32(&[2])).unwrap(),
            WidenedArray::F64(vec![2.0])
        );
        assert_eq!(
            widen("d", StoredType::DoubleArray, ArrayInput::I64(&[2])).unwrap(),
            WidenedArray::F64(vec![2.0])
        );
        assert_eq!(
            widen("d", StoredType::DoubleArray, ArrayInput::F32(&[2.5])).unwrap(),
            WidenedArray::F64(vec![2.5])
        );
    }

    #[test]
    fn string_array_and_bytes_array_accept_strings_only() {
        let elems = ["x", "y"];
        let widened = widen("s", StoredType::StringArray, ArrayInput::Str(&elems)).unwrap();
        assert_eq!(widened, WidenedArray::Str(vec!["x".into(), "y".into()]));

        let widened = widen("b", StoredType::BytesArray, ArrayInput::Str(&elems)).unwrap();
        assert_eq!(widened, WidenedArray::Str(vec!["x".into(), "y".into()]));
    }

    #[test]
    fn float_array_rejects_double_input() {
        let err = widen("f", StoredType::FloatArray, ArrayInput::F64(&[1.0])).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }
}

/// A scalar numeric input of unspecified width, routed to the declared
/// column width by the dispatcher via 2's-complement narrowing/widening or
/// IEEE-754 conversion, whichever the target type calls for.
///
/// This mirrors the numeric tower of the surrounding system's value type:
/// any numeric input can be viewed as any of the four primitive widths, the
/// same way a Java `Number` exposes `intValue()`/`longValue()`/
/// `floatValue()`/`doubleValue()` regardless of its concrete boxed type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
}

impl Number {
    /// 2's-complement truncation/widening to `int32`.
    pub fn as_i32(&self) -> i32 {
        match *self {
            Number::I32(v) => v,
            Number::I64(v) => v as i32,
            Number::F32(v) => v as i32,
            Number::F64(v) => v as i32,
        }
    }

    /// 2's-complement widening to `int64`.
    pub fn as_i64(&self) -> i64 {
        match *self {
            Number::I32(v) => v as i64,
            Number::I64(v) => v,
            Number::F32(v) => v as i64,
            Number::F64(v) => v as i64,
        }
    }

    /// IEEE-754 conversion to `binary32`, truncating precision if the
    /// source was wider.
    pub fn as_f32(&self) -> f32 {
        match *self {
            Number::I32(v) => v as f32,
            Number::I64(v) => v as f32,
            Number::F32(v) => v,
            Number::F64(v) => v as f32,
        }
    }

    /// IEEE-754 widening to `binary64`.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::I32(v) => v as f64,
            Number::I64(v) => v as f64,
            Number::F32(v) => v as f64,
            Number::F64(v) => v,
        }
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::I32(v)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::I64(v)
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::F32(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::F64(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_widens_to_long_losslessly() {
        let n = Number::I32(42);
        assert_eq!(n.as_i64(), 42);
    }

    #[test]
    fn int_and_long_widen_to_double_losslessly_within_range() {
        assert_eq!(Number::I32(42).as_f64(), 42.0);
        assert_eq!(Number::I64(1_000_000_000_000).as_f64(), 1_000_000_000_000.0);
    }

    #[test]
    fn float_widens_to_double() {
        let n = Number::F32(1.5);
        assert_eq!(n.as_f64(), 1.5);
    }
}

/// An arbitrary-precision decimal value, encoded as `scale:int32` followed
/// by the two's-complement big-endian bytes of the unscaled integer,
/// trimmed to the minimal length that still round-trips the sign (the same
/// representation Java's `BigInteger::toByteArray` produces, which this
/// encoder stays bit-exact with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigDecimalValue {
    scale: i32,
    unscaled: Vec<u8>,
}

impl BigDecimalValue {
    /// Builds a value from an unscaled `i128` and a base-10 `scale`, i.e.
    /// the represented number is `unscaled * 10^-scale`.
    pub fn from_i128(unscaled: i128, scale: i32) -> BigDecimalValue {
        BigDecimalValue {
            scale,
            unscaled: minimal_twos_complement(unscaled),
        }
    }

    /// Builds a value directly from pre-encoded two's-complement magnitude
    /// bytes, as read back from a reverse-engineered wire payload.
    pub fn from_parts(scale: i32, unscaled: Vec<u8>) -> BigDecimalValue {
        BigDecimalValue { scale, unscaled }
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    pub fn unscaled_bytes(&self) -> &[u8] {
        &self.unscaled
    }

    /// The full variable-region payload for a `BIG_DECIMAL` cell: `scale`
    /// followed by the two's-complement magnitude bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + self.unscaled.len());
        out.extend_from_slice(&self.scale.to_be_bytes());
        out.extend_from_slice(&self.unscaled);
        out
    }
}

/// Two's-complement big-endian bytes for `value`, trimmed to the shortest
/// length whose leading byte still carries the correct sign bit — the same
/// representation Java's `BigInteger::toByteArray` produces.
fn minimal_twos_complement(value: i128) -> Vec<u8> {
    let full = value.to_be_bytes();
    let is_negative = value < 0;
    let redundant = |b: u8, next: u8| {
        if is_negative {
            b == 0xFF && next & 0x80 != 0
        } else {
            b == 0x00 && next & 0x80 == 0
        }
    };
    let mut start = 0;
    while start + 1 < full.len() && redundant(full[start], full[start + 1]) {
        start += 1;
    }
    full[start..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_encodes_as_single_byte() {
        let v = BigDecimalValue::from_i128(0, 2);
        assert_eq!(v.unscaled_bytes(), &[0x00]);
        assert_eq!(v.encode(), vec![0, 0, 0, 2, 0x00]);
    }

    #[test]
    fn small_positive_value_is_one_byte() {
        let v = BigDecimalValue::from_i128(7, 0);
        assert_eq!(v.unscaled_bytes(), &[0x07]);
    }

    #[test]
    fn negative_value_keeps_sign_byte() {
        let v = BigDecimalValue::from_i128(-1, 0);
        assert_eq!(v.unscaled_bytes(), &[0xFF]);

        let v = BigDecimalValue::from_i128(-128, 0);
        assert_eq!(v.unscaled_bytes(), &[0x80]);

        let v = BigDecimalValue::from_i128(-129, 0);
        assert_eq!(v.unscaled_bytes(), &[0xFF, 0x7F]);
    }

    #[test]
    fn value_requiring_leading_zero_keeps_it() {
        // 128 has its top bit set in a single byte (0x80), which would read as
        // negative, so a leading 0x00 byte must be kept.
        let v = BigDecimalValue::from_i128(128, 0);
        assert_eq!(v.unscaled_bytes(), &[0x00, 0x80]);
    }
}

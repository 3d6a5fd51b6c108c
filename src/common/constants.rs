// Wire-format sizes. These never change at runtime: see `crate::config` for
// the knobs that actually vary (allocation hints only).

/// Size in bytes of a big-endian `int32`.
pub const I32_BYTES: usize = 4;
/// Size in bytes of a big-endian `int64`.
pub const I64_BYTES: usize = 8;
/// Size in bytes of an `(offset:int32, length:int32)` indirection pair.
pub const INDIRECTION_BYTES: usize = I32_BYTES * 2;

// Environment variable names read by `crate::config`.
pub const ENV_VAR_REGION_CAPACITY: &str = "DATABLOCK_VARIABLE_REGION_INITIAL_CAPACITY";
pub const ENV_VAR_DICTIONARY_CAPACITY: &str = "DATABLOCK_DICTIONARY_INITIAL_CAPACITY";

//! Random schema/row fixtures for tests, built the same way this codebase's
//! other test helpers build random tables and tuples: seed a `ChaCha8Rng`
//! (falling back to a process-random seed when the caller doesn't care to
//! reproduce a failure) and walk the schema column by column.
//!
//! [`Cell`] borrows its string and byte payloads, so a fixture generator
//! can't hand back `Vec<Cell>` directly without fighting the borrow checker
//! over who owns the backing `String`/`Vec<u8>`. [`OwnedCell`] sidesteps this
//! the way `types::Field` does for owned values: it owns its data and
//! produces a borrowed [`Cell`] on demand.

use crate::schema::{Column, Schema, StoredType};
use crate::value::{BigDecimalValue, Cell, Number};
use rand::{random, Rng};
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

/// The subset of [`StoredType`] this generator picks from. Array, object,
/// and big-decimal columns need richer generators than a single random
/// scalar (see `random_big_decimal_row` below for the one exception tests
/// actually need); everything else here stays to the scalar types a simple
/// fuzz-y round-trip test wants.
const SCALAR_TYPES: &[StoredType] = &[
    StoredType::Int,
    StoredType::Long,
    StoredType::Float,
    StoredType::Double,
    StoredType::String,
    StoredType::Bytes,
];

/// An owned stand-in for [`Cell`]: same shape, but holding its own string
/// and byte data so a batch of fixture rows can outlive the loop that built
/// them.
#[derive(Debug, Clone)]
pub enum OwnedCell {
    Number(Number),
    BigDecimal(BigDecimalValue),
    Str(String),
    Bytes(Vec<u8>),
}

impl OwnedCell {
    pub fn as_cell(&self) -> Cell<'_> {
        match self {
            OwnedCell::Number(n) => Cell::Number(*n),
            OwnedCell::BigDecimal(v) => Cell::BigDecimal(v.clone()),
            OwnedCell::Str(s) => Cell::Str(s.as_str()),
            OwnedCell::Bytes(b) => Cell::Bytes(b.as_slice()),
        }
    }
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(random)
}

/// Builds a schema of `num_columns` columns, each a uniformly random pick
/// from [`SCALAR_TYPES`], named `col0..colN`.
pub fn random_schema(num_columns: usize, seed: Option<u64>) -> Schema {
    let mut rng = ChaCha8Rng::seed_from_u64(resolve_seed(seed));
    let mut builder = Schema::builder();
    for i in 0..num_columns {
        let stored_type = SCALAR_TYPES[rng.gen_range(0..SCALAR_TYPES.len())];
        builder = builder.column(Column::new(format!("col{i}"), stored_type));
    }
    builder.build().expect("generated column names are unique")
}

/// One random value for `column`, matching its declared type. Strings are
/// bounded to 64 printable ASCII characters and byte strings to 32 bytes,
/// generous enough to exercise the variable region without generating
/// pathologically large fixtures.
fn random_cell_for(column: &Column, rng: &mut ChaCha8Rng) -> OwnedCell {
    match column.stored_type() {
        StoredType::Int => OwnedCell::Number(Number::I32(rng.gen_range(-1000..1000))),
        StoredType::Long => OwnedCell::Number(Number::I64(rng.gen_range(-1_000_000..1_000_000))),
        StoredType::Float => OwnedCell::Number(Number::F32(rng.gen_range(0.0..1000.0))),
        StoredType::Double => OwnedCell::Number(Number::F64(rng.gen_range(0.0..1_000_000.0))),
        StoredType::String => {
            let len = rng.gen_range(0..64);
            let s: String = (0..len).map(|_| rng.gen_range(33..123) as u8 as char).collect();
            OwnedCell::Str(s)
        }
        StoredType::Bytes => {
            let len = rng.gen_range(0..32);
            OwnedCell::Bytes((0..len).map(|_| rng.gen_range(0..=255)).collect())
        }
        other => panic!("random_cell_for does not support {other}; add it to SCALAR_TYPES only once it does"),
    }
}

/// One random row matching `schema`'s column types, in column order.
pub fn random_row(schema: &Schema, seed: Option<u64>) -> Vec<OwnedCell> {
    let mut rng = ChaCha8Rng::seed_from_u64(resolve_seed(seed));
    schema
        .columns()
        .iter()
        .map(|column| random_cell_for(column, &mut rng))
        .collect()
}

/// `n` random rows matching `schema`, each derived from consecutively
/// incremented seeds so repeated calls with the same `seed` are
/// reproducible but rows differ from each other.
pub fn random_rows(schema: &Schema, n: usize, seed: Option<u64>) -> Vec<Vec<OwnedCell>> {
    let base_seed = resolve_seed(seed);
    (0..n)
        .map(|i| random_row(schema, Some(base_seed.wrapping_add(i as u64))))
        .collect()
}

/// A random [`BigDecimalValue`], exercised separately from [`SCALAR_TYPES`]
/// since the BIG_DECIMAL dispatch path (sign-magnitude encoding) is worth
/// fuzzing on its own.
pub fn random_big_decimal(seed: Option<u64>) -> BigDecimalValue {
    let mut rng = ChaCha8Rng::seed_from_u64(resolve_seed(seed));
    let unscaled: i128 = rng.gen_range(-1_000_000_000_000i128..1_000_000_000_000i128);
    let scale = rng.gen_range(0..10);
    BigDecimalValue::from_i128(unscaled, scale)
}

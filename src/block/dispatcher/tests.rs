use super::*;
use crate::schema::Column;
use crate::value::{ArrayInput, BigDecimalValue, Cell};

fn column(name: &str, stored_type: StoredType) -> Column {
    Column::new(name, stored_type)
}

#[test]
fn s1_single_int_row() {
    let col = column("a", StoredType::Int);
    let mut fixed = FixedRegionWriter::default();
    let mut variable = VariableRegionWriter::default();
    let mut dict = DictionaryTable::new(1);
    let mut stats = BuildStats::new();

    dispatch_cell(0, &col, &Cell::from(7), &mut fixed, &mut variable, &mut dict, &mut stats).unwrap();

    assert_eq!(fixed.into_bytes(), vec![0, 0, 0, 7]);
    assert!(variable.is_empty());
}

#[test]
fn s3_bytes_indirection() {
    let col = column("b", StoredType::Bytes);
    let mut fixed = FixedRegionWriter::default();
    let mut variable = VariableRegionWriter::default();
    let mut dict = DictionaryTable::new(1);
    let mut stats = BuildStats::new();

    let ab = b"AB";
    let cde = b"CDE";
    dispatch_cell(
        0,
        &col,
        &Cell::Bytes(ab),
        &mut fixed,
        &mut variable,
        &mut dict,
        &mut stats,
    )
    .unwrap();
    dispatch_cell(
        0,
        &col,
        &Cell::Bytes(cde),
        &mut fixed,
        &mut variable,
        &mut dict,
        &mut stats,
    )
    .unwrap();

    assert_eq!(
        fixed.into_bytes(),
        vec![0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 3]
    );
    assert_eq!(variable.into_bytes(), b"ABCDE".to_vec());
}

#[test]
fn s4_int_widens_to_long_array() {
    let col = column("t", StoredType::LongArray);
    let mut fixed = FixedRegionWriter::default();
    let mut variable = VariableRegionWriter::default();
    let mut dict = DictionaryTable::new(1);
    let mut stats = BuildStats::new();

    let elems = [1i32, 2];
    dispatch_cell(
        0,
        &col,
        &Cell::Array(ArrayInput::I32(&elems)),
        &mut fixed,
        &mut variable,
        &mut dict,
        &mut stats,
    )
    .unwrap();

    let variable_bytes = variable.into_bytes();
    assert_eq!(variable_bytes.len(), 20);
    assert_eq!(&variable_bytes[0..4], &[0, 0, 0, 2]); // count
    assert_eq!(&variable_bytes[4..12], &1i64.to_be_bytes());
    assert_eq!(&variable_bytes[12..20], &2i64.to_be_bytes());

    let fixed_bytes = fixed.into_bytes();
    assert_eq!(&fixed_bytes[0..4], &[0, 0, 0, 0]); // offset
    assert_eq!(&fixed_bytes[4..8], &20i32.to_be_bytes()); // length
}

#[test]
fn string_column_writes_dictionary_id() {
    let col = column("s", StoredType::String);
    let mut fixed = FixedRegionWriter::default();
    let mut variable = VariableRegionWriter::default();
    let mut dict = DictionaryTable::new(1);
    let mut stats = BuildStats::new();

    for value in ["x", "y", "x"] {
        dispatch_cell(
            0,
            &col,
            &Cell::Str(value),
            &mut fixed,
            &mut variable,
            &mut dict,
            &mut stats,
        )
        .unwrap();
    }

    assert_eq!(
        fixed.into_bytes(),
        vec![0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0]
    );
}

#[test]
fn object_length_excludes_the_type_tag() {
    let col = column("o", StoredType::Object);
    let mut fixed = FixedRegionWriter::default();
    let mut variable = VariableRegionWriter::default();
    let mut dict = DictionaryTable::new(1);
    let mut stats = BuildStats::new();

    let payload = [9u8, 9, 9];
    dispatch_cell(
        0,
        &col,
        &Cell::Object {
            type_tag: 42,
            payload: &payload,
        },
        &mut fixed,
        &mut variable,
        &mut dict,
        &mut stats,
    )
    .unwrap();

    let fixed_bytes = fixed.into_bytes();
    assert_eq!(&fixed_bytes[4..8], &3i32.to_be_bytes()); // length excludes tag
    let variable_bytes = variable.into_bytes();
    assert_eq!(&variable_bytes[0..4], &42i32.to_be_bytes());
    assert_eq!(&variable_bytes[4..7], &payload);
}

#[test]
fn big_decimal_cell_writes_sign_magnitude_payload() {
    let col = column("d", StoredType::BigDecimal);
    let mut fixed = FixedRegionWriter::default();
    let mut variable = VariableRegionWriter::default();
    let mut dict = DictionaryTable::new(1);
    let mut stats = BuildStats::new();

    dispatch_cell(
        0,
        &col,
        &Cell::BigDecimal(BigDecimalValue::from_i128(12345, 2)),
        &mut fixed,
        &mut variable,
        &mut dict,
        &mut stats,
    )
    .unwrap();

    assert_eq!(fixed.len(), 8);
    let variable_bytes = variable.into_bytes();
    assert_eq!(&variable_bytes[0..4], &2i32.to_be_bytes());
}

#[test]
fn shape_mismatch_is_a_type_mismatch_error() {
    let col = column("a", StoredType::Int);
    let mut fixed = FixedRegionWriter::default();
    let mut variable = VariableRegionWriter::default();
    let mut dict = DictionaryTable::new(1);
    let mut stats = BuildStats::new();

    let err = dispatch_cell(
        0,
        &col,
        &Cell::Str("not a number"),
        &mut fixed,
        &mut variable,
        &mut dict,
        &mut stats,
    )
    .unwrap_err();

    assert!(matches!(err, Error::TypeMismatch { .. }));
}

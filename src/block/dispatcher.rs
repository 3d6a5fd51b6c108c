use super::dictionary::DictionaryTable;
use super::fixed::FixedRegionWriter;
use super::stats::BuildStats;
use super::variable::VariableRegionWriter;
use crate::common::constants::I32_BYTES;
use crate::common::{Error, Result};
use crate::schema::{Column, StoredType};
use crate::value::{widen, Cell, WidenedArray};

/// Routes one cell to its type-specific sub-encoder, writing into the fixed
/// and variable regions and, for string-bearing columns, interning into the
/// dictionary.
pub fn dispatch_cell(
    column_index: usize,
    column: &Column,
    cell: &Cell,
    fixed: &mut FixedRegionWriter,
    variable: &mut VariableRegionWriter,
    dictionary: &mut DictionaryTable,
    stats: &mut BuildStats,
) -> Result<()> {
    use StoredType::*;
    match column.stored_type() {
        Int => fixed.write_i32(expect_number(column, cell)?.as_i32()),
        Long => fixed.write_i64(expect_number(column, cell)?.as_i64()),
        Float => fixed.write_f32(expect_number(column, cell)?.as_f32()),
        Double => fixed.write_f64(expect_number(column, cell)?.as_f64()),
        BigDecimal => {
            let value = expect_big_decimal(column, cell)?;
            let payload = value.encode();
            let offset = variable.append(&payload)?;
            fixed.write_indirection(offset, payload.len() as u32);
        }
        String => {
            let s = expect_str(column, cell)?;
            let (id, was_hit) = dictionary.intern(column_index, s);
            stats.record_dictionary_lookup(was_hit);
            fixed.write_u32(id);
        }
        Bytes => {
            let bytes = expect_bytes(column, cell)?;
            let offset = variable.append(bytes)?;
            fixed.write_indirection(offset, bytes.len() as u32);
        }
        Object => {
            let (type_tag, payload) = expect_object(column, cell)?;
            let offset = variable.offset();
            variable.append(&type_tag.to_be_bytes())?;
            variable.append(payload)?;
            fixed.write_indirection(offset, payload.len() as u32);
        }
        declared if declared.is_array() => {
            let array_input = expect_array(column, cell)?;
            let widened = widen(column.name(), declared, array_input)?;
            write_array(column_index, widened, fixed, variable, dictionary, stats)?;
        }
        declared => unreachable!("StoredType::is_array missed a variant: {declared}"),
    }
    Ok(())
}

fn write_array(
    column_index: usize,
    widened: WidenedArray,
    fixed: &mut FixedRegionWriter,
    variable: &mut VariableRegionWriter,
    dictionary: &mut DictionaryTable,
    stats: &mut BuildStats,
) -> Result<()> {
    let payload = match widened {
        WidenedArray::I32(elems) => encode_numeric_array(&elems, |v, out| {
            out.extend_from_slice(&v.to_be_bytes())
        }),
        WidenedArray::I64(elems) => encode_numeric_array(&elems, |v, out| {
            out.extend_from_slice(&v.to_be_bytes())
        }),
        WidenedArray::F32(elems) => encode_numeric_array(&elems, |v, out| {
            out.extend_from_slice(&v.to_be_bytes())
        }),
        WidenedArray::F64(elems) => encode_numeric_array(&elems, |v, out| {
            out.extend_from_slice(&v.to_be_bytes())
        }),
        // STRING_ARRAY and BYTES_ARRAY are both routed through the
        // dictionary path: each element is interned and the element array
        // becomes a dense id array.
        WidenedArray::Str(elems) => {
            let ids: Vec<u32> = elems
                .iter()
                .map(|s| {
                    let (id, was_hit) = dictionary.intern(column_index, s);
                    stats.record_dictionary_lookup(was_hit);
                    id
                })
                .collect();
            encode_numeric_array(&ids, |v, out| out.extend_from_slice(&v.to_be_bytes()))
        }
    };
    let offset = variable.append(&payload)?;
    fixed.write_indirection(offset, payload.len() as u32);
    Ok(())
}

fn encode_numeric_array<T: Copy>(elems: &[T], write_be: impl Fn(T, &mut Vec<u8>)) -> Vec<u8> {
    let mut out = Vec::with_capacity(I32_BYTES + elems.len() * std::mem::size_of::<T>());
    out.extend_from_slice(&(elems.len() as u32).to_be_bytes());
    for &elem in elems {
        write_be(elem, &mut out);
    }
    out
}

fn expect_number(column: &Column, cell: &Cell) -> Result<crate::value::Number> {
    match cell {
        Cell::Number(n) => Ok(*n),
        other => Err(mismatch(column, "a number", other)),
    }
}

fn expect_big_decimal<'c>(
    column: &Column,
    cell: &'c Cell,
) -> Result<&'c crate::value::BigDecimalValue> {
    match cell {
        Cell::BigDecimal(v) => Ok(v),
        other => Err(mismatch(column, "a big decimal", other)),
    }
}

fn expect_str<'a, 'c>(column: &Column, cell: &'c Cell<'a>) -> Result<&'a str> {
    match cell {
        Cell::Str(s) => Ok(*s),
        other => Err(mismatch(column, "a string", other)),
    }
}

fn expect_bytes<'a, 'c>(column: &Column, cell: &'c Cell<'a>) -> Result<&'a [u8]> {
    match cell {
        Cell::Bytes(b) => Ok(*b),
        other => Err(mismatch(column, "raw bytes", other)),
    }
}

fn expect_object<'a, 'c>(column: &Column, cell: &'c Cell<'a>) -> Result<(i32, &'a [u8])> {
    match cell {
        Cell::Object { type_tag, payload } => Ok((*type_tag, *payload)),
        other => Err(mismatch(column, "an object", other)),
    }
}

fn expect_array<'a, 'c>(column: &Column, cell: &'c Cell<'a>) -> Result<crate::value::ArrayInput<'a>> {
    match cell {
        Cell::Array(a) => Ok(*a),
        other => Err(mismatch(column, "an array", other)),
    }
}

fn mismatch(column: &Column, expected: &str, found: &Cell) -> Error {
    Error::TypeMismatch {
        column: column.name().to_string(),
        expected: expected.to_string(),
        found: found.type_name().to_string(),
    }
}

#[cfg(test)]
mod tests;

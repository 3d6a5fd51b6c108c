//! Interactive demo for `datablock_encoder`: declare a schema, type in rows,
//! and see the resulting block's region sizes and dictionary stats. Not
//! part of the library's public contract, just a way to poke at the encoder
//! from a terminal the way this codebase's other demo binaries let you poke
//! at its storage engine.

use datablock_encoder::block::BlockBuilder;
use datablock_encoder::schema::{Column, Schema, StoredType};
use datablock_encoder::value::{Cell, Number};
use itertools::Itertools;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

fn main() {
    println!("datablock-encoder demo");
    println!("Declare columns as `name:TYPE,name:TYPE,...` (e.g. `id:INT,name:STRING`).");
    println!("Supported types: INT, LONG, FLOAT, DOUBLE, STRING.");
    println!();

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("failed to initialize readline: {err}");
            std::process::exit(1);
        }
    };

    let schema = loop {
        match rl.readline("schema> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match parse_schema(&line) {
                    Ok(schema) => break schema,
                    Err(err) => eprintln!("invalid schema: {err}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                return;
            }
            Err(err) => {
                eprintln!("readline error: {err}");
                return;
            }
        }
    };

    println!("Enter rows as comma-separated values, matching the schema. Blank line to finish.");

    let mut builder = BlockBuilder::row_major(schema.clone());
    loop {
        match rl.readline("row> ") {
            Ok(line) if line.trim().is_empty() => break,
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match parse_row(&schema, &line) {
                    Ok(cells) => {
                        let owned: Vec<Cell> = cells.iter().map(OwnedValue::as_cell).collect();
                        if let Err(err) = builder.write_row(&owned) {
                            eprintln!("rejected: {err}");
                        }
                    }
                    Err(err) => eprintln!("invalid row: {err}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("readline error: {err}");
                break;
            }
        }
    }

    match builder.finish() {
        Ok(block) => {
            println!();
            println!("schema:          {}", block.schema());
            println!("rows:            {}", block.num_rows());
            println!("flavor:          {:?}", block.flavor());
            println!("fixed region:    {} bytes", block.fixed_region().len());
            println!("variable region: {} bytes", block.variable_region().len());
            for (column, strings) in block.reverse_dictionary().columns() {
                println!(
                    "dictionary[{column}]: {}",
                    strings.iter().enumerate().map(|(id, s)| format!("{id}={s}")).join(", ")
                );
            }
        }
        Err(err) => eprintln!("failed to finish block: {err}"),
    }
}

fn parse_schema(line: &str) -> Result<Schema, String> {
    let mut builder = Schema::builder();
    for field in line.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (name, type_name) = field
            .split_once(':')
            .ok_or_else(|| format!("expected `name:TYPE`, got '{field}'"))?;
        let stored_type = match type_name.trim().to_ascii_uppercase().as_str() {
            "INT" => StoredType::Int,
            "LONG" => StoredType::Long,
            "FLOAT" => StoredType::Float,
            "DOUBLE" => StoredType::Double,
            "STRING" => StoredType::String,
            other => return Err(format!("unsupported demo type '{other}'")),
        };
        builder = builder.column(Column::new(name.trim(), stored_type));
    }
    builder.build().map_err(|e| e.to_string())
}

enum OwnedValue {
    Number(Number),
    Str(String),
}

impl OwnedValue {
    fn as_cell(&self) -> Cell<'_> {
        match self {
            OwnedValue::Number(n) => Cell::Number(*n),
            OwnedValue::Str(s) => Cell::Str(s.as_str()),
        }
    }
}

fn parse_row(schema: &Schema, line: &str) -> Result<Vec<OwnedValue>, String> {
    let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
    if tokens.len() != schema.col_count() {
        return Err(format!(
            "expected {} values, got {}",
            schema.col_count(),
            tokens.len()
        ));
    }
    tokens
        .iter()
        .zip(schema.columns())
        .map(|(token, column)| match column.stored_type() {
            StoredType::Int => token
                .parse::<i32>()
                .map(Number::I32)
                .map(OwnedValue::Number)
                .map_err(|e| format!("column '{}': {e}", column.name())),
            StoredType::Long => token
                .parse::<i64>()
                .map(Number::I64)
                .map(OwnedValue::Number)
                .map_err(|e| format!("column '{}': {e}", column.name())),
            StoredType::Float => token
                .parse::<f32>()
                .map(Number::F32)
                .map(OwnedValue::Number)
                .map_err(|e| format!("column '{}': {e}", column.name())),
            StoredType::Double => token
                .parse::<f64>()
                .map(Number::F64)
                .map(OwnedValue::Number)
                .map_err(|e| format!("column '{}': {e}", column.name())),
            StoredType::String => Ok(OwnedValue::Str(token.to_string())),
            other => Err(format!("demo does not support column type {other}")),
        })
        .collect()
}

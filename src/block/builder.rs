use super::assembler::{BlockFlavor, DataBlock};
use super::dictionary::DictionaryTable;
use super::dispatcher::dispatch_cell;
use super::fixed::FixedRegionWriter;
use super::stats::BuildStats;
use super::variable::VariableRegionWriter;
use crate::config;
use crate::errinput;
use crate::schema::Schema;
use crate::value::Cell;

/// Builder lifecycle: a freshly constructed builder is [`State::Created`];
/// the first successful write moves it to [`State::Writing`]; [`finish`] consumes
/// it and there is no way back from [`State::Frozen`] short of dropping it.
///
/// [`finish`]: BlockBuilder::finish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Created,
    Writing,
    Frozen,
}

/// Single-producer assembler for one [`DataBlock`]. Not `Sync`, not
/// `Clone`: a block is written start to finish by one caller, then frozen.
///
/// Construct with [`BlockBuilder::row_major`] or [`BlockBuilder::columnar`];
/// the two differ only in which write method is legal and in how the fixed
/// region is laid out, never in the cell-level encoding (`block::dispatcher`
/// is shared by both).
pub struct BlockBuilder {
    schema: Schema,
    flavor: BlockFlavor,
    state: State,
    num_rows: Option<usize>,
    rows_written: usize,
    columns_written: usize,
    next_column_index: usize,
    fixed: FixedRegionWriter,
    variable: VariableRegionWriter,
    dictionary: DictionaryTable,
    stats: BuildStats,
}

impl BlockBuilder {
    /// A builder that accepts rows one at a time via [`write_row`], with
    /// `numRows` determined by however many rows are eventually written.
    ///
    /// [`write_row`]: BlockBuilder::write_row
    pub fn row_major(schema: Schema) -> BlockBuilder {
        let config = config::get();
        let col_count = schema.col_count();
        BlockBuilder {
            fixed: FixedRegionWriter::with_capacity(schema.row_stride() * 16),
            variable: VariableRegionWriter::with_capacity(config.variable_region_initial_capacity),
            dictionary: DictionaryTable::new(col_count),
            stats: BuildStats::new(),
            schema,
            flavor: BlockFlavor::Row,
            state: State::Created,
            num_rows: None,
            rows_written: 0,
            columns_written: 0,
            next_column_index: 0,
        }
    }

    /// A builder that accepts whole columns via [`write_column`]. `num_rows`
    /// must be fixed up front: columnar offsets are a function of it, so it
    /// cannot be inferred from however many columns happen to get written.
    ///
    /// [`write_column`]: BlockBuilder::write_column
    pub fn columnar(schema: Schema, num_rows: usize) -> BlockBuilder {
        let config = config::get();
        let col_count = schema.col_count();
        let layout = schema.columnar_layout(num_rows);
        BlockBuilder {
            fixed: FixedRegionWriter::with_capacity(layout.total_bytes()),
            variable: VariableRegionWriter::with_capacity(config.variable_region_initial_capacity),
            dictionary: DictionaryTable::new(col_count),
            stats: BuildStats::new(),
            schema,
            flavor: BlockFlavor::Columnar,
            state: State::Created,
            num_rows: Some(num_rows),
            rows_written: 0,
            columns_written: 0,
            next_column_index: 0,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn flavor(&self) -> BlockFlavor {
        self.flavor
    }

    /// Whether at least one row or column has been successfully written.
    pub fn has_pending_writes(&self) -> bool {
        self.state == State::Writing
    }

    /// Build-time telemetry accumulated so far: row/cell counts, dictionary
    /// hit rate, variable-region growth. Not part of the wire format.
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Appends one row, dispatching each cell against the schema's columns
    /// in order; row-major interleaves the fixed region row by row. Only
    /// legal on a [`BlockFlavor::Row`] builder.
    pub fn write_row(&mut self, cells: &[Cell]) -> crate::common::Result<()> {
        if self.flavor != BlockFlavor::Row {
            return errinput!("write_row called on a columnar builder");
        }
        if cells.len() != self.schema.col_count() {
            return errinput!(
                "row has {} cells but schema declares {} columns",
                cells.len(),
                self.schema.col_count()
            );
        }
        let variable_before = self.variable.len();
        for (index, (column, cell)) in self.schema.columns().iter().zip(cells).enumerate() {
            dispatch_cell(
                index,
                column,
                cell,
                &mut self.fixed,
                &mut self.variable,
                &mut self.dictionary,
                &mut self.stats,
            )?;
            self.stats.record_cell();
        }
        self.stats
            .record_variable_append(self.variable.len() - variable_before);
        self.rows_written += 1;
        self.stats.record_row();
        self.state = State::Writing;
        Ok(())
    }

    /// Appends one full column's worth of cells; columnar mode groups the
    /// fixed region column by column, so columns must arrive in ascending
    /// order starting at 0 and each index may be written at most once —
    /// the fixed region is a single append-only buffer with no mechanism
    /// to go back and patch in a skipped or repeated column later.
    /// `cells.len()` must equal the `num_rows` fixed at construction. Only
    /// legal on a [`BlockFlavor::Columnar`] builder.
    pub fn write_column(&mut self, column_index: usize, cells: &[Cell]) -> crate::common::Result<()> {
        if self.flavor != BlockFlavor::Columnar {
            return errinput!("write_column called on a row-major builder");
        }
        if column_index != self.next_column_index {
            return errinput!(
                "columns must be written in ascending order starting at 0: expected column {} next but got {}",
                self.next_column_index,
                column_index
            );
        }
        let num_rows = self.num_rows.expect("columnar builder always sets num_rows");
        if cells.len() != num_rows {
            return errinput!(
                "column {} has {} cells but the block was built for {} rows",
                column_index,
                cells.len(),
                num_rows
            );
        }
        let column = self.schema.get_column(column_index)?.clone();
        let variable_before = self.variable.len();
        for cell in cells {
            dispatch_cell(
                column_index,
                &column,
                cell,
                &mut self.fixed,
                &mut self.variable,
                &mut self.dictionary,
                &mut self.stats,
            )?;
            self.stats.record_cell();
        }
        self.stats
            .record_variable_append(self.variable.len() - variable_before);
        self.columns_written += 1;
        self.next_column_index += 1;
        self.state = State::Writing;
        Ok(())
    }

    /// Freezes the builder into a [`DataBlock`]. For row mode, `numRows` is
    /// whatever was actually written; for columnar mode, every declared
    /// column must have been written exactly once.
    pub fn finish(self) -> crate::common::Result<DataBlock> {
        let num_rows = match self.flavor {
            BlockFlavor::Row => self.rows_written,
            BlockFlavor::Columnar => {
                if self.columns_written != self.schema.col_count() {
                    return errinput!(
                        "columnar block finished with {} of {} columns written",
                        self.columns_written,
                        self.schema.col_count()
                    );
                }
                self.num_rows.expect("columnar builder always sets num_rows")
            }
        };
        let column_names: Vec<String> = self
            .schema
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        let reverse_dictionary = self.dictionary.into_reverse_dictionary(&column_names);
        Ok(DataBlock::new(
            num_rows,
            self.schema,
            self.flavor,
            reverse_dictionary,
            self.fixed.into_bytes(),
            self.variable.into_bytes(),
        ))
    }
}

/// One-shot entry point over the whole row set. Equivalent to creating a
/// [`BlockBuilder::row_major`] builder and calling [`BlockBuilder::write_row`]
/// for each row, but convenient for callers that already hold every row in
/// memory.
pub fn build_from_rows(schema: Schema, rows: &[Vec<Cell>]) -> crate::common::Result<DataBlock> {
    let mut builder = BlockBuilder::row_major(schema);
    for row in rows {
        builder.write_row(row)?;
    }
    builder.finish()
}

/// One-shot entry point over the whole column set. `columns[i]` holds every
/// value of column `i`, in row order; all columns must have the same
/// length, which becomes the block's `numRows`.
pub fn build_from_columns(schema: Schema, columns: &[Vec<Cell>]) -> crate::common::Result<DataBlock> {
    let num_rows = columns.first().map_or(0, Vec::len);
    if columns.iter().any(|c| c.len() != num_rows) {
        return errinput!("all columns must have the same length to share numRows");
    }
    let mut builder = BlockBuilder::columnar(schema, num_rows);
    for (index, column) in columns.iter().enumerate() {
        builder.write_column(index, column)?;
    }
    builder.finish()
}

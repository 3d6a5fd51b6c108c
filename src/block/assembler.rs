use super::dictionary::ReverseDictionary;
use crate::schema::Schema;

/// Which of the two physical layouts a [`DataBlock`]'s fixed region uses.
/// Both flavors share the same variable region and dictionary; only the
/// interleaving of the fixed region differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BlockFlavor {
    /// Fixed-region cells are grouped by row: row 0's columns, then row 1's,
    /// and so on.
    Row,
    /// Fixed-region cells are grouped by column: column 0's `numRows`
    /// entries, then column 1's, and so on. Requires `numRows` to be known
    /// before the first cell is written.
    Columnar,
}

/// A finished, immutable block: the schema it was built against, the two
/// byte regions, the reverse dictionary needed to decode string-bearing
/// columns, and the flavor that explains how to stride the fixed region.
///
/// `DataBlock` carries no decode logic of its own — this crate is an
/// encoder; it is the handle a caller serializes or hands to whatever reads
/// the wire format next.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DataBlock {
    num_rows: usize,
    schema: Schema,
    flavor: BlockFlavor,
    reverse_dictionary: ReverseDictionary,
    fixed_region: Vec<u8>,
    variable_region: Vec<u8>,
}

impl DataBlock {
    pub(super) fn new(
        num_rows: usize,
        schema: Schema,
        flavor: BlockFlavor,
        reverse_dictionary: ReverseDictionary,
        fixed_region: Vec<u8>,
        variable_region: Vec<u8>,
    ) -> DataBlock {
        DataBlock {
            num_rows,
            schema,
            flavor,
            reverse_dictionary,
            fixed_region,
            variable_region,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn flavor(&self) -> BlockFlavor {
        self.flavor
    }

    pub fn reverse_dictionary(&self) -> &ReverseDictionary {
        &self.reverse_dictionary
    }

    pub fn fixed_region(&self) -> &[u8] {
        &self.fixed_region
    }

    pub fn variable_region(&self) -> &[u8] {
        &self.variable_region
    }

    /// Total wire size of the two regions, excluding whatever outer framing
    /// a caller wraps this in — that framing is left entirely to the
    /// caller.
    pub fn encoded_len(&self) -> usize {
        self.fixed_region.len() + self.variable_region.len()
    }
}

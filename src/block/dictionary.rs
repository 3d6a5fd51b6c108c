use crate::config;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// A single column's string interner: forward (string→id) and reverse
/// (id→string) maps, built lazily on first write.
///
/// Ids are dense and reflect first-occurrence order: the `n`-th distinct
/// string seen gets id `n-1`. The reverse map is kept as a plain `Vec`
/// indexed by id, which is both the cheapest possible inverse and, by
/// construction, always a bijection of the forward map.
#[derive(Debug, Default)]
pub struct ColumnDictionary {
    forward: HashMap<String, u32>,
    reverse: Vec<String>,
}

impl ColumnDictionary {
    fn new() -> ColumnDictionary {
        ColumnDictionary {
            forward: HashMap::with_capacity(config::get().dictionary_initial_capacity),
            reverse: Vec::with_capacity(config::get().dictionary_initial_capacity),
        }
    }

    /// Looks up `value`, inserting it with the next dense id if this is its
    /// first occurrence in this column. Returns the id and whether the
    /// lookup was a hit against an existing entry (as opposed to a fresh
    /// insertion), so callers can feed `BuildStats::record_dictionary_lookup`.
    pub fn intern(&mut self, value: &str) -> (u32, bool) {
        if let Some(&id) = self.forward.get(value) {
            return (id, true);
        }
        let id = self.reverse.len() as u32;
        self.forward.insert(value.to_string(), id);
        self.reverse.push(value.to_string());
        log::trace!("dictionary miss: assigned id {id} to '{value}'");
        (id, false)
    }

    pub fn len(&self) -> usize {
        self.reverse.len()
    }
}

/// All per-column dictionaries for one block, indexed by column position
/// rather than keyed by column name: a plain `Vec` slot per column is
/// cheaper than a name-keyed map and avoids repeated string lookups.
/// Columns of different names never collide because each has its own
/// slot; only string-bearing columns ever get a [`ColumnDictionary`]
/// allocated.
#[derive(Debug)]
pub struct DictionaryTable {
    per_column: Vec<Option<ColumnDictionary>>,
}

impl DictionaryTable {
    pub fn new(num_columns: usize) -> DictionaryTable {
        DictionaryTable {
            per_column: (0..num_columns).map(|_| None).collect(),
        }
    }

    pub fn intern(&mut self, column_index: usize, value: &str) -> (u32, bool) {
        self.per_column[column_index]
            .get_or_insert_with(ColumnDictionary::new)
            .intern(value)
    }

    /// Produces the `columnName → (id → string)` reverse lookup needed to
    /// decode string-bearing columns, one entry per such column that was
    /// actually written to. Columns never touched (no rows, or none of
    /// this type) are simply absent.
    pub fn into_reverse_dictionary(self, column_names: &[String]) -> ReverseDictionary {
        let mut map = BTreeMap::new();
        for (index, dict) in self.per_column.into_iter().enumerate() {
            if let Some(dict) = dict {
                map.insert(column_names[index].clone(), dict.reverse);
            }
        }
        ReverseDictionary { columns: map }
    }
}

/// `columnName → (id:int32 → string)`, delivered alongside a [`crate::block::DataBlock`].
/// Only string-bearing columns appear.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReverseDictionary {
    columns: BTreeMap<String, Vec<String>>,
}

impl ReverseDictionary {
    pub fn get(&self, column_name: &str) -> Option<&[String]> {
        self.columns.get(column_name).map(Vec::as_slice)
    }

    pub fn resolve(&self, column_name: &str, id: u32) -> Option<&str> {
        self.get(column_name)?.get(id as usize).map(String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_and_reflect_first_occurrence_order() {
        let mut dict = ColumnDictionary::new();
        assert_eq!(dict.intern("x"), (0, false));
        assert_eq!(dict.intern("y"), (1, false));
        assert_eq!(dict.intern("x"), (0, true));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn different_columns_have_independent_id_spaces() {
        let mut table = DictionaryTable::new(2);
        assert_eq!(table.intern(0, "x"), (0, false));
        assert_eq!(table.intern(1, "x"), (0, false));
        assert_eq!(table.intern(0, "y"), (1, false));
        assert_eq!(table.intern(1, "z"), (1, false));
    }

    #[test]
    fn reverse_dictionary_is_inverse_of_forward_map() {
        let mut table = DictionaryTable::new(2);
        table.intern(0, "x");
        table.intern(0, "y");
        table.intern(0, "x");
        let names = vec!["s".to_string(), "unused".to_string()];
        let reverse = table.into_reverse_dictionary(&names);
        assert_eq!(reverse.resolve("s", 0), Some("x"));
        assert_eq!(reverse.resolve("s", 1), Some("y"));
        assert_eq!(reverse.get("unused"), None);
    }
}

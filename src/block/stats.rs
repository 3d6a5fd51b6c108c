use hdrhistogram::Histogram;

/// Non-wire-affecting telemetry about a block build: row/cell counts,
/// dictionary hit rate, and the shape of variable-region growth. None of
/// this is serialized onto the wire; it exists for callers who want to log
/// or export it the way this codebase instruments its other long-running
/// pipelines.
pub struct BuildStats {
    rows: u64,
    cells: u64,
    dictionary_hits: u64,
    dictionary_misses: u64,
    variable_append_sizes: Histogram<u64>,
}

impl BuildStats {
    pub fn new() -> BuildStats {
        BuildStats {
            rows: 0,
            cells: 0,
            dictionary_hits: 0,
            dictionary_misses: 0,
            // Tracks append sizes from 1 byte to 1 MiB with 2 significant
            // digits of resolution, generous enough for variable-region
            // payloads without ballooning memory.
            variable_append_sizes: Histogram::new_with_bounds(1, 1024 * 1024, 2)
                .expect("static histogram bounds are valid"),
        }
    }

    pub fn record_row(&mut self) {
        self.rows += 1;
    }

    pub fn record_cell(&mut self) {
        self.cells += 1;
    }

    pub fn record_dictionary_lookup(&mut self, was_hit: bool) {
        if was_hit {
            self.dictionary_hits += 1;
        } else {
            self.dictionary_misses += 1;
        }
    }

    pub fn record_variable_append(&mut self, bytes: usize) {
        if bytes > 0 {
            let _ = self.variable_append_sizes.record(bytes as u64);
        }
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn cells(&self) -> u64 {
        self.cells
    }

    /// Fraction of dictionary lookups that hit an existing entry, `None` if
    /// no string-bearing column was ever written.
    pub fn dictionary_hit_rate(&self) -> Option<f64> {
        let total = self.dictionary_hits + self.dictionary_misses;
        if total == 0 {
            return None;
        }
        Some(self.dictionary_hits as f64 / total as f64)
    }

    pub fn median_variable_append_bytes(&self) -> u64 {
        self.variable_append_sizes.value_at_quantile(0.5)
    }

    pub fn max_variable_append_bytes(&self) -> u64 {
        self.variable_append_sizes.max()
    }
}

impl Default for BuildStats {
    fn default() -> Self {
        BuildStats::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_rate_is_none_before_any_lookup() {
        let stats = BuildStats::new();
        assert_eq!(stats.dictionary_hit_rate(), None);
    }

    #[test]
    fn hit_rate_reflects_recorded_lookups() {
        let mut stats = BuildStats::new();
        stats.record_dictionary_lookup(false);
        stats.record_dictionary_lookup(true);
        stats.record_dictionary_lookup(true);
        assert!((stats.dictionary_hit_rate().unwrap() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn variable_append_sizes_track_median_and_max() {
        let mut stats = BuildStats::new();
        for size in [10, 20, 30, 1000] {
            stats.record_variable_append(size);
        }
        assert_eq!(stats.max_variable_append_bytes(), 1000);
        assert!(stats.median_variable_append_bytes() > 0);
    }
}

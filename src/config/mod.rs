//! Allocation hints for the encoder, analogous in spirit to this codebase's
//! `config::config` module (which governs things like page size and data
//! directory for the storage engine). Nothing here affects the wire
//! format, which never changes at runtime — only the initial capacity of
//! buffers the builder grows into, which trims reallocations for callers
//! who know roughly how big their block will be.

use crate::common::constants::{ENV_VAR_DICTIONARY_CAPACITY, ENV_VAR_REGION_CAPACITY};
use once_cell::sync::Lazy;

const DEFAULT_VARIABLE_REGION_INITIAL_CAPACITY: usize = 4096;
const DEFAULT_DICTIONARY_INITIAL_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy)]
pub struct EncoderConfig {
    /// Initial capacity, in bytes, reserved for a block's variable region.
    pub variable_region_initial_capacity: usize,
    /// Initial capacity, in entries, reserved for each column dictionary
    /// the first time it is built.
    pub dictionary_initial_capacity: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            variable_region_initial_capacity: DEFAULT_VARIABLE_REGION_INITIAL_CAPACITY,
            dictionary_initial_capacity: DEFAULT_DICTIONARY_INITIAL_CAPACITY,
        }
    }
}

impl EncoderConfig {
    fn load() -> EncoderConfig {
        let defaults = EncoderConfig::default();
        let built = config::Config::builder()
            .set_default(
                "variable_region_initial_capacity",
                defaults.variable_region_initial_capacity as i64,
            )
            .and_then(|b| {
                b.set_default(
                    "dictionary_initial_capacity",
                    defaults.dictionary_initial_capacity as i64,
                )
            })
            .and_then(|b| {
                b.add_source(config::Environment::default().try_parsing(true))
                    .build()
            });

        let built = match built {
            Ok(built) => built,
            Err(err) => {
                log::warn!("falling back to default encoder config: {err}");
                return defaults;
            }
        };

        let variable_region_initial_capacity = built
            .get_int("variable_region_initial_capacity")
            .unwrap_or(defaults.variable_region_initial_capacity as i64)
            .max(0) as usize;
        let dictionary_initial_capacity = built
            .get_int("dictionary_initial_capacity")
            .unwrap_or(defaults.dictionary_initial_capacity as i64)
            .max(0) as usize;

        // Direct, unprefixed env var names take precedence, matching the
        // names `block::dictionary`/`block::variable` document.
        let variable_region_initial_capacity = std::env::var(ENV_VAR_REGION_CAPACITY)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(variable_region_initial_capacity);
        let dictionary_initial_capacity = std::env::var(ENV_VAR_DICTIONARY_CAPACITY)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(dictionary_initial_capacity);

        EncoderConfig {
            variable_region_initial_capacity,
            dictionary_initial_capacity,
        }
    }
}

static CONFIG: Lazy<EncoderConfig> = Lazy::new(EncoderConfig::load);

/// The process-wide encoder configuration, loaded once from the environment
/// on first use.
pub fn get() -> EncoderConfig {
    *CONFIG
}

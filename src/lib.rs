//! Ala Library
//!
//! A string-keyed trie container supporting exact lookup, prefix enumeration,
//! insert-or-update and removal, with two interchangeable node backends.
//!
//! # Architecture
//!
//! - [`data_structures::ala_trie`]: the trie engines and their shared contract
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`error`]: crate-wide error types
//! - [`telemetry`]: `tracing` subscriber setup

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod telemetry;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::ala_trie::{
    AlaTrie, AlaTrieConfig, AlaTrieError, DenseTrie, EmptyPrefixPolicy, SharedTrie, SparseTrie,
    TriePrint,
};

/// Version information for Ala.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads configuration from `config_path` (if any) and `ALA__*` environment
/// variables, installs the logging subscriber, and returns the loaded
/// configuration so callers can build tries from its `trie` section.
pub fn init<P: AsRef<std::path::Path>>(config_path: Option<P>) -> error::AlaResult<config::AlaConfig> {
    let loader = config::ConfigLoader::new(config_path, config::ENV_PREFIX);
    let config = loader.load()?;
    telemetry::init_logging(&config.log)?;
    tracing::info!(version = VERSION, "Ala initialized");
    Ok(config)
}

//! Trie configuration validation.
//!
//! The `[trie]` section deserializes straight into [`AlaTrieConfig`], the same
//! struct the trie engines are built from.

use super::{ConfigResult, Validate};
use crate::data_structures::ala_trie::AlaTrieConfig;
use crate::error::config::ConfigError;

impl Validate for AlaTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_key_length == 0 {
            return Err(ConfigError::ValidationError(
                "max_key_length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

//! Module `config` implement configuration type for index types.

use serde::Deserialize;

use std::{ffi, path};

use crate::{util::files, Result};

/// Default name for an index instance.
pub const DEFAULT_NAME: &str = "sstrie";
/// Default value for minimum query length, queries shorter than this shall
/// return empty result.
pub const MIN_QUERY_LEN: usize = 0;
/// Default value for minimum suffix length, for suffix-tries suffixes
/// shorter than this are not indexed.
pub const MIN_SUFFIX_LEN: usize = 3;

/// Files looked up by [Config::find], when no explicit location is given.
pub const CONFIG_FILES: [&str; 2] = ["sstrie.toml", ".sstrie.toml"];

/// Configuration for index types.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// name of the index.
    pub name: String,
    /// Queries shorter than this length return empty result, applies
    /// to [SuffixTree][crate::ukkonen::SuffixTree].
    ///
    /// Default: [MIN_QUERY_LEN]
    pub min_query_len: usize,
    /// Suffixes shorter than this length are not indexed, applies to
    /// [SuffixTrie][crate::trie::SuffixTrie] and
    /// [PatriciaSuffixTrie][crate::patricia::PatriciaSuffixTrie].
    ///
    /// Default: [MIN_SUFFIX_LEN]
    pub min_suffix_len: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config::new(DEFAULT_NAME)
    }
}

impl Config {
    /// Create a new configuration value, use the `set_*` methods to add more
    /// configuration.
    pub fn new(name: &str) -> Config {
        Config {
            name: name.to_string(),
            min_query_len: MIN_QUERY_LEN,
            min_suffix_len: MIN_SUFFIX_LEN,
        }
    }

    /// Configure minimum query length.
    pub fn set_min_query_len(&mut self, min_query_len: usize) -> &mut Self {
        self.min_query_len = min_query_len;
        self
    }

    /// Configure minimum suffix length.
    pub fn set_min_suffix_len(&mut self, min_suffix_len: usize) -> &mut Self {
        self.min_suffix_len = min_suffix_len;
        self
    }

    /// Load configuration from toml file at `loc`. Parameters missing in
    /// the file take their default value.
    pub fn from_toml<P>(loc: P) -> Result<Config>
    where
        P: AsRef<path::Path>,
    {
        let config: Config = files::load_toml::<_, TomlConfig>(loc)?.into();
        log::info!(target: "sstrie", "{:?}", config);
        Ok(config)
    }

    /// Find and load configuration, refer [files::find_config] for the lookup
    /// order. Return default configuration if no file is found.
    pub fn find(loc: Option<ffi::OsString>) -> Result<Config> {
        match files::find_config(loc, &CONFIG_FILES)? {
            Some(loc) => Config::from_toml(loc),
            None => Ok(Config::default()),
        }
    }
}

/// Configuration as present in toml file, all parameters are optional.
#[derive(Clone, Default, Deserialize)]
pub struct TomlConfig {
    name: Option<String>,
    min_query_len: Option<usize>,
    min_suffix_len: Option<usize>,
}

impl From<TomlConfig> for Config {
    fn from(cfg: TomlConfig) -> Config {
        let mut config = Config::new(cfg.name.as_deref().unwrap_or(DEFAULT_NAME));
        config
            .set_min_query_len(cfg.min_query_len.unwrap_or(MIN_QUERY_LEN))
            .set_min_suffix_len(cfg.min_suffix_len.unwrap_or(MIN_SUFFIX_LEN));
        config
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::log::LogConfig;

pub mod dictionary;
pub mod log;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub log: LogConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source, `new` uses the process environment
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            dictionary: DictionaryConfig::from_vars(&var),
            log: LogConfig::from_vars(&var),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

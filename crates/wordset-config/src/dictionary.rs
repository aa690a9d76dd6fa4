use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_input_path() -> PathBuf {
    PathBuf::from("allwords_wordset.json")
}

fn default_definitions_path() -> PathBuf {
    PathBuf::from("./definitions.txt")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Word list read by `extract`
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
    /// `word|Definition` file read by `define`
    #[serde(default = "default_definitions_path")]
    pub definitions_path: PathBuf,
}

impl DictionaryConfig {
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let input_path = var("WORDSET_INPUT")
            .map(PathBuf::from)
            .unwrap_or_else(default_input_path);

        let definitions_path = var("WORDSET_DEFINITIONS")
            .map(PathBuf::from)
            .unwrap_or_else(default_definitions_path);

        Self {
            input_path,
            definitions_path,
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            definitions_path: default_definitions_path(),
        }
    }
}

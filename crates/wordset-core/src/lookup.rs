use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::LookupError;
use crate::normalize::{DefaultNormalizer, Normalizer};

/// Split a definitions file line into its word and definitions.
///
/// Returns `None` for lines without a `|` separator.
pub fn parse_line(line: &str) -> Option<(&str, Vec<&str>)> {
    let (word, rest) = line.split_once('|')?;
    Some((word, rest.split('|').collect()))
}

/// All definitions recorded for `word` in a `word|Definition` file, in file order
pub fn definitions(path: &Path, word: &str) -> Result<Vec<String>, LookupError> {
    let io_err = |source| LookupError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let query = DefaultNormalizer.lower_word(word.trim());
    tracing::debug!("Looking up {query:?} in {}", path.display());

    let mut results = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(io_err)?;
        if let Some((head, defs)) = parse_line(&line) {
            if head == query {
                results.extend(defs.into_iter().map(str::to_string));
            }
        }
    }

    Ok(results)
}

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::Value;

use crate::error::ExtractError;
use crate::normalize::{DefaultNormalizer, Normalizer};
use crate::types::Document;

/// Read, decode, parse and shape-check a word list.
///
/// Everything that can fail on the input happens here, so callers never see
/// partial output for a bad file.
pub fn load_document(path: &Path) -> Result<Document, ExtractError> {
    tracing::info!("Loading word list from file: {}", path.display());

    let bytes = fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = std::str::from_utf8(&bytes).map_err(|source| ExtractError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(text).map_err(|source| ExtractError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    let document = Document::from_value(value).map_err(|e| ExtractError::Shape {
        path: path.to_path_buf(),
        detail: e.0,
    })?;

    tracing::info!("Loaded {} word list entries", document.len());
    Ok(document)
}

/// Write one line per (word, definition) pair, returns the number of lines
pub fn write_definitions<W, N>(
    document: &Document,
    normalizer: &N,
    out: &mut W,
) -> Result<usize, ExtractError>
where
    W: Write + ?Sized,
    N: Normalizer + ?Sized,
{
    let mut written = 0;
    let mut skipped = 0;

    for (key, entry) in document.iter() {
        let lines = entry.definition_lines(normalizer);
        if lines.is_empty() {
            tracing::debug!(key, "Skipping entry without word or definitions");
            skipped += 1;
            continue;
        }
        for line in lines {
            writeln!(out, "{line}").map_err(ExtractError::Output)?;
            written += 1;
        }
    }

    tracing::debug!(written, skipped, "Finished writing definitions");
    Ok(written)
}

/// Print `word|Definition` lines for every usable meaning in the file at `path`
pub fn extract_word_defs<W: Write + ?Sized>(path: &Path, out: &mut W) -> Result<(), ExtractError> {
    let document = load_document(path)?;
    let written = write_definitions(&document, &DefaultNormalizer, out)?;
    out.flush().map_err(ExtractError::Output)?;

    tracing::info!("Extracted {} definitions from {}", written, path.display());
    Ok(())
}

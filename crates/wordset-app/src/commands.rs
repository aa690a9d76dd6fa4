use std::io::Write;
use std::path::Path;

use anyhow::Context;
use wordset_config::Config;
use wordset_core::lookup;

use crate::cli::Command;

pub fn run<W: Write>(command: Command, config: &Config, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Extract { path } => {
            let path = path.as_deref().unwrap_or(config.dictionary.input_path.as_path());
            extract(path, out)
        }
        Command::Define { word, file } => {
            let path = file.as_deref().unwrap_or(config.dictionary.definitions_path.as_path());
            define(path, &word, out)
        }
    }
}

/// Extraction prints its own diagnostic so the output format stays `Error processing file: ...`
fn extract<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<()> {
    if let Err(e) = wordset_core::extract_word_defs(path, out) {
        tracing::error!(kind = e.kind(), "extraction failed: {e}");
        writeln!(out, "Error processing file: {e}").context("failed to write diagnostic")?;
        return Err(e).context(format!("extracting {}", path.display()));
    }
    Ok(())
}

fn define<W: Write>(path: &Path, word: &str, out: &mut W) -> anyhow::Result<()> {
    let results = match lookup::definitions(path, word) {
        Ok(results) => results,
        Err(e) => {
            tracing::error!("definition lookup failed: {e}");
            writeln!(out, "Error reading definitions: {e}")?;
            return Err(e.into());
        }
    };

    if results.is_empty() {
        writeln!(out, "No definition found.")?;
    } else {
        for result in results {
            writeln!(out, " * {result}")?;
        }
    }
    Ok(())
}

//! Literal and limits file loading.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use litmatch_core::{LimitsConfig, Literal, RawLiteralError, parse_literals};
use tracing::debug;

/// Error loading a CLI input file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid JSON in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid literal #{index} in '{}': {source}", path.display())]
    Literal {
        path: PathBuf,
        index: usize,
        source: RawLiteralError,
    },
}

/// Load a JSON literal file. `-` reads stdin.
pub fn load_literals(path: &Path) -> Result<Vec<Literal>, ConfigError> {
    let text = read_input(path)?;
    let raw = parse_literals(&text).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let lits = raw
        .into_iter()
        .enumerate()
        .map(|(index, r)| {
            r.into_literal().map_err(|source| ConfigError::Literal {
                path: path.to_path_buf(),
                index,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(path = %path.display(), literals = lits.len(), "literals loaded");
    Ok(lits)
}

/// Load limits from a JSON file, or the defaults when no file is given.
pub fn load_limits(path: Option<&Path>) -> Result<LimitsConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(LimitsConfig::default());
    };

    let text = read_input(path)?;
    LimitsConfig::from_json(&text).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read_input(path: &Path) -> Result<String, ConfigError> {
    let read_err = |source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(read_err)
}

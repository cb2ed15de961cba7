pub mod build;
pub mod dump;
pub mod flood;
pub mod loader;

#[cfg(test)]
mod loader_tests;

use std::io;
use std::path::PathBuf;

use litmatch_build::BuildError;
use litmatch_bytecode::BytecodeError;

use loader::ConfigError;

/// Errors reported by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("build failed: {0}")]
    Build(#[from] BuildError),

    #[error("invalid bytecode: {0}")]
    Bytecode(#[from] BytecodeError),

    #[error("no matcher built: the selected engine declined the literal set")]
    Declined,

    #[error("literal file '{0}' holds no literals")]
    NoLiterals(PathBuf),

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

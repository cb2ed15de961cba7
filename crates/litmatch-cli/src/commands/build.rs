use std::path::PathBuf;

use litmatch_build::engines::ReferenceEngines;
use litmatch_build::{BuildCtx, BytecodeObject, SizeTable, TargetInfo, build};
use litmatch_bytecode::dump;
use tracing::info;

use super::CliError;
use super::loader::{load_limits, load_literals};

pub struct BuildArgs {
    pub literals_path: PathBuf,
    pub limits_path: Option<PathBuf>,
    pub make_small: bool,
    pub target: TargetInfo,
    pub output: Option<PathBuf>,
}

pub fn run(args: BuildArgs) -> Result<(), CliError> {
    let object = build_object(&args)?;

    if let Some(path) = &args.output {
        std::fs::write(path, object.as_bytes()).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), size = object.len(), "bytecode written");
    }

    print!("{}", dump(&object, &SizeTable::REFERENCE));
    Ok(())
}

/// Load inputs and build with the reference engines.
pub fn build_object(args: &BuildArgs) -> Result<BytecodeObject, CliError> {
    let lits = load_literals(&args.literals_path)?;
    if lits.is_empty() {
        return Err(CliError::NoLiterals(args.literals_path.clone()));
    }
    let limits = load_limits(args.limits_path.as_deref())?;

    let ctx = BuildCtx::new(&limits, &args.target);
    let engines = ReferenceEngines::reference();
    build(&lits, args.make_small, &ctx, &engines)?.ok_or(CliError::Declined)
}

use std::path::PathBuf;

use litmatch_build::{FloodBound, TargetInfo, flood_prone_suffix_len};

use super::CliError;
use super::loader::load_limits;

pub struct FloodArgs {
    pub count: usize,
    pub limits_path: Option<PathBuf>,
    pub target: TargetInfo,
}

pub fn run(args: FloodArgs) -> Result<(), CliError> {
    println!("{}", flood_bound(&args)?);
    Ok(())
}

pub fn flood_bound(args: &FloodArgs) -> Result<FloodBound, CliError> {
    let limits = load_limits(args.limits_path.as_deref())?;
    Ok(flood_prone_suffix_len(args.count, &limits, &args.target))
}

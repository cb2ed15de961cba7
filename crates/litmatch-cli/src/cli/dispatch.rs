//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but are populated from clap;
//! `Into<*Args>` resolves CLI-only choices such as the target.

use std::path::PathBuf;

use clap::ArgMatches;
use litmatch_core::TargetInfo;

use crate::commands::build::BuildArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::flood::FloodArgs;

pub struct BuildParams {
    pub literals_path: PathBuf,
    pub limits: Option<PathBuf>,
    pub small: bool,
    pub wide_simd: bool,
    pub output: Option<PathBuf>,
}

impl BuildParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            literals_path: required_path(m, "literals_path"),
            limits: m.get_one::<PathBuf>("limits").cloned(),
            small: m.get_flag("small"),
            wide_simd: m.get_flag("wide_simd"),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<BuildParams> for BuildArgs {
    fn from(p: BuildParams) -> Self {
        Self {
            literals_path: p.literals_path,
            limits_path: p.limits,
            make_small: p.small,
            target: resolve_target(p.wide_simd),
            output: p.output,
        }
    }
}

pub struct DumpParams {
    pub bytecode_path: PathBuf,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            bytecode_path: required_path(m, "bytecode_path"),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            bytecode_path: p.bytecode_path,
        }
    }
}

pub struct FloodParams {
    pub count: usize,
    pub limits: Option<PathBuf>,
    pub wide_simd: bool,
}

impl FloodParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            count: m.get_one::<usize>("count").copied().unwrap_or_default(),
            limits: m.get_one::<PathBuf>("limits").cloned(),
            wide_simd: m.get_flag("wide_simd"),
        }
    }
}

impl From<FloodParams> for FloodArgs {
    fn from(p: FloodParams) -> Self {
        Self {
            count: p.count,
            limits_path: p.limits,
            target: resolve_target(p.wide_simd),
        }
    }
}

/// Clap enforces `required(true)`; the fallback only guards direct callers.
fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}

/// `--wide-simd` forces the wide layout; otherwise the host decides.
fn resolve_target(wide_simd: bool) -> TargetInfo {
    if wide_simd {
        TargetInfo::new(true)
    } else {
        TargetInfo::host()
    }
}

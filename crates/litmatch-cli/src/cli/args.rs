//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! so `build` and `flood` read limits and target flags the same way.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// JSON literal file (positional). `-` reads stdin.
pub fn literals_path_arg() -> Arg {
    Arg::new("literals_path")
        .value_name("LITERALS")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("JSON literal file, or '-' for stdin")
}

/// Bytecode object file (positional).
pub fn bytecode_path_arg() -> Arg {
    Arg::new("bytecode_path")
        .value_name("BYTECODE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Bytecode object file")
}

/// Literal count (positional).
pub fn count_arg() -> Arg {
    Arg::new("count")
        .value_name("COUNT")
        .value_parser(value_parser!(usize))
        .required(true)
        .help("Number of literals in the matcher")
}

/// Limits file (--limits).
pub fn limits_arg() -> Arg {
    Arg::new("limits")
        .long("limits")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON limits file (missing fields take defaults)")
}

/// Prefer table size over scan speed (--small).
pub fn small_arg() -> Arg {
    Arg::new("small")
        .long("small")
        .action(ArgAction::SetTrue)
        .help("Prefer a smaller table over scan speed")
}

/// Force the wide-SIMD layout (--wide-simd).
pub fn wide_simd_arg() -> Arg {
    Arg::new("wide_simd")
        .long("wide-simd")
        .action(ArgAction::SetTrue)
        .help("Assume a wide-SIMD target instead of detecting the host")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write the bytecode object to FILE")
}

//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("litmatch")
        .about("Build and inspect literal matcher bytecode")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(build_command())
        .subcommand(dump_command())
        .subcommand(flood_command())
}

/// Build a matcher from a literal file.
pub fn build_command() -> Command {
    Command::new("build")
        .about("Build a literal matcher and show its bytecode")
        .override_usage("  litmatch build <LITERALS> [--limits FILE] [--small] [--wide-simd] [-o FILE]")
        .after_help(
            r#"EXAMPLES:
  litmatch build lits.json                 # build and dump
  litmatch build lits.json -o lits.bc      # also write the object
  litmatch build lits.json --small         # smaller multi-literal table
  cat lits.json | litmatch build -         # literals from stdin

LITERAL FILE:
  [{"id": 1, "s": "foo"}, {"id": 2, "bytes": [0, 255], "nocase": true}]"#,
        )
        .arg(literals_path_arg())
        .arg(limits_arg())
        .arg(small_arg())
        .arg(wide_simd_arg())
        .arg(output_arg())
}

/// Dump a bytecode object file.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show a bytecode object")
        .after_help(
            r#"EXAMPLES:
  litmatch dump lits.bc"#,
        )
        .arg(bytecode_path_arg())
}

/// Report the flood-prone suffix length.
pub fn flood_command() -> Command {
    Command::new("flood")
        .about("Show the repeated-byte run length a matcher tolerates")
        .after_help(
            r#"EXAMPLES:
  litmatch flood 1                      # unbounded
  litmatch flood 64 --wide-simd         # small-set SIMD on wide targets"#,
        )
        .arg(count_arg())
        .arg(limits_arg())
        .arg(wide_simd_arg())
}

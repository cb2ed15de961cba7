//! Tests for CLI argument parsing and params extraction.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{build_command, dump_command, flood_command};
use crate::commands::build::BuildArgs;
use crate::commands::flood::FloodArgs;

#[test]
fn build_extracts_all_flags() {
    let m = build_command()
        .try_get_matches_from([
            "build",
            "lits.json",
            "--limits",
            "limits.json",
            "--small",
            "--wide-simd",
            "-o",
            "out.bc",
        ])
        .unwrap();
    let params = BuildParams::from_matches(&m);

    assert_eq!(params.literals_path, PathBuf::from("lits.json"));
    assert_eq!(params.limits, Some(PathBuf::from("limits.json")));
    assert!(params.small);
    assert!(params.wide_simd);
    assert_eq!(params.output, Some(PathBuf::from("out.bc")));

    let args: BuildArgs = params.into();
    assert!(args.make_small);
    assert!(args.target.has_wide_simd());
}

#[test]
fn build_defaults() {
    let m = build_command().try_get_matches_from(["build", "-"]).unwrap();
    let params = BuildParams::from_matches(&m);

    assert_eq!(params.literals_path, PathBuf::from("-"));
    assert_eq!(params.limits, None);
    assert!(!params.small);
    assert!(!params.wide_simd);
    assert_eq!(params.output, None);
}

#[test]
fn build_requires_literals() {
    let result = build_command().try_get_matches_from(["build"]);
    assert!(result.is_err());
}

#[test]
fn dump_requires_bytecode() {
    assert!(dump_command().try_get_matches_from(["dump"]).is_err());

    let m = dump_command().try_get_matches_from(["dump", "lits.bc"]).unwrap();
    assert_eq!(DumpParams::from_matches(&m).bytecode_path, PathBuf::from("lits.bc"));
}

#[test]
fn dump_rejects_build_flags() {
    let result = dump_command().try_get_matches_from(["dump", "lits.bc", "--small"]);
    assert!(result.is_err());
}

#[test]
fn flood_parses_count() {
    let m = flood_command()
        .try_get_matches_from(["flood", "64", "--wide-simd"])
        .unwrap();
    let params = FloodParams::from_matches(&m);

    assert_eq!(params.count, 64);
    assert!(params.wide_simd);

    let args: FloodArgs = params.into();
    assert_eq!(args.count, 64);
    assert!(args.target.has_wide_simd());
}

#[test]
fn flood_rejects_non_numeric_count() {
    let result = flood_command().try_get_matches_from(["flood", "many"]);
    assert!(result.is_err());
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["litmatch"]);
    assert!(result.is_err());
}

#[test]
fn cli_routes_subcommands() {
    let m = build_cli()
        .try_get_matches_from(["litmatch", "flood", "3"])
        .unwrap();
    let (name, sub) = m.subcommand().unwrap();

    assert_eq!(name, "flood");
    assert_eq!(FloodParams::from_matches(sub).count, 3);
}

#[test]
fn cli_is_well_formed() {
    build_cli().debug_assert();
}

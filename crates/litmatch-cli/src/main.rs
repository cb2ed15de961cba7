mod cli;
mod commands;

use cli::{BuildParams, DumpParams, FloodParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("build", m)) => {
            let params = BuildParams::from_matches(m);
            commands::build::run(params.into())
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into())
        }
        Some(("flood", m)) => {
            let params = FloodParams::from_matches(m);
            commands::flood::run(params.into())
        }
        _ => unreachable!("clap should have caught this"),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr. `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

//! Tracing setup for the command-line binary
//!
//! Log output goes to stderr so it never mixes with piped command output.
//! `SHOWROOM_LOG` takes filter directives (e.g. `showroom=trace`) and
//! overrides the level picked from `-v`/`-q`.

use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Environment variable holding tracing filter directives
pub const LOG_ENV: &str = "SHOWROOM_LOG";

/// Level for the `showroom` target given the global flags
pub fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

fn build_filter(level: LevelFilter, directives: Option<&str>) -> EnvFilter {
    match directives {
        Some(d) if !d.trim().is_empty() => EnvFilter::builder()
            .with_default_directive(level.into())
            .parse_lossy(d),
        _ => EnvFilter::default().add_directive(level.into()),
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn setup_tracing(verbose: bool, quiet: bool) {
    let directives = std::env::var(LOG_ENV).ok();
    let filter = build_filter(level_for(verbose, quiet), directives.as_deref());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .try_init();
}

//! Diagnostic logging setup
//!
//! `tracing` is initialized once per process. The default directive is
//! `tally=info` (`tally=debug` when verbose); a `RUST_LOG` value replaces it.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Where diagnostic output goes
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// Standard error, for one-shot CLI commands
    Stderr,
    /// Append to a file, so the TUI's alternate screen stays clean
    File(&'a Path),
}

/// The filter directive used when `RUST_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "tally=debug"
    } else {
        "tally=info"
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber; later calls are no-ops
pub fn init_tracing(verbose: bool, target: LogTarget<'_>) {
    TRACING_INIT.call_once(|| {
        let filter = build_filter(verbose);

        match target {
            LogTarget::Stderr => {
                let _ = fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .try_init();
            }
            LogTarget::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path);
                // without a writable log file the TUI runs unlogged
                if let Ok(file) = file {
                    let _ = fmt()
                        .with_env_filter(filter)
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .try_init();
                }
            }
        }
    });
}

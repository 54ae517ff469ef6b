//! Tracing setup
//!
//! The filter comes from `EXPENSE_LOG` when set, otherwise from the
//! settings. The TUI owns the terminal, so in that mode log lines go to a
//! file instead of stderr.

use std::fs::File;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "EXPENSE_LOG";

static TRACING_INIT: Once = Once::new();

/// Where log output should go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber (only the first call has any effect)
pub fn init_tracing(default_directive: &str, target: LogTarget<'_>) {
    TRACING_INIT.call_once(|| {
        let filter = build_filter(default_directive);

        match target {
            LogTarget::Stderr => {
                let _ = fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .try_init();
            }
            // No log file, no logging: stderr would corrupt the TUI
            LogTarget::File(path) => {
                if let Ok(file) = File::create(path) {
                    let _ = fmt()
                        .with_env_filter(filter)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .try_init();
                }
            }
        }

        tracing::debug!("tracing initialized");
    });
}

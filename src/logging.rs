//! File-backed logging setup.
//!
//! The game owns the terminal in raw mode, so log output cannot share
//! stdout/stderr. When `PONG_LOG` names a file, logs go there; otherwise
//! logging stays disabled. `RUST_LOG` overrides the default `info` filter.
//!
//! Only lifecycle events are logged (startup, terminal capabilities, session
//! start/end); nothing runs inside the tick path.

use std::env;
use std::fs::File;

use anyhow::{Context, Result};
use log::LevelFilter;

/// Environment variable naming the log file.
pub const LOG_FILE_ENV: &str = "PONG_LOG";

/// Initialize logging if `PONG_LOG` is set.
///
/// Returns whether logging was enabled. Must run before the terminal enters
/// raw mode so a failure to create the file can still be printed.
pub fn init() -> Result<bool> {
    let Some(path) = env::var_os(LOG_FILE_ENV) else {
        return Ok(false);
    };

    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.to_string_lossy()))?;

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(true)
}

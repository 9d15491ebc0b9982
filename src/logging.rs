//! Diagnostic logging.
//!
//! The terminal belongs to the reader while a session runs, so log output
//! only goes to the file named by `RQ_LOG_FILE`. `RQ_LOG` holds an
//! `EnvFilter` directive (default `info`). Without a log file no subscriber
//! is installed and the `tracing` macros cost next to nothing.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::engine::error::RsvpError;

pub const LOG_FILE_VAR: &str = "RQ_LOG_FILE";
pub const LOG_FILTER_VAR: &str = "RQ_LOG";

pub fn init() -> Result<(), RsvpError> {
    let Some(path) = std::env::var_os(LOG_FILE_VAR) else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(RsvpError::io("opening log file"))?;

    let filter =
        EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

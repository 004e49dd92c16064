//! `tracing` setup for the binary.
//!
//! The interactive game owns the terminal, so its logs only go to a file
//! (`--log` / `FALLING_BALLS_LOG_PATH`). Headless runs fall back to stderr,
//! keeping stdout for the JSON snapshot. The filter defaults to `info` and can
//! be overridden through `FALLING_BALLS_LOG`.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::ENV_LOG;

pub fn init(log_path: Option<&Path>, stderr_fallback: bool) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(ENV_LOG)
        .from_env_lossy();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match log_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None if stderr_fallback => builder.with_writer(std::io::stderr).try_init(),
        None => return Ok(()),
    };
    installed.map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

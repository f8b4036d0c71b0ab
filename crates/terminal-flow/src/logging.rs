//! File logging, enabled through the `TERMINAL_FLOW_LOG` environment variable.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{WrapErr, eyre};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `debug` or
/// `terminal_flow=trace,terminal_flow_art=warn`.
pub const LOG_ENV: &str = "TERMINAL_FLOW_LOG";

/// Install the global subscriber if `TERMINAL_FLOW_LOG` is set.
///
/// The terminal belongs to the animation, so logs only ever go to a file:
/// `log_file` if given, otherwise the platform data directory. Returns the
/// log path when logging was enabled.
pub fn init(log_file: Option<&Path>) -> color_eyre::Result<Option<PathBuf>> {
    let Ok(directives) = std::env::var(LOG_ENV) else {
        return Ok(None);
    };
    let filter = EnvFilter::try_new(&directives)
        .wrap_err_with(|| format!("invalid {LOG_ENV} filter '{directives}'"))?;

    let path = match log_file {
        Some(path) => path.to_path_buf(),
        None => terminal_flow_config::default_log_path()
            .ok_or_else(|| eyre!("no data directory for the log file, pass --log-file"))?,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("cannot create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("cannot open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| eyre!("cannot install log subscriber: {err}"))?;

    Ok(Some(path))
}

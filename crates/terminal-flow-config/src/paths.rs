//! Platform locations.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const APP_NAME: &str = "terminal-flow";

/// Art directory tried first, relative to the working directory.
const LOCAL_TEXT_DIR: &str = "text";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// `<config dir>/terminal-flow/config.toml`, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// `<data dir>/terminal-flow.log`, if a home directory is known.
pub fn default_log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("terminal-flow.log"))
}

/// `./text` when it exists, otherwise `<data dir>/art`.
pub fn default_text_dir() -> PathBuf {
    let local = Path::new(LOCAL_TEXT_DIR);
    if local.is_dir() {
        return local.to_path_buf();
    }
    project_dirs()
        .map(|dirs| dirs.data_dir().join("art"))
        .unwrap_or_else(|| local.to_path_buf())
}

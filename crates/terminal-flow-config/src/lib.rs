//! Configuration for terminal-flow.
//!
//! Settings come from three places, highest priority first: command-line
//! flags, the TOML config file, and built-in defaults. Each source is a
//! [`SettingsLayer`]; [`Settings::resolve`] stacks two layers on top of the
//! defaults and validates the result.

mod error;
mod layer;
mod paths;
mod settings;

pub use error::ConfigError;
pub use layer::{ColorDepthSetting, SettingsLayer, load};
pub use paths::{default_config_path, default_log_path, default_text_dir};
pub use settings::{DEFAULT_CYCLE_SECS, Settings};

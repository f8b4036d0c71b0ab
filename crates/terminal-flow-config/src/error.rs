use std::path::PathBuf;

/// Errors raised while loading or validating settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Speed must be a finite number above zero.
    #[error("invalid speed {0}: must be a positive number")]
    InvalidSpeed(f64),

    /// Cycle interval must be a finite number of seconds above zero.
    #[error("invalid cycle interval {0}: must be a positive number of seconds")]
    InvalidCycle(f64),

    /// A config file named with `--config` does not exist.
    #[error("config file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// The config file exists but could not be read.
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or holds unknown values.
    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

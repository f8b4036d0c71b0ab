//! One source of settings: the config file or the command line.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use terminal_flow_core::{AnimationMode, ColorDepth, FpsTier, Palette, ParseNameError};

use crate::{ConfigError, default_config_path};

/// Color depth choice: detect from the environment, or force one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ColorDepthSetting {
    #[default]
    Auto,
    Fixed(ColorDepth),
}

impl fmt::Display for ColorDepthSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorDepthSetting::Auto => f.write_str("auto"),
            ColorDepthSetting::Fixed(depth) => write!(f, "{depth}"),
        }
    }
}

impl FromStr for ColorDepthSetting {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(ColorDepthSetting::Auto);
        }
        s.parse()
            .map(ColorDepthSetting::Fixed)
            .map_err(|_| ParseNameError {
                kind: "color depth",
                value: s.to_string(),
                expected: "auto, truecolor, 256, 8",
            })
    }
}

impl TryFrom<String> for ColorDepthSetting {
    type Error = ParseNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Partial settings; `None` means "not given here".
///
/// Field names double as the config file keys:
///
/// ```toml
/// mode = "spin"
/// color = "cyan"
/// speed = 1.5
/// fps = "md"        # or 30
/// cycle = 45        # seconds
/// text_dir = "~/art"
/// color_depth = "auto"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsLayer {
    pub mode: Option<AnimationMode>,
    pub color: Option<Palette>,
    pub speed: Option<f64>,
    pub fps: Option<FpsTier>,
    /// Seconds between automatic file changes.
    pub cycle: Option<f64>,
    pub text_dir: Option<PathBuf>,
    pub color_depth: Option<ColorDepthSetting>,
}

impl SettingsLayer {
    /// Fill the gaps in `self` from `lower`.
    pub fn or(self, lower: SettingsLayer) -> SettingsLayer {
        SettingsLayer {
            mode: self.mode.or(lower.mode),
            color: self.color.or(lower.color),
            speed: self.speed.or(lower.speed),
            fps: self.fps.or(lower.fps),
            cycle: self.cycle.or(lower.cycle),
            text_dir: self.text_dir.or(lower.text_dir),
            color_depth: self.color_depth.or(lower.color_depth),
        }
    }

    /// Parse a layer from TOML text.
    pub fn from_toml(text: &str, path: &Path) -> Result<SettingsLayer, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load the config file layer.
///
/// With `explicit` set the file must exist. Otherwise the default location
/// is used, and a missing file yields an empty layer.
pub fn load(explicit: Option<&Path>) -> Result<SettingsLayer, ConfigError> {
    let path = match explicit {
        Some(path) if !path.is_file() => return Err(ConfigError::MissingFile(path.to_path_buf())),
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.is_file() => path,
            _ => {
                tracing::debug!("no config file, using defaults");
                return Ok(SettingsLayer::default());
            }
        },
    };

    let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let layer = SettingsLayer::from_toml(&text, &path)?;
    tracing::info!(path = %path.display(), "loaded config file");
    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_file() {
        let text = r#"
            mode = "pulse"
            color = "grey"
            speed = 2.5
            fps = 30
            cycle = 12
            text_dir = "/srv/art"
            color_depth = "8"
        "#;
        let layer = SettingsLayer::from_toml(text, Path::new("config.toml")).unwrap();
        assert_eq!(
            layer,
            SettingsLayer {
                mode: Some(AnimationMode::Pulse),
                color: Some(Palette::Gray),
                speed: Some(2.5),
                fps: Some(FpsTier::Medium),
                cycle: Some(12.0),
                text_dir: Some(PathBuf::from("/srv/art")),
                color_depth: Some(ColorDepthSetting::Fixed(ColorDepth::Basic8)),
            }
        );
    }

    #[test]
    fn test_fps_by_name() {
        let layer = SettingsLayer::from_toml("fps = \"hd\"", Path::new("c.toml")).unwrap();
        assert_eq!(layer.fps, Some(FpsTier::High));
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        let path = Path::new("c.toml");
        assert!(matches!(
            SettingsLayer::from_toml("mode = \"zigzag\"", path),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            SettingsLayer::from_toml("colour = \"red\"", path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_or_prefers_upper_layer() {
        let upper = SettingsLayer {
            speed: Some(3.0),
            ..Default::default()
        };
        let lower = SettingsLayer {
            speed: Some(0.5),
            color: Some(Palette::Blue),
            ..Default::default()
        };
        let merged = upper.or(lower);
        assert_eq!(merged.speed, Some(3.0));
        assert_eq!(merged.color, Some(Palette::Blue));
        assert_eq!(merged.mode, None);
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flow.toml");
        fs::write(&path, "color = \"orange\"\n").unwrap();
        let layer = load(Some(&path)).unwrap();
        assert_eq!(layer.color, Some(Palette::Orange));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            load(Some(&path)),
            Err(ConfigError::MissingFile(_))
        ));
    }

    #[test]
    fn test_color_depth_setting() {
        assert_eq!("auto".parse::<ColorDepthSetting>(), Ok(ColorDepthSetting::Auto));
        assert_eq!(
            "truecolor".parse::<ColorDepthSetting>(),
            Ok(ColorDepthSetting::Fixed(ColorDepth::TrueColor))
        );
        assert!("16".parse::<ColorDepthSetting>().is_err());
    }
}

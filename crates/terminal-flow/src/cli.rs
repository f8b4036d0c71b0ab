//! Command-line interface.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use terminal_flow_config::{ColorDepthSetting, SettingsLayer};
use terminal_flow_core::{AnimationMode, FpsTier, Palette};

/// Animate color gradients over ASCII art.
///
/// Keys: ←/→ previous/next file, c cycle palette, m cycle mode, q or Esc quit.
#[derive(Parser, Debug, Default)]
#[command(name = "terminal-flow", version, about)]
#[command(group(ArgGroup::new("fps").args(["uld", "ld", "md", "hd"])))]
pub struct Cli {
    /// Animation mode: wave, spin, pulse, flux or morph.
    #[arg(long)]
    pub mode: Option<AnimationMode>,

    /// Color palette: rainbow, red, blue, green, yellow, purple, cyan, gray, pink or orange.
    #[arg(long)]
    pub color: Option<Palette>,

    /// Animation speed multiplier (must be above zero).
    #[arg(long, allow_negative_numbers = true)]
    pub speed: Option<f64>,

    /// Art file to start with (`.txt` is appended if missing).
    #[arg(long, value_name = "NAME")]
    pub file: Option<String>,

    /// Change file automatically every N seconds.
    #[arg(
        long,
        value_name = "SECONDS",
        num_args = 0..=1,
        default_missing_value = "30",
        allow_negative_numbers = true
    )]
    pub cycle: Option<f64>,

    /// Ultra low frame rate (5 fps).
    #[arg(long)]
    pub uld: bool,

    /// Low frame rate (10 fps, default).
    #[arg(long)]
    pub ld: bool,

    /// Medium frame rate (30 fps).
    #[arg(long)]
    pub md: bool,

    /// High frame rate (60 fps).
    #[arg(long)]
    pub hd: bool,

    /// Directory holding the `.txt` art files.
    #[arg(long, value_name = "DIR")]
    pub text_dir: Option<PathBuf>,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color depth: auto, truecolor, 256 or 8.
    #[arg(long, value_name = "DEPTH")]
    pub color_depth: Option<ColorDepthSetting>,

    /// List the available art files and exit.
    #[arg(long)]
    pub list: bool,

    /// Write logs here when TERMINAL_FLOW_LOG is set.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The frame-rate tier picked by the flags, if any.
    pub fn fps(&self) -> Option<FpsTier> {
        match (self.uld, self.ld, self.md, self.hd) {
            (true, ..) => Some(FpsTier::UltraLow),
            (_, true, ..) => Some(FpsTier::Low),
            (_, _, true, _) => Some(FpsTier::Medium),
            (.., true) => Some(FpsTier::High),
            _ => None,
        }
    }

    /// The settings given on the command line.
    pub fn layer(&self) -> SettingsLayer {
        SettingsLayer {
            mode: self.mode,
            color: self.color,
            speed: self.speed,
            fps: self.fps(),
            cycle: self.cycle,
            text_dir: self.text_dir.clone(),
            color_depth: self.color_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use terminal_flow_config::{ConfigError, DEFAULT_CYCLE_SECS, Settings};

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("terminal-flow").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_flags() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.layer(), SettingsLayer::default());
    }

    #[test]
    fn test_negative_speed_is_config_error() {
        let cli = parse(&["--speed", "-1"]).unwrap();
        let result = Settings::resolve(cli.layer(), SettingsLayer::default());
        assert!(matches!(result, Err(ConfigError::InvalidSpeed(s)) if s == -1.0));
    }

    #[test]
    fn test_cycle_without_value_defaults_to_thirty() {
        let cli = parse(&["--cycle"]).unwrap();
        assert_eq!(cli.cycle, Some(DEFAULT_CYCLE_SECS));
        let cli = parse(&["--cycle", "5"]).unwrap();
        assert_eq!(cli.cycle, Some(5.0));
        let cli = parse(&["--cycle", "--md"]).unwrap();
        assert_eq!(cli.cycle, Some(30.0));
        assert_eq!(cli.fps(), Some(FpsTier::Medium));
    }

    #[test]
    fn test_conflicting_fps_flags_are_rejected() {
        assert!(parse(&["--uld", "--hd"]).is_err());
        assert_eq!(parse(&["--hd"]).unwrap().fps(), Some(FpsTier::High));
        assert_eq!(parse(&[]).unwrap().fps(), None);
    }

    #[test]
    fn test_names_are_parsed() {
        let cli = parse(&["--mode", "morph", "--color", "Prism", "--color-depth", "8"]).unwrap();
        assert_eq!(cli.mode, Some(AnimationMode::Morph));
        assert_eq!(cli.color, Some(Palette::Rainbow));
        assert!(matches!(cli.color_depth, Some(ColorDepthSetting::Fixed(_))));
        assert!(parse(&["--mode", "zigzag"]).is_err());
    }
}

//! Terminal checks made before the animation starts.

use std::env;
use std::io::{self, IsTerminal};

use terminal_flow_config::ColorDepthSetting;
use terminal_flow_core::ColorDepth;

/// Why the terminal cannot show the animation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TerminalCapabilityError {
    #[error("terminal-flow needs an interactive terminal (stdin and stdout must be a TTY)")]
    NotATty,

    #[error("terminal type '{0}' cannot display the animation")]
    DumbTerminal(String),

    #[error("NO_COLOR is set; pass --color-depth to animate anyway")]
    NoColor,
}

/// Environment facts the detection depends on.
#[derive(Debug, Clone, Default)]
struct DetectInputs {
    stdin_tty: bool,
    stdout_tty: bool,
    term: String,
    colorterm: String,
    no_color: bool,
}

impl DetectInputs {
    fn from_env() -> Self {
        Self {
            stdin_tty: io::stdin().is_terminal(),
            stdout_tty: io::stdout().is_terminal(),
            term: env::var("TERM").unwrap_or_default(),
            colorterm: env::var("COLORTERM").unwrap_or_default(),
            no_color: env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        }
    }
}

/// Check the terminal and settle the color depth.
pub fn detect(setting: ColorDepthSetting) -> Result<ColorDepth, TerminalCapabilityError> {
    detect_from_inputs(&DetectInputs::from_env(), setting)
}

fn detect_from_inputs(
    env: &DetectInputs,
    setting: ColorDepthSetting,
) -> Result<ColorDepth, TerminalCapabilityError> {
    if !env.stdin_tty || !env.stdout_tty {
        return Err(TerminalCapabilityError::NotATty);
    }

    let term = env.term.trim();
    if term.is_empty() || term == "dumb" {
        return Err(TerminalCapabilityError::DumbTerminal(term.to_string()));
    }

    let depth = match setting {
        ColorDepthSetting::Fixed(depth) => depth,
        ColorDepthSetting::Auto if env.no_color => return Err(TerminalCapabilityError::NoColor),
        ColorDepthSetting::Auto => {
            let colorterm = env.colorterm.to_ascii_lowercase();
            if colorterm.contains("truecolor") || colorterm.contains("24bit") {
                ColorDepth::TrueColor
            } else if term.contains("256") {
                ColorDepth::Ansi256
            } else {
                ColorDepth::Basic8
            }
        }
    };
    tracing::debug!(%depth, term, "terminal color depth");
    Ok(depth)
}

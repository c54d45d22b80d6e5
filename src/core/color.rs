//! ANSI color mapping and color-mode resolution

use super::error::LoggerError;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Escape sequence that restores the default terminal color
pub const RESET: &str = "\x1b[0m";

/// Escape sequences written around a colored line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub prefix: &'static str,
    pub postfix: &'static str,
}

impl ColorPair {
    const fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            postfix: RESET,
        }
    }

    const PLAIN: ColorPair = ColorPair {
        prefix: "",
        postfix: "",
    };

    /// Color pair for `level`
    #[inline]
    pub fn for_level(level: LogLevel) -> Self {
        LEVEL_COLORS[level.index()]
    }

    #[inline]
    pub fn is_plain(&self) -> bool {
        self.prefix.is_empty()
    }
}

/// Indexed by `LogLevel` discriminant
pub static LEVEL_COLORS: [ColorPair; 6] = [
    ColorPair::new("\x1b[34m"), // trace: blue
    ColorPair::new("\x1b[32m"), // debug: green
    ColorPair::PLAIN,           // info
    ColorPair::new("\x1b[33m"), // warn: yellow
    ColorPair::new("\x1b[31m"), // error: red
    ColorPair::new("\x1b[31m"), // fatal: red
];

/// Whether escape sequences are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when the destination is a terminal on an ANSI platform
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Decide for a destination whose terminal status is `is_terminal`
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => ansi_platform() && is_terminal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" | "on" | "force" => Ok(ColorMode::Always),
            "never" | "off" => Ok(ColorMode::Never),
            _ => Err(LoggerError::config(
                "color",
                format!("invalid color mode: '{}'", s),
            )),
        }
    }
}

/// Windows consoles receive plain text under auto-detection
#[inline]
pub fn ansi_platform() -> bool {
    !cfg!(windows)
}

/// Wrap `line` in the colors for `level`, appending to `buf`
pub fn paint_into(level: LogLevel, line: &str, buf: &mut String) {
    let pair = ColorPair::for_level(level);
    buf.push_str(pair.prefix);
    buf.push_str(line);
    buf.push_str(pair.postfix);
}

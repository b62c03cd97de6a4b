//! Colors and glyphs for tcogen's terminal output.

use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use colored::{Color, Colorize, control::ShouldColorize};
use once_cell::sync::Lazy;

/// Glyph and color for one kind of report line.
#[derive(Debug, Clone, Copy)]
pub struct Mark {
    pub glyph: &'static str,
    pub color: Color,
}

/// A companion file was written.
pub const GENERATED: Mark = Mark {
    glyph: "✓",
    color: Color::Green,
};

/// An annotated record was left out.
pub const SKIPPED: Mark = Mark {
    glyph: "⚠",
    color: Color::Yellow,
};

pub const FAILED: Mark = Mark {
    glyph: "✗",
    color: Color::Red,
};

/// Verbose progress.
pub const NOTE: Mark = Mark {
    glyph: "→",
    color: Color::BrightBlack,
};

pub const HEADING: Color = Color::Cyan;
pub const COMMAND: Color = Color::Magenta;
pub const ENV_KEY: Color = Color::BrightCyan;

/// Whether `--help` may use color. Read before `--no-color` is parsed, so
/// only the environment decides.
pub static HELP_COLOR: Lazy<bool> = Lazy::new(|| ShouldColorize::from_env().should_colorize());

/// Clap styles matching the report colors.
pub fn help_styles() -> Styles {
    Styles::styled()
        .usage(AnsiColor::BrightBlue.on_default().bold())
        .header(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Magenta.on_default())
        .placeholder(AnsiColor::BrightBlack.on_default())
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().bold())
}

pub fn paint(text: &str, color: Color, bold: bool, enabled: bool) -> String {
    match (enabled, bold) {
        (false, _) => text.to_string(),
        (true, false) => text.color(color).to_string(),
        (true, true) => text.color(color).bold().to_string(),
    }
}

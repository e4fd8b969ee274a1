//! Style constants and clap help styling.

use anstyle::{AnsiColor, Color, Effects, Style};

const fn fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// Green — completed actions.
pub(crate) const SUCCESS: Style = fg(AnsiColor::Green);

/// Red — errors.
pub(crate) const ERROR: Style = fg(AnsiColor::Red);

/// Yellow — warnings, nothing-to-do messages.
pub(crate) const WARNING: Style = fg(AnsiColor::Yellow);

/// Bold — section headers and label names.
pub(crate) const STRONG: Style = Style::new().effects(Effects::BOLD);

/// Cyan — list indices in pickers.
pub(crate) const INDEX: Style = fg(AnsiColor::Cyan);

/// Dimmed — secondary text and hints.
pub(crate) const DIM: Style = Style::new().effects(Effects::DIMMED);

/// Clap help styles matching the palette above.
pub(crate) fn clap_styles() -> clap::builder::Styles {
    let heading = fg(AnsiColor::Green).effects(Effects::BOLD);
    clap::builder::Styles::styled()
        .header(heading)
        .usage(heading)
        .literal(fg(AnsiColor::Cyan))
        .placeholder(fg(AnsiColor::Cyan))
        .error(fg(AnsiColor::Red).effects(Effects::BOLD))
        .valid(fg(AnsiColor::Green))
        .invalid(fg(AnsiColor::Yellow))
}

//! Styled terminal output for `microtpl`.
//!
//! `anstyle` defines the styles; `anstream` strips them when the stream is not
//! a terminal, so piped output and tests see plain text.
//!
//! Interactive prompts write to stderr so stdout carries only command results.

mod styles;

use std::fmt::Display;
use std::io::Write;

use anstyle::Style;

pub(crate) use styles::clap_styles;

use styles::{DIM, ERROR, INDEX, STRONG, SUCCESS, WARNING};

fn stdout_line(style: Style, prefix: &str, msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{style}{prefix}{msg}{style:#}").ok();
}

fn stderr_line(style: Style, prefix: &str, msg: impl Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{style}{prefix}{msg}{style:#}").ok();
}

/// Green checkmark line.
pub(crate) fn success(msg: impl Display) {
    stdout_line(SUCCESS, "✓ ", msg);
}

/// Red cross line, on stderr.
pub(crate) fn error(msg: impl Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{ERROR}✗ {msg}{ERROR:#}").ok();
}

pub(crate) fn warning(msg: impl Display) {
    stdout_line(WARNING, "! ", msg);
}

pub(crate) fn header(msg: impl Display) {
    stdout_line(STRONG, "", msg);
}

/// `  Label: value`, label in bold.
pub(crate) fn label(name: impl Display, value: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "  {STRONG}{name}:{STRONG:#} {value}").ok();
}

pub(crate) fn dim(msg: impl Display) {
    stdout_line(DIM, "", msg);
}


pub(crate) fn item(msg: impl Display) {
    stdout_line(Style::new(), "  • ", msg);
}

pub(crate) fn blank() {
    let mut out = anstream::stdout().lock();
    writeln!(out).ok();
}

/// Unstyled text on its own line.
pub(crate) fn plain(msg: impl Display) {
    stdout_line(Style::new(), "", msg);
}

/// Document text, byte for byte with no added newline.
pub(crate) fn document(text: &str) {
    let mut out = anstream::stdout().lock();
    out.write_all(text.as_bytes()).ok();
    out.flush().ok();
}

/// `  Label: value` on stderr, for status printed next to a document on stdout.
pub(crate) fn status(name: impl Display, value: impl Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "  {STRONG}{name}:{STRONG:#} {value}").ok();
}

// Prompt UI (stderr)

pub(crate) fn prompt_title(msg: impl Display) {
    stderr_line(STRONG, "", msg);
}

/// `  [n] text` entry of a numbered choice list.
pub(crate) fn prompt_choice(index: usize, msg: impl Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "  {INDEX}[{index}]{INDEX:#} {msg}").ok();
}

pub(crate) fn prompt_note(msg: impl Display) {
    stderr_line(DIM, "", msg);
}

pub(crate) fn prompt_warning(msg: impl Display) {
    stderr_line(WARNING, "! ", msg);
}

/// Prompt text without a trailing newline.
pub(crate) fn prompt(msg: impl Display) {
    let mut out = anstream::stderr().lock();
    write!(out, "{STRONG}{msg}{STRONG:#} ").ok();
    out.flush().ok();
}

/// Finish the prompt line after input ends.
pub(crate) fn prompt_end() {
    let mut out = anstream::stderr().lock();
    writeln!(out).ok();
}

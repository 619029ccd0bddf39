//! Terminal output built on [crossterm](https://github.com/crossterm-rs/crossterm).
//!
//! - **[`render`]** — writes a [`Transcript`] to any `Write`, optionally styled
//! - **[`theme`]** — the colour palette
//!
//! [`print_transcript`] is the entry point: it writes to stdout and only adds
//! colour when stdout is a terminal, so redirected output stays plain text.

pub mod render;
pub mod theme;

use crate::snapshot::Transcript;
use std::io::{self, IsTerminal};

/// Print the transcript to stdout
pub fn print_transcript(transcript: &Transcript) -> io::Result<()> {
    let stdout = io::stdout();
    let styled = stdout.is_terminal();
    let mut lock = stdout.lock();
    render::render_transcript(&mut lock, transcript, styled)
}

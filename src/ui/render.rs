//! Transcript rendering to a byte stream

use crate::inspector::constants::LABEL_WIDTH;
use crate::snapshot::{Transcript, TranscriptLine};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::{self, Write};

/// Write the transcript, with colours when `styled` is set
pub fn render_transcript<W: Write>(
    out: &mut W,
    transcript: &Transcript,
    styled: bool,
) -> io::Result<()> {
    if !styled {
        for line in transcript.get_output() {
            writeln!(out, "{}", line)?;
        }
        return out.flush();
    }

    for section in &transcript.sections {
        queue!(
            out,
            SetForegroundColor(DEFAULT_THEME.banner),
            SetAttribute(Attribute::Bold),
            Print(format!(">>> {}", section.banner)),
            SetAttribute(Attribute::Reset),
            ResetColor,
            Print("\n")
        )?;
        for line in &section.lines {
            render_line(out, line)?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

fn render_line<W: Write>(out: &mut W, line: &TranscriptLine) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(DEFAULT_THEME.label),
        Print(format!("{:<width$}", line.label, width = LABEL_WIDTH)),
        ResetColor,
        Print(": ")
    )?;

    if line.label.starts_with("Mark ") {
        // colour each marker token on its own
        for (i, token) in line.text.split(' ').enumerate() {
            if i > 0 {
                queue!(out, Print(" "))?;
            }
            queue!(
                out,
                SetForegroundColor(marker_color(token)),
                Print(token),
                ResetColor
            )?;
        }
    } else {
        queue!(
            out,
            SetForegroundColor(DEFAULT_THEME.fg),
            Print(&line.text),
            ResetColor
        )?;
    }

    queue!(out, Print("\n"))
}

fn marker_color(token: &str) -> Color {
    match token {
        "xx" => DEFAULT_THEME.in_range,
        "pp" => DEFAULT_THEME.padding,
        _ => DEFAULT_THEME.muted,
    }
}

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use img2c::{
    AsciiArt,
    color::parse_color_or,
    settings::{DEFAULT_BG_COLOR, DEFAULT_FG_COLOR, Settings},
};
use std::io::{Result as IOResult, Write, stdout};

/// Prints art to the terminal in the configured colors.
#[derive(Debug)]
pub struct TerminalPrinter {
    fg_color: Color,
    bg_color: Color,
}

impl TerminalPrinter {
    pub fn new(settings: &Settings) -> Self {
        let to_color = |spec: &str, fallback: &str| {
            let [r, g, b, _] = parse_color_or(spec, fallback).0;
            Color::Rgb { r, g, b }
        };
        Self {
            fg_color: to_color(&settings.fg_color, DEFAULT_FG_COLOR),
            bg_color: to_color(&settings.bg_color, DEFAULT_BG_COLOR),
        }
    }

    pub fn print(&self, art: &AsciiArt) -> IOResult<()> {
        let mut out = stdout();
        for line in art.lines() {
            // colors are reset before each newline so the background does not bleed
            execute!(
                out,
                SetForegroundColor(self.fg_color),
                SetBackgroundColor(self.bg_color),
                Print(line),
                ResetColor,
                Print("\n"),
            )?;
        }
        out.flush()?;
        Ok(())
    }
}

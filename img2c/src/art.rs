use std::fmt;

/// A block of text art, one entry per row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsciiArt {
    lines: Vec<String>,
}

impl AsciiArt {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Splits `text` on `'\n'`. A trailing newline yields a trailing empty line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length in characters of the longest line.
    pub fn max_line_len(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

impl From<&str> for AsciiArt {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

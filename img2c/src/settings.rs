use std::{fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{ERROR_SETTINGS, Error},
    maps::DEFAULT,
};

/// Conversion and rendering settings.
///
/// Every field has a default, so a settings file may name only the fields it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of character columns in the output.
    pub output_width: u32,
    /// Glyph height/width correction applied to the output row count.
    pub char_aspect: f32,
    /// Luminance at or below this value becomes a space. Negative disables it.
    pub black_threshold: f64,
    /// Character ramp indexed by luminance. Empty falls back to the default ramp.
    pub ascii_chars: String,
    /// Complement luminance (`255 - lum`) before the threshold and ramp lookup.
    pub invert: bool,
    /// Monospace font file for the renderer. System fonts are probed when unset.
    pub font_path: Option<PathBuf>,
    /// Font size in pixels (em size).
    pub font_size: f32,
    pub fg_color: String,
    pub bg_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_width: 120,
            char_aspect: 0.55,
            black_threshold: 15.0,
            ascii_chars: DEFAULT.to_string(),
            invert: false,
            font_path: None,
            font_size: 12.0,
            fg_color: DEFAULT_FG_COLOR.to_string(),
            bg_color: DEFAULT_BG_COLOR.to_string(),
        }
    }
}

pub const DEFAULT_FG_COLOR: &str = "black";
pub const DEFAULT_BG_COLOR: &str = "white";

impl Settings {
    pub fn with_output_width(mut self, output_width: u32) -> Self {
        self.output_width = output_width;
        self
    }

    /// The effective character ramp.
    pub fn ramp(&self) -> Vec<char> {
        if self.ascii_chars.is_empty() {
            DEFAULT.chars().collect()
        } else {
            self.ascii_chars.chars().collect()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json)
            .map_err(|err| Error::Settings(format!("{ERROR_SETTINGS}: {err}")))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
            .map_err(|err| Error::Settings(format!("{ERROR_SETTINGS}: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "output_width": 40, "invert": true }"#).unwrap();
        assert_eq!(settings.output_width, 40);
        assert!(settings.invert);
        assert_eq!(settings.ascii_chars, "@%#*+=-:. ");
        assert_eq!(settings.fg_color, "black");
        assert_eq!(settings.bg_color, "white");
    }

    #[test]
    fn empty_ramp_falls_back_to_default() {
        let settings = Settings {
            ascii_chars: String::new(),
            ..Settings::default()
        };
        assert_eq!(settings.ramp().len(), 10);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Settings::from_json("{ output_width: }").unwrap_err();
        assert!(matches!(err, Error::Settings(_)));
    }

    #[test]
    fn json_round_trip_through_file() {
        let settings = Settings::default().with_output_width(64);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(settings.to_json().unwrap().as_bytes())
            .unwrap();
        let loaded = Settings::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::from_json_file(&dir.path().join("missing.json")).is_err());
    }
}

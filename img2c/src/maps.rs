use std::str::FromStr;

use crate::error::{ERROR_SETTINGS, Error};

/// Character ramps, ordered from the first to the last lookup index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharMap {
    Default,
    Standard,
    Detailed,
    Extended,
    Gradient,
    Blocks,
    Braille,
    Custom(Vec<char>),
}

impl CharMap {
    pub fn chars(self) -> Vec<char> {
        match self {
            CharMap::Default => DEFAULT.chars().collect(),
            CharMap::Standard => STANDARD.chars().collect(),
            CharMap::Detailed => DETAILED.chars().collect(),
            CharMap::Extended => EXTENDED.chars().collect(),
            CharMap::Gradient => GRADIENT.chars().collect(),
            CharMap::Blocks => BLOCKS.chars().collect(),
            CharMap::Braille => BRAILLE.chars().collect(),
            CharMap::Custom(chars) => chars,
        }
    }

    pub fn custom(chars: &str) -> Self {
        Self::Custom(chars.chars().collect())
    }

    /// The ramp as a string, suitable for `Settings::ascii_chars`.
    pub fn ramp(self) -> String {
        self.chars().into_iter().collect()
    }
}

impl FromStr for CharMap {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "default" => Ok(CharMap::Default),
            "standard" => Ok(CharMap::Standard),
            "detailed" => Ok(CharMap::Detailed),
            "extended" => Ok(CharMap::Extended),
            "gradient" => Ok(CharMap::Gradient),
            "blocks" => Ok(CharMap::Blocks),
            "braille" => Ok(CharMap::Braille),
            other => Err(Error::Settings(format!(
                "{ERROR_SETTINGS}: unknown char map '{other}'"
            ))),
        }
    }
}

/// Dense to sparse, so dark pixels get heavy glyphs on a light background.
pub const DEFAULT: &str = "@%#*+=-:. "; // 10 chars

// maps from https://github.com/maxcurzi/tplay/blob/main/src/pipeline/char_maps.rs

// ASCII-127 Only
const STANDARD: &str = r##" .:-=+*#%@"##; // 10 chars
const DETAILED: &str = r##" .'`^",:;Il!i~+_-?][}{1)(|/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$"##; // 67 chars
const EXTENDED: &str = r##"$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/|()1{}[]?-_+~<>i!lI;:,^`'. "##; // 68 chars

// ASCII-255
const GRADIENT: &str = r#" ░▒▓█"#; // 5 chars
const BLOCKS: &str = r#" █"#; // 2 chars
const BRAILLE: &str = r#" ··⣀⣀⣤⣤⣤⣀⡀⢀⠠⠔⠒⠑⠊⠉⠁"#; // 16 chars (braille-based)

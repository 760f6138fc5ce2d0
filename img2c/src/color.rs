//! Parsing of CSS-like color specifications used by the renderer.
use image::Rgba;

use crate::error::{ERROR_SETTINGS, Error};

const NAMED: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("lime", [0, 255, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("aqua", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("fuchsia", [255, 0, 255]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("silver", [192, 192, 192]),
    ("maroon", [128, 0, 0]),
    ("olive", [128, 128, 0]),
    ("navy", [0, 0, 128]),
    ("purple", [128, 0, 128]),
    ("teal", [0, 128, 128]),
    ("orange", [255, 165, 0]),
];

/// Parses a named color, `#rgb`, `#rrggbb`, `#rrggbbaa` or `rgb(r, g, b)`.
pub fn parse_color(spec: &str) -> Result<Rgba<u8>, Error> {
    let spec = spec.trim();
    let invalid = || Error::Settings(format!("{ERROR_SETTINGS}: unknown color '{spec}'"));

    if let Some(hex) = spec.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }

    let lower = spec.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let channels: Vec<u8> = args
            .split(',')
            .map(|c| c.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .map_err(|_| invalid())?;
        return match channels.as_slice() {
            [r, g, b] => Ok(Rgba([*r, *g, *b, 255])),
            _ => Err(invalid()),
        };
    }

    NAMED
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, [r, g, b])| Rgba([*r, *g, *b, 255]))
        .ok_or_else(invalid)
}

/// Parses `spec`, or `fallback` when `spec` is empty or not a color.
pub fn parse_color_or(spec: &str, fallback: &str) -> Rgba<u8> {
    if !spec.trim().is_empty() {
        match parse_color(spec) {
            Ok(color) => return color,
            Err(err) => log::warn!("{err}, using '{fallback}'"),
        }
    }
    parse_color(fallback).unwrap_or(Rgba([0, 0, 0, 255]))
}

fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    // from_str_radix alone would accept a leading '+'
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Rgba([nibble(0)?, nibble(1)?, nibble(2)?, 255])),
        6 => Some(Rgba([byte(0)?, byte(2)?, byte(4)?, 255])),
        8 => Some(Rgba([byte(0)?, byte(2)?, byte(4)?, byte(6)?])),
        _ => None,
    }
}

use clap::{Parser, ValueEnum};
use img2c::error::Error;
use img2c::font::MonospaceFont;
use img2c::maps::CharMap;
use img2c::settings::Settings;
use img2c::source::open_image_from_path;
use img2c::{convert, render_ascii};

mod terminal_printer;

/// Command line arguments structure.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Convert, Show or print default Settings
    #[arg(value_enum, required = true)]
    action: Action,
    /// Image file to process
    input: Option<PathBuf>,
    /// Text file to write the art to (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// PNG file to render the art into
    #[arg(short, long)]
    png: Option<PathBuf>,
    /// JSON settings file, overridden by the flags below
    #[arg(short, long)]
    settings: Option<PathBuf>,
    /// Number of character columns
    #[arg(short, long)]
    width: Option<u32>,
    /// Glyph height/width correction
    #[arg(long)]
    char_aspect: Option<f32>,
    /// Luminance at or below which cells become blank
    #[arg(short, long)]
    threshold: Option<f64>,
    /// Custom lookup char table
    #[arg(short, long)]
    chars: Option<String>,
    /// Named lookup char table (default, standard, detailed, extended, gradient, blocks, braille)
    #[arg(short = 'm', long, conflicts_with = "chars")]
    char_map: Option<CharMap>,
    /// Invert luminance (light subject on dark background)
    #[arg(short, long, default_value_t = false)]
    invert: bool,
    /// Monospace font used for PNG output
    #[arg(short, long)]
    font: Option<PathBuf>,
    /// Font size in pixels for PNG output
    #[arg(long)]
    font_size: Option<f32>,
    /// Foreground color
    #[arg(long)]
    fg: Option<String>,
    /// Background color
    #[arg(long)]
    bg: Option<String>,
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[clap(rename_all = "lower")]
enum Action {
    Convert,
    Show,
    Settings,
}

use std::{fs, path::PathBuf};

use crate::terminal_printer::TerminalPrinter;

fn main() -> Result<(), Error> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let settings = build_settings(&args)?;

    match args.action {
        Action::Settings => {
            println!("{}", settings.to_json()?);
            Ok(())
        }
        Action::Convert => export(&args, &settings),
        Action::Show => show(&args, &settings),
    }
}

fn build_settings(args: &Args) -> Result<Settings, Error> {
    let mut settings = match &args.settings {
        Some(path) => Settings::from_json_file(path)?,
        None => Settings::default(),
    };

    if let Some(width) = args.width {
        settings.output_width = width;
    }
    if let Some(char_aspect) = args.char_aspect {
        settings.char_aspect = char_aspect;
    }
    if let Some(threshold) = args.threshold {
        settings.black_threshold = threshold;
    }
    if let Some(chars) = &args.chars {
        settings.ascii_chars = chars.clone();
    }
    if let Some(char_map) = &args.char_map {
        settings.ascii_chars = char_map.clone().ramp();
    }
    if args.invert {
        settings.invert = true;
    }
    if let Some(font) = &args.font {
        settings.font_path = Some(font.clone());
    }
    if let Some(font_size) = args.font_size {
        settings.font_size = font_size;
    }
    if let Some(fg) = &args.fg {
        settings.fg_color = fg.clone();
    }
    if let Some(bg) = &args.bg {
        settings.bg_color = bg.clone();
    }

    if settings.output_width == 0 {
        return Err(Error::Settings("output width must be at least 1".to_string()));
    }
    Ok(settings)
}

fn input(args: &Args) -> Result<&PathBuf, Error> {
    args.input
        .as_ref()
        .ok_or_else(|| Error::Application("missing input image".to_string()))
}

fn export(args: &Args, settings: &Settings) -> Result<(), Error> {
    let image = open_image_from_path(input(args)?)?;
    let art = convert(&image, settings)?;
    log::info!("converted into {} lines", art.line_count());

    match &args.output {
        Some(path) => fs::write(path, art.to_string())?,
        None => println!("{art}"),
    }

    if let Some(png) = &args.png {
        let font = MonospaceFont::load(settings.font_path.as_deref())?;
        log::info!("using font {}", font.path().display());
        render_ascii(&art, settings, &font)
            .save(png)
            .map_err(|e| Error::Application(format!("Cannot write {}: {e}", png.display())))?;
        log::info!("rendered {}", png.display());
    }
    Ok(())
}

fn show(args: &Args, settings: &Settings) -> Result<(), Error> {
    let image = open_image_from_path(input(args)?)?;
    let art = convert(&image, settings)?;
    TerminalPrinter::new(settings).print(&art)?;
    Ok(())
}

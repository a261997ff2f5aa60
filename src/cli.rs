use crate::color::{ColorParseError, parse_color};
use crate::palette::PaletteId;
use crate::variable::ThemeVariable;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tintbox")]
#[command(version = "0.1.0")]
#[command(about = "Palette and light/dark theme engine for the admin frontend")]
pub struct CliArgs {
    /// Config file (defaults to ~/.config/tintbox/config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the persisted theme
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<ThemeCommand>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum ThemeCommand {
    /// List built-in palettes by category
    Palettes,
    /// Print the applied variable set
    Show {
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Css)]
        format: OutputFormat,
    },
    /// Switch palette
    Palette { id: PaletteId },
    /// Switch light/dark mode
    Mode {
        #[arg(value_enum)]
        target: ModeTarget,
    },
    /// Override one variable for the active mode
    Color {
        variable: ThemeVariable,
        /// Hex or oklch() color
        #[arg(value_parser = color_value, required_unless_present = "default")]
        color: Option<String>,
        /// Go back to the palette default (the custom color is kept)
        #[arg(long, conflicts_with = "color")]
        default: bool,
    },
    /// Restore default palette and ambient mode, dropping all overrides
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeTarget {
    Light,
    Dark,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Css,
    Swatch,
    Json,
}

fn color_value(value: &str) -> Result<String, ColorParseError> {
    parse_color(value).map(|_| value.trim().to_string())
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

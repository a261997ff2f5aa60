// preview.rs - Text renderings of palettes and resolved themes for the CLI

use crate::color::parse_color;
use crate::palette::{PaletteId, list_palettes};
use crate::resolver::ResolvedTheme;
use crossterm::style::{Color, Stylize};
use std::fmt::Write;

fn swatch(value: &str, colored: bool) -> String {
    match parse_color(value) {
        Ok(rgb) if colored => "  "
            .on(Color::Rgb {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
            })
            .to_string(),
        _ => "  ".to_string(),
    }
}

/// One line per palette grouped under category headings; `*` marks `current`.
pub fn render_palettes(current: PaletteId, colored: bool) -> String {
    let mut out = String::new();
    for (category, palettes) in list_palettes() {
        let _ = writeln!(out, "{}:", category.name());
        for palette in palettes {
            let marker = if palette.id == current { '*' } else { ' ' };
            let ramp: String = palette
                .shades()
                .map(|(_, value)| swatch(value, colored))
                .collect();
            let _ = writeln!(out, " {} {:<8} {}", marker, palette.name, ramp);
        }
    }
    out
}

pub fn render_variables(theme: &ResolvedTheme, colored: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", theme.palette, theme.mode);
    for (variable, value) in &theme.colors {
        let _ = writeln!(
            out,
            "{} {:<26} {}",
            swatch(value, colored),
            variable.name(),
            value
        );
    }
    out
}

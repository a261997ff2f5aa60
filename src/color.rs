// color.rs - Parsing of theme color strings into RGB

use thiserror::Error;

/// A color represented as RGB values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Error, PartialEq)]
pub enum ColorParseError {
    #[error("Empty color value")]
    Empty,
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
    #[error("Invalid oklch() color: {0}")]
    InvalidOklch(String),
    #[error("Unsupported color format: {0}")]
    Unsupported(String),
}

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse `#rgb`, `#rrggbb` or `oklch(L C H)` into RGB.
pub fn parse_color(value: &str) -> Result<Rgb, ColorParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if value.starts_with('#') {
        return hex_to_rgb(value).ok_or_else(|| ColorParseError::InvalidHex(value.to_string()));
    }

    let lower = value.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("oklch(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_oklch_args(args)
            .map(|(l, c, h)| oklch_to_rgb(l, c, h))
            .ok_or_else(|| ColorParseError::InvalidOklch(value.to_string()));
    }

    Err(ColorParseError::Unsupported(value.to_string()))
}

fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => Some(Rgb {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        }),
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some(Rgb {
                r: digit(0)?,
                g: digit(1)?,
                b: digit(2)?,
            })
        }
        _ => None,
    }
}

fn parse_oklch_args(args: &str) -> Option<(f64, f64, f64)> {
    // Alpha after '/' does not affect the opaque swatch.
    let channels = args.split('/').next()?;
    let parts: Vec<&str> = channels.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }

    let lightness = match parts[0].strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().ok()? / 100.0,
        None => parts[0].parse::<f64>().ok()?,
    };
    let chroma = parts[1].parse::<f64>().ok()?;
    let hue = parts[2].trim_end_matches("deg").parse::<f64>().ok()?;

    if !(0.0..=1.0).contains(&lightness) || chroma < 0.0 || !hue.is_finite() {
        return None;
    }
    Some((lightness, chroma, hue))
}

fn oklch_to_rgb(lightness: f64, chroma: f64, hue: f64) -> Rgb {
    let (sin, cos) = hue.to_radians().sin_cos();
    let a = chroma * cos;
    let b = chroma * sin;

    let l = (lightness + 0.396_337_777_4 * a + 0.215_803_757_3 * b).powi(3);
    let m = (lightness - 0.105_561_345_8 * a - 0.063_854_172_8 * b).powi(3);
    let s = (lightness - 0.089_484_177_5 * a - 1.291_485_548_0 * b).powi(3);

    let red = 4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s;
    let green = -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s;
    let blue = -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s;

    Rgb {
        r: encode_srgb(red),
        g: encode_srgb(green),
        b: encode_srgb(blue),
    }
}

fn encode_srgb(linear: f64) -> u8 {
    let linear = linear.clamp(0.0, 1.0);
    let encoded = if linear <= 0.003_130_8 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };
    (encoded * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color() {
        let color = parse_color("#ff0000").unwrap();
        assert_eq!(color, Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_short_hex() {
        let color = parse_color("#0f8").unwrap();
        assert_eq!(color, Rgb { r: 0, g: 255, b: 136 });
    }

    #[test]
    fn test_invalid_hex() {
        assert!(matches!(
            parse_color("#12345"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            parse_color("#gggggg"),
            Err(ColorParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_oklch_extremes() {
        assert_eq!(parse_color("oklch(1 0 0)").unwrap().to_hex(), "#ffffff");
        assert_eq!(parse_color("oklch(0% 0 0)").unwrap().to_hex(), "#000000");
    }

    #[test]
    fn test_oklch_hue_and_alpha() {
        // A strongly chromatic red-ish hue keeps red dominant.
        let red = parse_color("OKLCH(0.63 0.25 29 / 0.5)").unwrap();
        assert!(red.r > red.g && red.r > red.b);

        let blue = parse_color("oklch(0.55 0.22 263deg)").unwrap();
        assert!(blue.b > blue.r && blue.b > blue.g);
    }

    #[test]
    fn test_invalid_oklch() {
        assert!(matches!(
            parse_color("oklch(0.5 0.1)"),
            Err(ColorParseError::InvalidOklch(_))
        ));
        assert!(matches!(
            parse_color("oklch(2 0.1 10)"),
            Err(ColorParseError::InvalidOklch(_))
        ));
    }

    #[test]
    fn test_unsupported_and_empty() {
        assert_eq!(parse_color("   "), Err(ColorParseError::Empty));
        assert!(matches!(
            parse_color("rebeccapurple"),
            Err(ColorParseError::Unsupported(_))
        ));
    }
}

// palette.rs - Built-in palette registry
//
// Every palette is an 11-step ramp indexed by `Shade`, lightest first.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shade slot on the fixed 50..950 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    pub const ALL: [Shade; 11] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    pub fn value(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
            Shade::S950 => 950,
        }
    }

    pub fn from_value(value: u16) -> Option<Self> {
        Shade::ALL.into_iter().find(|s| s.value() == value)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// Shades are written as their scale number (`950`) in config files.
impl Serialize for Shade {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.value())
    }
}

impl<'de> Deserialize<'de> for Shade {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u16::deserialize(deserializer)?;
        Shade::from_value(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid shade: {}", value)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteCategory {
    Neutral,
    Warm,
    Cool,
    Vibrant,
}

impl PaletteCategory {
    pub const ALL: [PaletteCategory; 4] = [
        PaletteCategory::Neutral,
        PaletteCategory::Warm,
        PaletteCategory::Cool,
        PaletteCategory::Vibrant,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaletteCategory::Neutral => "neutral",
            PaletteCategory::Warm => "warm",
            PaletteCategory::Cool => "cool",
            PaletteCategory::Vibrant => "vibrant",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PaletteId {
    Slate,
    Gray,
    #[default]
    Zinc,
    Neutral,
    Stone,
    Red,
    Orange,
    Amber,
    Rose,
    Emerald,
    Teal,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown palette: {0}")]
pub struct ParsePaletteError(pub String);

impl PaletteId {
    pub const ALL: [PaletteId; 18] = [
        PaletteId::Slate,
        PaletteId::Gray,
        PaletteId::Zinc,
        PaletteId::Neutral,
        PaletteId::Stone,
        PaletteId::Red,
        PaletteId::Orange,
        PaletteId::Amber,
        PaletteId::Rose,
        PaletteId::Emerald,
        PaletteId::Teal,
        PaletteId::Sky,
        PaletteId::Blue,
        PaletteId::Indigo,
        PaletteId::Violet,
        PaletteId::Purple,
        PaletteId::Fuchsia,
        PaletteId::Pink,
    ];

    pub fn name(self) -> &'static str {
        get_palette(self).name
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteId {
    type Err = ParsePaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PaletteId::ALL
            .into_iter()
            .find(|id| id.name() == wanted)
            .ok_or_else(|| ParsePaletteError(s.to_string()))
    }
}

impl Serialize for PaletteId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for PaletteId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub id: PaletteId,
    pub name: &'static str,
    pub category: PaletteCategory,
    shades: [&'static str; 11],
}

impl Palette {
    pub fn shade(&self, shade: Shade) -> &'static str {
        self.shades[shade.index()]
    }

    /// Shades paired with their slot, lightest first.
    pub fn shades(&self) -> impl Iterator<Item = (Shade, &'static str)> + '_ {
        Shade::ALL.into_iter().map(|s| (s, self.shade(s)))
    }
}

const fn palette(
    id: PaletteId,
    name: &'static str,
    category: PaletteCategory,
    shades: [&'static str; 11],
) -> Palette {
    Palette {
        id,
        name,
        category,
        shades,
    }
}

use PaletteCategory::{Cool, Neutral, Vibrant, Warm};

// Registry order matches `PaletteId::ALL`.
static PALETTES: [Palette; 18] = [
    palette(PaletteId::Slate, "slate", Neutral, [
        "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b",
        "#475569", "#334155", "#1e293b", "#0f172a", "#020617",
    ]),
    palette(PaletteId::Gray, "gray", Neutral, [
        "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280",
        "#4b5563", "#374151", "#1f2937", "#111827", "#030712",
    ]),
    palette(PaletteId::Zinc, "zinc", Neutral, [
        "#fafafa", "#f4f4f5", "#e4e4e7", "#d4d4d8", "#a1a1aa", "#71717a",
        "#52525b", "#3f3f46", "#27272a", "#18181b", "#09090b",
    ]),
    palette(PaletteId::Neutral, "neutral", Neutral, [
        "#fafafa", "#f5f5f5", "#e5e5e5", "#d4d4d4", "#a3a3a3", "#737373",
        "#525252", "#404040", "#262626", "#171717", "#0a0a0a",
    ]),
    palette(PaletteId::Stone, "stone", Neutral, [
        "#fafaf9", "#f5f5f4", "#e7e5e4", "#d6d3d1", "#a8a29e", "#78716c",
        "#57534e", "#44403c", "#292524", "#1c1917", "#0c0a09",
    ]),
    palette(PaletteId::Red, "red", Warm, [
        "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444",
        "#dc2626", "#b91c1c", "#991b1b", "#7f1d1d", "#450a0a",
    ]),
    palette(PaletteId::Orange, "orange", Warm, [
        "#fff7ed", "#ffedd5", "#fed7aa", "#fdba74", "#fb923c", "#f97316",
        "#ea580c", "#c2410c", "#9a3412", "#7c2d12", "#431407",
    ]),
    palette(PaletteId::Amber, "amber", Warm, [
        "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b",
        "#d97706", "#b45309", "#92400e", "#78350f", "#451a03",
    ]),
    palette(PaletteId::Rose, "rose", Warm, [
        "#fff1f2", "#ffe4e6", "#fecdd3", "#fda4af", "#fb7185", "#f43f5e",
        "#e11d48", "#be123c", "#9f1239", "#881337", "#4c0519",
    ]),
    palette(PaletteId::Emerald, "emerald", Cool, [
        "#ecfdf5", "#d1fae5", "#a7f3d0", "#6ee7b7", "#34d399", "#10b981",
        "#059669", "#047857", "#065f46", "#064e3b", "#022c22",
    ]),
    palette(PaletteId::Teal, "teal", Cool, [
        "#f0fdfa", "#ccfbf1", "#99f6e4", "#5eead4", "#2dd4bf", "#14b8a6",
        "#0d9488", "#0f766e", "#115e59", "#134e4a", "#042f2e",
    ]),
    palette(PaletteId::Sky, "sky", Cool, [
        "#f0f9ff", "#e0f2fe", "#bae6fd", "#7dd3fc", "#38bdf8", "#0ea5e9",
        "#0284c7", "#0369a1", "#075985", "#0c4a6e", "#082f49",
    ]),
    palette(PaletteId::Blue, "blue", Cool, [
        "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6",
        "#2563eb", "#1d4ed8", "#1e40af", "#1e3a8a", "#172554",
    ]),
    palette(PaletteId::Indigo, "indigo", Cool, [
        "#eef2ff", "#e0e7ff", "#c7d2fe", "#a5b4fc", "#818cf8", "#6366f1",
        "#4f46e5", "#4338ca", "#3730a3", "#312e81", "#1e1b4b",
    ]),
    palette(PaletteId::Violet, "violet", Vibrant, [
        "#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6",
        "#7c3aed", "#6d28d9", "#5b21b6", "#4c1d95", "#2e1065",
    ]),
    palette(PaletteId::Purple, "purple", Vibrant, [
        "#faf5ff", "#f3e8ff", "#e9d5ff", "#d8b4fe", "#c084fc", "#a855f7",
        "#9333ea", "#7e22ce", "#6b21a8", "#581c87", "#3b0764",
    ]),
    palette(PaletteId::Fuchsia, "fuchsia", Vibrant, [
        "#fdf4ff", "#fae8ff", "#f5d0fe", "#f0abfc", "#e879f9", "#d946ef",
        "#c026d3", "#a21caf", "#86198f", "#701a75", "#4a044e",
    ]),
    palette(PaletteId::Pink, "pink", Vibrant, [
        "#fdf2f8", "#fce7f3", "#fbcfe8", "#f9a8d4", "#f472b6", "#ec4899",
        "#db2777", "#be185d", "#9d174d", "#831843", "#500724",
    ]),
];

pub fn get_palette(id: PaletteId) -> &'static Palette {
    &PALETTES[id as usize]
}

/// All palettes grouped by category, in registry order within each group.
pub fn list_palettes() -> Vec<(PaletteCategory, Vec<&'static Palette>)> {
    PaletteCategory::ALL
        .into_iter()
        .map(|category| {
            let members = PALETTES
                .iter()
                .filter(|p| p.category == category)
                .collect();
            (category, members)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_color;

    #[test]
    fn test_registry_order_matches_ids() {
        for id in PaletteId::ALL {
            assert_eq!(get_palette(id).id, id);
        }
    }

    #[test]
    fn test_every_shade_is_a_valid_color() {
        for id in PaletteId::ALL {
            for (shade, hex) in get_palette(id).shades() {
                assert!(
                    parse_color(hex).is_ok(),
                    "{} shade {} is not a color: {}",
                    id,
                    shade,
                    hex
                );
            }
        }
    }

    #[test]
    fn test_list_palettes_groups_everything_once() {
        let groups = list_palettes();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].0, PaletteCategory::Neutral);

        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(total, PaletteId::ALL.len());

        for (category, members) in &groups {
            assert!(!members.is_empty());
            assert!(members.iter().all(|p| p.category == *category));
        }
    }

    #[test]
    fn test_palette_id_parse() {
        assert_eq!("violet".parse::<PaletteId>(), Ok(PaletteId::Violet));
        assert_eq!("  Slate".parse::<PaletteId>(), Ok(PaletteId::Slate));
        assert!("plaid".parse::<PaletteId>().is_err());
    }

    #[test]
    fn test_shade_values() {
        assert_eq!(Shade::from_value(50), Some(Shade::S50));
        assert_eq!(Shade::from_value(950), Some(Shade::S950));
        assert_eq!(Shade::from_value(150), None);
        assert_eq!(get_palette(PaletteId::Violet).shade(Shade::S50), "#f5f3ff");
        assert_eq!(get_palette(PaletteId::Violet).shade(Shade::S950), "#2e1065");
    }
}

// variable.rs - Themed variable names and their default shade table

use crate::mode::Mode;
use crate::palette::Shade;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Semantic color slot consumed by UI components as `--<name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeVariable {
    Background,
    Foreground,
    Header,
    HeaderForeground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Border,
    Sidebar,
    SidebarForeground,
    SidebarAccent,
    SidebarAccentForeground,
    SidebarBorder,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown theme variable: {0}")]
pub struct ParseVariableError(pub String);

impl ThemeVariable {
    pub const ALL: [ThemeVariable; 18] = [
        ThemeVariable::Background,
        ThemeVariable::Foreground,
        ThemeVariable::Header,
        ThemeVariable::HeaderForeground,
        ThemeVariable::Card,
        ThemeVariable::CardForeground,
        ThemeVariable::Popover,
        ThemeVariable::PopoverForeground,
        ThemeVariable::Muted,
        ThemeVariable::MutedForeground,
        ThemeVariable::Accent,
        ThemeVariable::AccentForeground,
        ThemeVariable::Border,
        ThemeVariable::Sidebar,
        ThemeVariable::SidebarForeground,
        ThemeVariable::SidebarAccent,
        ThemeVariable::SidebarAccentForeground,
        ThemeVariable::SidebarBorder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ThemeVariable::Background => "background",
            ThemeVariable::Foreground => "foreground",
            ThemeVariable::Header => "header",
            ThemeVariable::HeaderForeground => "header-foreground",
            ThemeVariable::Card => "card",
            ThemeVariable::CardForeground => "card-foreground",
            ThemeVariable::Popover => "popover",
            ThemeVariable::PopoverForeground => "popover-foreground",
            ThemeVariable::Muted => "muted",
            ThemeVariable::MutedForeground => "muted-foreground",
            ThemeVariable::Accent => "accent",
            ThemeVariable::AccentForeground => "accent-foreground",
            ThemeVariable::Border => "border",
            ThemeVariable::Sidebar => "sidebar",
            ThemeVariable::SidebarForeground => "sidebar-foreground",
            ThemeVariable::SidebarAccent => "sidebar-accent",
            ThemeVariable::SidebarAccentForeground => "sidebar-accent-foreground",
            ThemeVariable::SidebarBorder => "sidebar-border",
        }
    }

    /// Name of the CSS custom property, e.g. `--sidebar-border`.
    pub fn css_property(self) -> String {
        format!("--{}", self.name())
    }
}

impl fmt::Display for ThemeVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeVariable {
    type Err = ParseVariableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches("--").to_ascii_lowercase();
        ThemeVariable::ALL
            .into_iter()
            .find(|v| v.name() == wanted)
            .ok_or_else(|| ParseVariableError(s.to_string()))
    }
}

/// Default (light, dark) shade per variable.
const DEFAULT_SHADES: [(ThemeVariable, Shade, Shade); 18] = [
    (ThemeVariable::Background, Shade::S50, Shade::S950),
    (ThemeVariable::Foreground, Shade::S950, Shade::S50),
    (ThemeVariable::Header, Shade::S100, Shade::S900),
    (ThemeVariable::HeaderForeground, Shade::S900, Shade::S100),
    (ThemeVariable::Card, Shade::S50, Shade::S900),
    (ThemeVariable::CardForeground, Shade::S950, Shade::S50),
    (ThemeVariable::Popover, Shade::S50, Shade::S900),
    (ThemeVariable::PopoverForeground, Shade::S950, Shade::S50),
    (ThemeVariable::Muted, Shade::S100, Shade::S800),
    (ThemeVariable::MutedForeground, Shade::S500, Shade::S400),
    (ThemeVariable::Accent, Shade::S200, Shade::S700),
    (ThemeVariable::AccentForeground, Shade::S900, Shade::S50),
    (ThemeVariable::Border, Shade::S200, Shade::S800),
    (ThemeVariable::Sidebar, Shade::S100, Shade::S900),
    (ThemeVariable::SidebarForeground, Shade::S800, Shade::S200),
    (ThemeVariable::SidebarAccent, Shade::S200, Shade::S800),
    (ThemeVariable::SidebarAccentForeground, Shade::S900, Shade::S100),
    (ThemeVariable::SidebarBorder, Shade::S200, Shade::S800),
];

/// Per-mode variable -> shade assignments.
///
/// Total over `ThemeVariable`: partial tables from config only replace the
/// entries they name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadeMap {
    light: BTreeMap<ThemeVariable, Shade>,
    dark: BTreeMap<ThemeVariable, Shade>,
}

impl Default for ShadeMap {
    fn default() -> Self {
        Self {
            light: DEFAULT_SHADES.iter().map(|&(v, l, _)| (v, l)).collect(),
            dark: DEFAULT_SHADES.iter().map(|&(v, _, d)| (v, d)).collect(),
        }
    }
}

impl ShadeMap {
    pub fn shade_for(&self, variable: ThemeVariable, mode: Mode) -> Shade {
        let table = match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        };
        // Every constructor starts from the full default table.
        table.get(&variable).copied().unwrap_or(Shade::S500)
    }

    pub fn set(&mut self, variable: ThemeVariable, mode: Mode, shade: Shade) {
        let table = match mode {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        };
        table.insert(variable, shade);
    }

    pub fn with_overrides(
        mut self,
        light: &BTreeMap<ThemeVariable, Shade>,
        dark: &BTreeMap<ThemeVariable, Shade>,
    ) -> Self {
        for (&variable, &shade) in light {
            self.set(variable, Mode::Light, shade);
        }
        for (&variable, &shade) in dark {
            self.set(variable, Mode::Dark, shade);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_names_round_trip() {
        for variable in ThemeVariable::ALL {
            assert_eq!(variable.name().parse::<ThemeVariable>(), Ok(variable));
        }
        assert_eq!(
            "--sidebar-accent-foreground".parse::<ThemeVariable>(),
            Ok(ThemeVariable::SidebarAccentForeground)
        );
        assert!("boarder".parse::<ThemeVariable>().is_err());
    }

    #[test]
    fn test_serde_uses_css_names() {
        let json = serde_json::to_string(&ThemeVariable::HeaderForeground).unwrap();
        assert_eq!(json, "\"header-foreground\"");
    }

    #[test]
    fn test_default_table_is_complete() {
        let map = ShadeMap::default();
        assert_eq!(map.light.len(), ThemeVariable::ALL.len());
        assert_eq!(map.dark.len(), ThemeVariable::ALL.len());
    }

    #[test]
    fn test_background_shades() {
        let map = ShadeMap::default();
        assert_eq!(map.shade_for(ThemeVariable::Background, Mode::Light), Shade::S50);
        assert_eq!(map.shade_for(ThemeVariable::Background, Mode::Dark), Shade::S950);
    }

    #[test]
    fn test_overrides_replace_only_named_entries() {
        let mut light = BTreeMap::new();
        light.insert(ThemeVariable::Border, Shade::S300);
        let map = ShadeMap::default().with_overrides(&light, &BTreeMap::new());

        assert_eq!(map.shade_for(ThemeVariable::Border, Mode::Light), Shade::S300);
        assert_eq!(map.shade_for(ThemeVariable::Border, Mode::Dark), Shade::S800);
        assert_eq!(map.shade_for(ThemeVariable::Card, Mode::Light), Shade::S50);
    }
}

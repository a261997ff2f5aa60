// resolver.rs - Pure (palette, mode, variable, overrides) -> color resolution

use crate::mode::Mode;
use crate::overrides::Overrides;
use crate::palette::{PaletteId, get_palette};
use crate::variable::{ShadeMap, ThemeVariable};
use std::collections::BTreeMap;

/// Full variable set for one palette in one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub palette: PaletteId,
    pub mode: Mode,
    pub colors: BTreeMap<ThemeVariable, String>,
}

impl ResolvedTheme {
    pub fn color(&self, variable: ThemeVariable) -> Option<&str> {
        self.colors.get(&variable).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Resolver {
    shades: ShadeMap,
}

impl Resolver {
    pub fn new(shades: ShadeMap) -> Self {
        Self { shades }
    }

    pub fn shades(&self) -> &ShadeMap {
        &self.shades
    }

    /// Palette-derived color for `variable`, ignoring overrides.
    pub fn default_color(
        &self,
        palette: PaletteId,
        mode: Mode,
        variable: ThemeVariable,
    ) -> &'static str {
        get_palette(palette).shade(self.shades.shade_for(variable, mode))
    }

    pub fn resolve(
        &self,
        palette: PaletteId,
        mode: Mode,
        variable: ThemeVariable,
        overrides: &Overrides,
    ) -> String {
        match overrides
            .get(variable, mode)
            .and_then(|o| o.effective_color())
        {
            Some(custom) => custom.to_string(),
            None => self.default_color(palette, mode, variable).to_string(),
        }
    }

    pub fn resolve_all(&self, palette: PaletteId, mode: Mode, overrides: &Overrides) -> ResolvedTheme {
        let colors = ThemeVariable::ALL
            .into_iter()
            .map(|v| (v, self.resolve(palette, mode, v, overrides)))
            .collect();
        ResolvedTheme {
            palette,
            mode,
            colors,
        }
    }
}

/// Resolve with the built-in shade table.
pub fn resolve(
    palette: PaletteId,
    mode: Mode,
    variable: ThemeVariable,
    overrides: &Overrides,
) -> String {
    Resolver::default().resolve(palette, mode, variable, overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Shade;

    #[test]
    fn test_violet_defaults() {
        let overrides = Overrides::new();
        let violet = get_palette(PaletteId::Violet);

        assert_eq!(
            resolve(PaletteId::Violet, Mode::Light, ThemeVariable::Background, &overrides),
            violet.shade(Shade::S50)
        );
        assert_eq!(
            resolve(PaletteId::Violet, Mode::Dark, ThemeVariable::Background, &overrides),
            violet.shade(Shade::S950)
        );
    }

    #[test]
    fn test_override_wins_only_in_its_mode() {
        let mut overrides = Overrides::new();
        overrides.set(ThemeVariable::Background, Mode::Dark, false, Some("#112233".into()));

        assert_eq!(
            resolve(PaletteId::Violet, Mode::Dark, ThemeVariable::Background, &overrides),
            "#112233"
        );
        assert_eq!(
            resolve(PaletteId::Violet, Mode::Light, ThemeVariable::Background, &overrides),
            "#f5f3ff"
        );
    }

    #[test]
    fn test_use_default_falls_through() {
        let mut overrides = Overrides::new();
        overrides.set(ThemeVariable::Border, Mode::Light, true, Some("#abcdef".into()));
        assert_eq!(
            resolve(PaletteId::Zinc, Mode::Light, ThemeVariable::Border, &overrides),
            get_palette(PaletteId::Zinc).shade(Shade::S200)
        );
    }

    #[test]
    fn test_missing_custom_color_falls_through() {
        let mut overrides = Overrides::new();
        overrides.set(ThemeVariable::Border, Mode::Light, false, None);
        assert_eq!(
            resolve(PaletteId::Blue, Mode::Light, ThemeVariable::Border, &overrides),
            get_palette(PaletteId::Blue).shade(Shade::S200)
        );
    }

    #[test]
    fn test_every_palette_resolves_every_variable() {
        let resolver = Resolver::default();
        let overrides = Overrides::new();
        for palette in PaletteId::ALL {
            for mode in Mode::ALL {
                let theme = resolver.resolve_all(palette, mode, &overrides);
                assert_eq!(theme.colors.len(), ThemeVariable::ALL.len());
                assert!(theme.colors.values().all(|c| !c.is_empty()));
            }
        }
    }

    #[test]
    fn test_configured_shade_map() {
        let mut shades = ShadeMap::default();
        shades.set(ThemeVariable::Background, Mode::Light, Shade::S100);
        let resolver = Resolver::new(shades);

        assert_eq!(
            resolver.default_color(PaletteId::Violet, Mode::Light, ThemeVariable::Background),
            "#ede9fe"
        );
    }
}

// ui/theme.rs - The theme configuration aggregate

use crate::mode::Mode;
use crate::overrides::Overrides;
use crate::palette::PaletteId;

/// Palette, mode and overrides: everything that is persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeConfiguration {
    pub palette: PaletteId,
    pub mode: Mode,
    pub overrides: Overrides,
}

impl ThemeConfiguration {
    pub fn new(palette: PaletteId, mode: Mode) -> Self {
        Self {
            palette,
            mode,
            overrides: Overrides::new(),
        }
    }
}

// ui/terminal.rs - Terminal rendition of the resolved theme

use super::applier::RuntimeApplier;
use crate::color::parse_color;
use crate::mode::Mode;
use crate::resolver::ResolvedTheme;
use crate::variable::ThemeVariable;
use ratatui::style::{Color, Style};
use std::collections::BTreeMap;

/// Background/foreground pairs that terminal widgets draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Base,
    Header,
    Card,
    Popover,
    Muted,
    Accent,
    Sidebar,
    SidebarAccent,
}

impl Surface {
    pub const ALL: [Surface; 8] = [
        Surface::Base,
        Surface::Header,
        Surface::Card,
        Surface::Popover,
        Surface::Muted,
        Surface::Accent,
        Surface::Sidebar,
        Surface::SidebarAccent,
    ];

    /// (background, foreground) variables for this surface
    pub fn variables(self) -> (ThemeVariable, ThemeVariable) {
        use ThemeVariable::*;
        match self {
            Surface::Base => (Background, Foreground),
            Surface::Header => (Header, HeaderForeground),
            Surface::Card => (Card, CardForeground),
            Surface::Popover => (Popover, PopoverForeground),
            Surface::Muted => (Muted, MutedForeground),
            Surface::Accent => (Accent, AccentForeground),
            Surface::Sidebar => (Sidebar, SidebarForeground),
            Surface::SidebarAccent => (SidebarAccent, SidebarAccentForeground),
        }
    }
}

/// Applier for ratatui front-ends.
#[derive(Debug, Clone, Default)]
pub struct TerminalApplier {
    colors: BTreeMap<ThemeVariable, Color>,
    mode: Mode,
}

impl TerminalApplier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Unapplied or unparseable variables fall back to the terminal default.
    pub fn color(&self, variable: ThemeVariable) -> Color {
        self.colors.get(&variable).copied().unwrap_or(Color::Reset)
    }

    pub fn style(&self, surface: Surface) -> Style {
        let (bg, fg) = surface.variables();
        Style::default().bg(self.color(bg)).fg(self.color(fg))
    }

    pub fn border_style(&self, surface: Surface) -> Style {
        let border = match surface {
            Surface::Sidebar | Surface::SidebarAccent => ThemeVariable::SidebarBorder,
            _ => ThemeVariable::Border,
        };
        Style::default().fg(self.color(border))
    }
}

impl RuntimeApplier for TerminalApplier {
    fn apply(&mut self, theme: &ResolvedTheme) {
        self.colors.clear();
        for (&variable, value) in &theme.colors {
            let color = match parse_color(value) {
                Ok(rgb) => Color::Rgb(rgb.r, rgb.g, rgb.b),
                Err(e) => {
                    log::warn!("{}: {}, using terminal default", variable, e);
                    Color::Reset
                }
            };
            self.colors.insert(variable, color);
        }
        self.mode = theme.mode;
    }
}

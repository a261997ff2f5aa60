// ui/theme_manager.rs - Theme state container and mutation API

use super::applier::RuntimeApplier;
use super::system_theme::ModePreference;
use super::theme::ThemeConfiguration;
use crate::mode::Mode;
use crate::overrides::Overrides;
use crate::palette::PaletteId;
use crate::persistence::ThemeStore;
use crate::resolver::{ResolvedTheme, Resolver};
use crate::variable::{ShadeMap, ThemeVariable};

/// Startup settings that are not part of the persisted configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineSettings {
    pub default_palette: PaletteId,
    pub shades: ShadeMap,
}

/// Owns the active theme configuration.
///
/// Every mutation resolves the full variable set for the active mode, hands
/// it to the applier and snapshots the configuration into the store.
pub struct ThemeEngine<A: RuntimeApplier> {
    config: ThemeConfiguration,
    resolved: ResolvedTheme,
    resolver: Resolver,
    default_palette: PaletteId,
    applier: A,
    store: Box<dyn ThemeStore>,
    preference: Box<dyn ModePreference>,
}

impl<A: RuntimeApplier> ThemeEngine<A> {
    pub fn new(
        applier: A,
        store: impl ThemeStore + 'static,
        preference: impl ModePreference + 'static,
    ) -> Self {
        Self::with_settings(EngineSettings::default(), applier, store, preference)
    }

    /// Rehydrate from `store`, or start from defaults if it holds nothing usable.
    pub fn with_settings(
        settings: EngineSettings,
        mut applier: A,
        store: impl ThemeStore + 'static,
        preference: impl ModePreference + 'static,
    ) -> Self {
        let config = match store.load(settings.default_palette) {
            Some(config) => {
                log::debug!("restored theme {} / {}", config.palette, config.mode);
                config
            }
            None => ThemeConfiguration::new(
                settings.default_palette,
                preference.preferred_mode().unwrap_or_default(),
            ),
        };

        let resolver = Resolver::new(settings.shades);
        let resolved = resolver.resolve_all(config.palette, config.mode, &config.overrides);
        applier.apply(&resolved);

        Self {
            config,
            resolved,
            resolver,
            default_palette: settings.default_palette,
            applier,
            store: Box::new(store),
            preference: Box::new(preference),
        }
    }

    pub fn palette(&self) -> PaletteId {
        self.config.palette
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn overrides(&self) -> &Overrides {
        &self.config.overrides
    }

    pub fn configuration(&self) -> &ThemeConfiguration {
        &self.config
    }

    /// The variable set most recently handed to the applier.
    pub fn resolved(&self) -> &ResolvedTheme {
        &self.resolved
    }

    pub fn color(&self, variable: ThemeVariable) -> Option<&str> {
        self.resolved.color(variable)
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn applier(&self) -> &A {
        &self.applier
    }

    pub fn set_palette(&mut self, palette: PaletteId) {
        log::debug!("palette -> {}", palette);
        self.config.palette = palette;
        self.refresh();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        log::debug!("mode -> {}", mode);
        self.config.mode = mode;
        self.refresh();
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.config.mode.toggled());
    }

    /// Change `variable`'s override for the active mode only.
    ///
    /// Passing `None` for the color keeps the previously stored custom color.
    pub fn set_custom_color(
        &mut self,
        variable: ThemeVariable,
        use_default: bool,
        custom_color: Option<String>,
    ) {
        log::debug!(
            "{} ({}) -> {}",
            variable,
            self.config.mode,
            if use_default {
                "default"
            } else {
                custom_color.as_deref().unwrap_or("stored color")
            }
        );
        self.config
            .overrides
            .set(variable, self.config.mode, use_default, custom_color);
        self.refresh();
    }

    /// Default palette, ambient mode, no overrides.
    pub fn reset_theme(&mut self) {
        log::debug!("resetting theme");
        self.config = ThemeConfiguration::new(
            self.default_palette,
            self.preference.preferred_mode().unwrap_or_default(),
        );
        self.refresh();
    }

    fn refresh(&mut self) {
        self.resolved =
            self.resolver
                .resolve_all(self.config.palette, self.config.mode, &self.config.overrides);
        self.applier.apply(&self.resolved);
        self.store.save(&self.config);
    }
}

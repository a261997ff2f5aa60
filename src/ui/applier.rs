// ui/applier.rs - Pushing resolved colors into a live UI surface

use crate::resolver::ResolvedTheme;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Class toggled on the document root while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Side-effecting sink for a resolved variable set.
///
/// Every call carries the complete set for one mode; implementations must
/// replace whatever they applied before rather than merge into it.
pub trait RuntimeApplier {
    fn apply(&mut self, theme: &ResolvedTheme);
}

impl<A: RuntimeApplier + ?Sized> RuntimeApplier for Box<A> {
    fn apply(&mut self, theme: &ResolvedTheme) {
        (**self).apply(theme)
    }
}

/// Mirrors the document root: CSS custom properties plus the `dark` class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssApplier {
    variables: BTreeMap<String, String>,
    dark: bool,
    apply_count: usize,
}

impl CssApplier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a custom property, e.g. `variable("--border")`.
    pub fn variable(&self, property: &str) -> Option<&str> {
        self.variables.get(property).map(String::as_str)
    }

    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn root_class(&self) -> Option<&'static str> {
        self.dark.then_some(DARK_CLASS)
    }

    pub fn apply_count(&self) -> usize {
        self.apply_count
    }

    pub fn to_stylesheet(&self) -> String {
        let mut css = String::new();
        let selector = match self.root_class() {
            Some(class) => format!(":root.{}", class),
            None => ":root".to_string(),
        };
        let scheme = if self.dark { "dark" } else { "light" };

        let _ = writeln!(css, "{} {{", selector);
        let _ = writeln!(css, "  color-scheme: {};", scheme);
        for (property, value) in &self.variables {
            let _ = writeln!(css, "  {}: {};", property, value);
        }
        css.push_str("}\n");
        css
    }
}

impl RuntimeApplier for CssApplier {
    fn apply(&mut self, theme: &ResolvedTheme) {
        self.variables.clear();
        for (variable, color) in &theme.colors {
            self.variables.insert(variable.css_property(), color.clone());
        }
        self.dark = theme.mode.is_dark();
        self.apply_count += 1;

        log::debug!(
            "applied {} variables ({} / {})",
            self.variables.len(),
            theme.palette,
            theme.mode
        );
    }
}

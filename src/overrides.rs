// overrides.rs - Per-variable, per-mode custom color overrides

use crate::mode::Mode;
use crate::variable::ThemeVariable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Override for one variable in one mode.
///
/// `custom_color` survives `use_default = true` so the user can flip back to
/// their custom value later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeOverride {
    pub use_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_color: Option<String>,
}

impl Default for ModeOverride {
    fn default() -> Self {
        Self {
            use_default: true,
            custom_color: None,
        }
    }
}

impl ModeOverride {
    /// The color this override contributes, if it is active and non-empty.
    pub fn effective_color(&self) -> Option<&str> {
        if self.use_default {
            return None;
        }
        self.custom_color
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableOverride {
    #[serde(default)]
    pub light: ModeOverride,
    #[serde(default)]
    pub dark: ModeOverride,
}

impl VariableOverride {
    pub fn for_mode(&self, mode: Mode) -> &ModeOverride {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    pub fn for_mode_mut(&mut self, mode: Mode) -> &mut ModeOverride {
        match mode {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        }
    }
}

/// Override store keyed by the closed set of themed variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overrides {
    entries: BTreeMap<ThemeVariable, VariableOverride>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, variable: ThemeVariable, mode: Mode) -> Option<&ModeOverride> {
        self.entries.get(&variable).map(|entry| entry.for_mode(mode))
    }

    pub fn entry(&self, variable: ThemeVariable) -> Option<&VariableOverride> {
        self.entries.get(&variable)
    }

    /// Update the `mode` half of `variable`'s override; the other mode is untouched.
    /// A `None` color keeps whatever custom color was stored before.
    pub fn set(
        &mut self,
        variable: ThemeVariable,
        mode: Mode,
        use_default: bool,
        custom_color: Option<String>,
    ) {
        let slot = self.entries.entry(variable).or_default().for_mode_mut(mode);
        slot.use_default = use_default;
        if custom_color.is_some() {
            slot.custom_color = custom_color;
        }
    }

    pub fn insert(&mut self, variable: ThemeVariable, value: VariableOverride) {
        self.entries.insert(variable, value);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ThemeVariable, &VariableOverride)> {
        self.entries.iter().map(|(&v, o)| (v, o))
    }
}

impl FromIterator<(ThemeVariable, VariableOverride)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (ThemeVariable, VariableOverride)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

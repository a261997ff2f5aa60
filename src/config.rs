use crate::palette::{PaletteId, Shade};
use crate::ui::EngineSettings;
use crate::variable::{ShadeMap, ThemeVariable};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Invalid config format: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Shade table replacements, per mode.
#[derive(Debug, Default, Deserialize)]
pub struct ShadeOverrides {
    #[serde(default)]
    pub light: BTreeMap<ThemeVariable, Shade>,
    #[serde(default)]
    pub dark: BTreeMap<ThemeVariable, Shade>,
}

/// Directory holding `config.toml`.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("tintbox")
}

/// Where the persisted theme lives unless `storage_dir` says otherwise.
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("tintbox"))
        .unwrap_or_else(config_dir)
}

/// Config file locations, most specific first.
fn config_candidates(config_dir: &Path, home: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = vec![config_dir.join("config.toml")];
    candidates.extend(home.map(|home| home.join(".tintbox").join("config.toml")));
    candidates
}

#[derive(Debug, Default, Deserialize)]
pub struct TintboxConfig {
    pub default_palette: Option<PaletteId>,
    pub storage_dir: Option<PathBuf>,
    #[serde(default)]
    pub shades: ShadeOverrides,
}

impl TintboxConfig {
    /// First config file that exists in the standard locations.
    pub fn locate() -> Option<PathBuf> {
        config_candidates(&config_dir(), dirs::home_dir().as_deref())
            .into_iter()
            .find(|path| path.is_file())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            default_palette: self.default_palette.unwrap_or_default(),
            shades: ShadeMap::default().with_overrides(&self.shades.light, &self.shades.dark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Mode;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config() {
        let config = TintboxConfig::from_toml("").unwrap();
        assert!(config.default_palette.is_none());
        assert!(config.storage_dir.is_none());

        let settings = config.engine_settings();
        assert_eq!(settings.default_palette, PaletteId::default());
        assert_eq!(settings.shades, ShadeMap::default());
    }

    #[test]
    fn test_full_config() {
        let config = TintboxConfig::from_toml(
            r#"
            default_palette = "violet"
            storage_dir = "/tmp/tintbox"

            [shades.light]
            background = 100

            [shades.dark]
            sidebar-border = 700
            "#,
        )
        .unwrap();

        assert_eq!(config.default_palette, Some(PaletteId::Violet));
        assert_eq!(config.storage_dir, Some(PathBuf::from("/tmp/tintbox")));

        let shades = config.engine_settings().shades;
        assert_eq!(shades.shade_for(ThemeVariable::Background, Mode::Light), Shade::S100);
        assert_eq!(shades.shade_for(ThemeVariable::Background, Mode::Dark), Shade::S950);
        assert_eq!(shades.shade_for(ThemeVariable::SidebarBorder, Mode::Dark), Shade::S700);
    }

    #[test]
    fn test_rejects_unknown_names() {
        assert!(TintboxConfig::from_toml(r#"default_palette = "plaid""#).is_err());
        assert!(TintboxConfig::from_toml("[shades.light]\nboarder = 100").is_err());
        assert!(TintboxConfig::from_toml("[shades.dark]\nborder = 150").is_err());
    }

    #[test]
    fn test_config_candidates_order() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");
        let candidates = config_candidates(&dir.path().join("cfg"), Some(&home));
        assert_eq!(
            candidates,
            vec![
                dir.path().join("cfg").join("config.toml"),
                home.join(".tintbox").join("config.toml"),
            ]
        );

        assert_eq!(config_candidates(dir.path(), None).len(), 1);
    }

    #[test]
    fn test_default_dirs_are_namespaced() {
        assert!(config_dir().ends_with("tintbox"));
        assert!(data_dir().ends_with("tintbox"));
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_palette = \"rose\"\n").unwrap();

        let config = TintboxConfig::from_file(&path).unwrap();
        assert_eq!(config.default_palette, Some(PaletteId::Rose));

        let missing = TintboxConfig::from_file(&dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(ConfigError::Read(_))));
    }
}

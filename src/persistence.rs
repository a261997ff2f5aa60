// persistence.rs - Saving and restoring the theme configuration

use crate::mode::Mode;
use crate::overrides::{Overrides, VariableOverride};
use crate::palette::PaletteId;
use crate::ui::ThemeConfiguration;
use crate::variable::ThemeVariable;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;

/// Namespaced key the configuration is stored under.
pub const STORAGE_KEY: &str = "tintbox-theme-storage";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode theme record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable storage for the theme configuration.
///
/// Both calls are best-effort: `save` swallows failures and `load` answers
/// `None` for anything it cannot use. A stored palette name that is no longer
/// known loads as `default_palette`.
pub trait ThemeStore {
    fn save(&self, config: &ThemeConfiguration);
    fn load(&self, default_palette: PaletteId) -> Option<ThemeConfiguration>;
}

impl<S: ThemeStore + ?Sized> ThemeStore for Box<S> {
    fn save(&self, config: &ThemeConfiguration) {
        (**self).save(config)
    }

    fn load(&self, default_palette: PaletteId) -> Option<ThemeConfiguration> {
        (**self).load(default_palette)
    }
}

impl<S: ThemeStore + ?Sized> ThemeStore for Rc<S> {
    fn save(&self, config: &ThemeConfiguration) {
        (**self).save(config)
    }

    fn load(&self, default_palette: PaletteId) -> Option<ThemeConfiguration> {
        (**self).load(default_palette)
    }
}

/// On-disk record shape. Override entries stay raw JSON so that one bad
/// entry is dropped on its own.
#[derive(Debug, Serialize, Deserialize)]
struct StoredTheme {
    palette: String,
    mode: Mode,
    #[serde(rename = "customColors", default)]
    custom_colors: BTreeMap<String, Value>,
}

pub fn encode(config: &ThemeConfiguration) -> Result<String, StoreError> {
    let custom_colors: BTreeMap<String, Value> = config
        .overrides
        .iter()
        .map(|(variable, value)| {
            serde_json::to_value(value).map(|entry| (variable.name().to_string(), entry))
        })
        .collect::<Result<_, _>>()?;
    let record = StoredTheme {
        palette: config.palette.name().to_string(),
        mode: config.mode,
        custom_colors,
    };
    Ok(serde_json::to_string(&record)?)
}

fn decode_override(name: &str, value: Value) -> Option<(ThemeVariable, VariableOverride)> {
    let variable = match name.parse::<ThemeVariable>() {
        Ok(variable) => variable,
        Err(e) => {
            log::warn!("Dropping stored override: {}", e);
            return None;
        }
    };
    match serde_json::from_value::<VariableOverride>(value) {
        Ok(entry) => Some((variable, entry)),
        Err(e) => {
            log::warn!("Dropping malformed override for {}: {}", variable, e);
            None
        }
    }
}

/// Decode a stored record. Unknown palettes fall back to `default_palette`,
/// unknown or malformed override entries are dropped; a record that is not
/// JSON or lacks a valid palette/mode pair yields `None`.
pub fn decode(raw: &str, default_palette: PaletteId) -> Option<ThemeConfiguration> {
    let record: StoredTheme = match serde_json::from_str(raw) {
        Ok(record) => record,
        Err(e) => {
            log::warn!("Ignoring unreadable theme record: {}", e);
            return None;
        }
    };

    let palette = record.palette.parse::<PaletteId>().unwrap_or_else(|e| {
        log::warn!("{}, falling back to {}", e, default_palette);
        default_palette
    });

    let overrides: Overrides = record
        .custom_colors
        .into_iter()
        .filter_map(|(name, value)| decode_override(&name, value))
        .collect();

    Some(ThemeConfiguration {
        palette,
        mode: record.mode,
        overrides,
    })
}

/// JSON file named after `STORAGE_KEY` inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, config: &ThemeConfiguration) -> Result<(), StoreError> {
        let data = encode(config)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Readers only ever see a complete record.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ThemeStore for FileStore {
    fn save(&self, config: &ThemeConfiguration) {
        if let Err(e) = self.write(config) {
            log::warn!("Could not save theme to {}: {}", self.path.display(), e);
        }
    }

    fn load(&self, default_palette: PaletteId) -> Option<ThemeConfiguration> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                log::debug!("No stored theme at {}: {}", self.path.display(), e);
                return None;
            }
        };
        decode(&raw, default_palette)
    }
}

/// In-process key/value storage. Clones share the same backing map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored blob, if any.
    pub fn raw(&self) -> Option<String> {
        self.entries.borrow().get(STORAGE_KEY).cloned()
    }

    pub fn put_raw(&self, raw: impl Into<String>) {
        self.entries
            .borrow_mut()
            .insert(STORAGE_KEY.to_string(), raw.into());
    }
}

impl ThemeStore for MemoryStore {
    fn save(&self, config: &ThemeConfiguration) {
        match encode(config) {
            Ok(data) => self.put_raw(data),
            Err(e) => log::warn!("Could not save theme: {}", e),
        }
    }

    fn load(&self, default_palette: PaletteId) -> Option<ThemeConfiguration> {
        let raw = self.raw()?;
        decode(&raw, default_palette)
    }
}

/// Storage that is unavailable: nothing is kept between sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl ThemeStore for NullStore {
    fn save(&self, _config: &ThemeConfiguration) {}

    fn load(&self, _default_palette: PaletteId) -> Option<ThemeConfiguration> {
        None
    }
}

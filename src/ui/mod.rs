// ui/mod.rs - Runtime side of the theme engine

pub mod applier;
pub mod system_theme;
pub mod terminal;
pub mod theme;
pub mod theme_manager;

// Re-export commonly used types
pub use applier::{CssApplier, RuntimeApplier};
pub use system_theme::{FixedPreference, ModePreference, SystemPreference};
pub use terminal::{Surface, TerminalApplier};
pub use theme::ThemeConfiguration;
pub use theme_manager::{EngineSettings, ThemeEngine};

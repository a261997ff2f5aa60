// lib.rs - Library root for the tintbox theme engine

pub mod cli;
pub mod color;
pub mod config;
pub mod mode;
pub mod overrides;
pub mod palette;
pub mod persistence;
pub mod preview;
pub mod resolver;
pub mod ui;
pub mod variable;

pub use mode::Mode;
pub use overrides::{ModeOverride, Overrides, VariableOverride};
pub use palette::{Palette, PaletteCategory, PaletteId, Shade, get_palette, list_palettes};
pub use persistence::{FileStore, MemoryStore, NullStore, ThemeStore};
pub use resolver::{ResolvedTheme, Resolver, resolve};
pub use ui::{RuntimeApplier, ThemeConfiguration, ThemeEngine};
pub use variable::{ShadeMap, ThemeVariable};

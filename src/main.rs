use anyhow::Context;
use tintbox::cli::{self, ModeTarget, OutputFormat, ThemeCommand};
use tintbox::config::{TintboxConfig, data_dir};
use tintbox::mode::Mode;
use tintbox::persistence::FileStore;
use tintbox::preview;
use tintbox::ui::{CssApplier, SystemPreference, ThemeEngine};

/// Load config and the persisted theme, run one command against the engine,
/// then print the resulting variable set.
fn main() -> anyhow::Result<()> {
    let cli_args = cli::parse_args();

    // Initialize logger (set RUST_LOG env var to control verbosity)
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match cli_args.config.clone().or_else(TintboxConfig::locate) {
        Some(path) => TintboxConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => TintboxConfig::default(),
    };

    let settings = config.engine_settings();
    let store_dir = cli_args
        .store_dir
        .clone()
        .or_else(|| config.storage_dir.clone())
        .unwrap_or_else(data_dir);
    let store = FileStore::new(&store_dir);
    log::debug!("theme store: {}", store.path().display());

    let mut engine = ThemeEngine::with_settings(settings, CssApplier::new(), store, SystemPreference);

    let format = match cli_args.command.unwrap_or(ThemeCommand::Show {
        format: OutputFormat::Css,
    }) {
        ThemeCommand::Palettes => {
            print!("{}", preview::render_palettes(engine.palette(), true));
            return Ok(());
        }
        ThemeCommand::Show { format } => format,
        ThemeCommand::Palette { id } => {
            engine.set_palette(id);
            OutputFormat::Swatch
        }
        ThemeCommand::Mode { target } => {
            match target {
                ModeTarget::Light => engine.set_mode(Mode::Light),
                ModeTarget::Dark => engine.set_mode(Mode::Dark),
                ModeTarget::Toggle => engine.toggle_mode(),
            }
            OutputFormat::Swatch
        }
        ThemeCommand::Color {
            variable,
            color,
            default,
        } => {
            engine.set_custom_color(variable, default, color);
            OutputFormat::Swatch
        }
        ThemeCommand::Reset => {
            engine.reset_theme();
            OutputFormat::Swatch
        }
    };

    match format {
        OutputFormat::Css => print!("{}", engine.applier().to_stylesheet()),
        OutputFormat::Swatch => print!("{}", preview::render_variables(engine.resolved(), true)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&engine.resolved().colors)?),
    }

    Ok(())
}

// Common test utilities for engine-level tests

use proptest::prelude::*;
use std::collections::BTreeMap;
use tintbox::ui::{CssApplier, FixedPreference, ThemeEngine};
use tintbox::{Mode, PaletteId, ThemeStore, ThemeVariable};

/// Engine over `store` with a fixed ambient preference.
#[allow(dead_code)]
pub fn engine_with(
    store: impl ThemeStore + 'static,
    preference: Option<Mode>,
) -> ThemeEngine<CssApplier> {
    ThemeEngine::new(CssApplier::new(), store, FixedPreference(preference))
}

/// What the document root currently shows: custom properties plus dark marker.
#[allow(dead_code)]
pub fn applied(engine: &ThemeEngine<CssApplier>) -> (BTreeMap<String, String>, bool) {
    (
        engine.applier().variables().clone(),
        engine.applier().is_dark(),
    )
}

/// A single call against the public mutation API.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Op {
    SetPalette(PaletteId),
    SetMode(Mode),
    Toggle,
    SetCustomColor(ThemeVariable, bool, Option<String>),
}

#[allow(dead_code)]
pub fn run(engine: &mut ThemeEngine<CssApplier>, op: &Op) {
    match op {
        Op::SetPalette(id) => engine.set_palette(*id),
        Op::SetMode(mode) => engine.set_mode(*mode),
        Op::Toggle => engine.toggle_mode(),
        Op::SetCustomColor(variable, use_default, color) => {
            engine.set_custom_color(*variable, *use_default, color.clone())
        }
    }
}

/// Proptest strategies over the engine's input space
#[allow(dead_code)]
pub mod strategy {
    use super::*;

    pub fn palette() -> impl Strategy<Value = PaletteId> {
        prop::sample::select(PaletteId::ALL.to_vec())
    }

    pub fn mode() -> impl Strategy<Value = Mode> {
        prop::sample::select(Mode::ALL.to_vec())
    }

    pub fn variable() -> impl Strategy<Value = ThemeVariable> {
        prop::sample::select(ThemeVariable::ALL.to_vec())
    }

    pub fn color() -> impl Strategy<Value = String> {
        "#[0-9a-f]{6}"
    }

    pub fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            palette().prop_map(Op::SetPalette),
            mode().prop_map(Op::SetMode),
            Just(Op::Toggle),
            (variable(), any::<bool>(), prop::option::of(color()))
                .prop_map(|(v, d, c)| Op::SetCustomColor(v, d, c)),
        ]
    }

    pub fn ops() -> impl Strategy<Value = Vec<Op>> {
        prop::collection::vec(op(), 0..24)
    }
}

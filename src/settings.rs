//! Game settings and key bindings
//!
//! Loaded from JSON by the host; any field left out takes its default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, TICK_RATE};
use crate::sim::{Action, InputState};

/// Raw key name → logical actions
///
/// Key names are matched lower-cased, the way browsers report `KeyboardEvent.key`
/// (`"a"`, `"arrowleft"`, `" "`). One key may drive several actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    map: BTreeMap<String, Vec<Action>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind("a", Action::Left);
        bindings.bind("arrowleft", Action::Left);
        bindings.bind("d", Action::Right);
        bindings.bind("arrowright", Action::Right);
        bindings.bind("w", Action::Jump);
        bindings.bind("arrowup", Action::Jump);
        // Space jumps and attacks at the same time
        bindings.bind(" ", Action::Jump);
        bindings.bind(" ", Action::Attack);
        bindings
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Add `action` to the actions driven by `key`
    pub fn bind(&mut self, key: &str, action: Action) {
        let actions = self.map.entry(key.to_lowercase()).or_default();
        if !actions.contains(&action) {
            actions.push(action);
        }
    }

    /// Remove every binding for `key`
    pub fn unbind(&mut self, key: &str) {
        self.map.remove(&key.to_lowercase());
    }

    /// Actions driven by a raw key name (empty if unbound)
    pub fn actions_for(&self, key: &str) -> &[Action] {
        self.map
            .get(&key.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Held-action snapshot for a set of held raw keys.
    ///
    /// An action stays held while any key bound to it is down.
    pub fn input_for<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> InputState {
        let mut input = InputState::new();
        for key in keys {
            for &action in self.actions_for(key) {
                input.press(action);
            }
        }
        input
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Maximum ticks run per frame when catching up
    pub max_substeps: u32,
    /// Seed for the headless demo autopilot
    pub demo_seed: u64,
    pub key_bindings: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            max_substeps: MAX_SUBSTEPS,
            demo_seed: 0x5eed,
            key_bindings: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        if settings.tick_rate == 0 {
            log::warn!("tick_rate of 0 is not usable, falling back to {}", TICK_RATE);
            settings.tick_rate = TICK_RATE;
        }
        if settings.max_substeps == 0 {
            log::warn!("max_substeps of 0 would never tick, using 1");
            settings.max_substeps = 1;
        }
        Ok(settings)
    }

    /// Parse settings, logging and falling back to defaults on bad input
    pub fn load_or_default(json: Option<&str>) -> Self {
        let Some(json) = json else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Length of one tick in seconds
    pub fn step_seconds(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }
}

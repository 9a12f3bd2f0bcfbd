//! Centralized viewer options with TOML preset support.
//!
//! Camera limits, input sensitivities, playback policy, lighting, and scene
//! loading settings are consolidated here. Options serialize to/from TOML so
//! hosts can ship tuned presets.

mod camera;
mod input;
mod lighting;
mod playback;
mod scene;

use std::path::Path;

pub use camera::{CameraOptions, MIN_ZOOM_FLOOR};
pub use input::InputOptions;
pub use lighting::LightingOptions;
pub use playback::PlaybackOptions;
use schemars::JsonSchema;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::ClockError;

/// `value` if finite, otherwise `fallback`. TOML accepts `nan` and `inf`,
/// so every float read from an options file goes through this before use.
pub(crate) fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[input]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection, zoom limits, and idle behavior.
    pub camera: CameraOptions,
    /// Pointer and wheel sensitivities.
    pub input: InputOptions,
    /// Mechanism time-scale policy.
    pub playback: PlaybackOptions,
    /// Camera-following light rig.
    pub lighting: LightingOptions,
    /// Model asset and load-time framing.
    #[schemars(skip)]
    pub scene: SceneOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The UI schema serialized as a JSON string, for web-based settings
    /// panels.
    pub fn json_schema_string() -> Result<String, ClockError> {
        serde_json::to_string(&Self::json_schema())
            .map_err(|e| ClockError::OptionsParse(e.to_string()))
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ClockError> {
        toml::from_str(content)
            .map_err(|e| ClockError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ClockError> {
        let content = std::fs::read_to_string(path).map_err(ClockError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ClockError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ClockError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ClockError::Io)?;
        }
        std::fs::write(path, content).map_err(ClockError::Io)
    }
}

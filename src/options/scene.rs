use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::parts::ClockPart;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Model asset and load-time framing.
pub struct SceneOptions {
    /// Resource path handed to the asset loader.
    #[schemars(skip)]
    pub asset_path: String,
    /// Part framed as soon as the model loads.
    #[schemars(title = "Default Part")]
    pub default_part: ClockPart,
    /// Multiplier applied to the model's depth bounds when restricting the
    /// camera target.
    #[schemars(skip)]
    pub depth_scale: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            asset_path: "assets/clock.json".to_owned(),
            default_part: ClockPart::GearHours,
            depth_scale: 2.0,
        }
    }
}

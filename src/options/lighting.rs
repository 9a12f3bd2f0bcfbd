use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Camera-following light rig: one ambient term plus one directional key
/// light.
pub struct LightingOptions {
    #[schemars(skip)]
    /// Ambient light colour (linear RGB).
    pub ambient_color: [f32; 3],
    #[schemars(title = "Key Light", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    /// Directional light intensity.
    pub key_intensity: f32,
    #[schemars(skip)]
    /// Directional light colour (linear RGB).
    pub key_color: [f32; 3],
    #[schemars(skip)]
    /// Directional light position in the rig's local frame. The light
    /// shines from this point toward the rig origin.
    pub key_position: [f32; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            // 0x666666
            ambient_color: [0.4, 0.4, 0.4],
            key_intensity: 0.5,
            key_color: [1.0, 1.0, 1.0],
            key_position: [0.0, 1.0, 1.0],
        }
    }
}

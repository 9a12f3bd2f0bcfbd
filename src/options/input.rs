use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Multipliers applied to raw pointer and wheel deltas before they reach
/// the camera.
pub struct InputOptions {
    /// Radians of rotation per pixel of drag.
    #[schemars(title = "Rotate Factor", range(min = 0.0005, max = 0.02), extend("step" = 0.0005))]
    pub rotate_factor: f32,
    /// Pan distance per pixel of drag, relative to the zoom distance.
    #[schemars(title = "Pan Factor", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub pan_factor: f32,
    /// Log-zoom change per wheel unit.
    #[schemars(title = "Zoom Factor", range(min = 0.0001, max = 0.01), extend("step" = 0.0001))]
    pub zoom_factor: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            rotate_factor: 0.004,
            pan_factor: 0.0025,
            zoom_factor: 0.001,
        }
    }
}

use std::f32::consts::FRAC_PI_2;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::finite_or;

/// Lowest zoom distance the camera will ever accept, regardless of options.
pub const MIN_ZOOM_FLOOR: f32 = 1e-3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, zoom limits, and idle behavior.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Zoom distance before any part has been framed.
    #[schemars(skip)]
    pub initial_zoom: f32,
    /// Closest the camera may get to its target.
    #[schemars(title = "Min Zoom", range(min = 0.01, max = 10.0), extend("step" = 0.01))]
    pub min_zoom: f32,
    /// Farthest the camera may get from its target.
    #[schemars(title = "Max Zoom", range(min = 10.0, max = 500.0), extend("step" = 1.0))]
    pub max_zoom: f32,
    /// Gap kept between the vertical angle and ±π/2, in radians.
    #[schemars(skip)]
    pub vertical_margin: f32,
    /// Turntable speed in radians per second when auto-rotate is on.
    #[schemars(title = "Auto-Rotate Speed", range(min = -2.0, max = 2.0), extend("step" = 0.05))]
    pub auto_rotate_speed: f32,
    /// Exponential decay rate (1/s) of drag inertia. Zero disables inertia.
    #[schemars(title = "Inertia Damping", range(min = 0.0, max = 20.0), extend("step" = 0.5))]
    pub damping: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.1,
            zfar: 1000.0,
            initial_zoom: 5.0,
            min_zoom: 0.5,
            max_zoom: 100.0,
            vertical_margin: 0.01,
            auto_rotate_speed: 0.2,
            damping: 0.0,
        }
    }
}

impl CameraOptions {
    /// Zoom bounds with the floor applied and the pair ordered.
    #[must_use]
    pub fn zoom_range(&self) -> (f32, f32) {
        let lo = self.min_zoom.max(MIN_ZOOM_FLOOR);
        let hi = self.max_zoom.max(lo);
        (lo, hi)
    }

    /// Largest magnitude of the vertical orbit angle, strictly below π/2.
    /// A non-finite margin falls back to the default.
    #[must_use]
    pub fn vertical_limit(&self) -> f32 {
        let margin =
            finite_or(self.vertical_margin, Self::default().vertical_margin);
        FRAC_PI_2 - margin.clamp(f32::EPSILON, FRAC_PI_2)
    }
}

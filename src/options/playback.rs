use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::finite_or;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Playback", inline)]
#[serde(default)]
/// Time-scale policy for the clock mechanism.
pub struct PlaybackOptions {
    /// Scale applied to the mechanism when the model finishes loading.
    #[schemars(title = "Speed", range(min = -10.0, max = 10.0), extend("step" = 0.1))]
    pub time_scale: f32,
    /// Whether negative scales run the mechanism backwards. When off,
    /// negative scales clamp to zero (paused).
    #[schemars(title = "Allow Reverse")]
    pub allow_reverse: bool,
    /// Largest accepted scale magnitude.
    #[schemars(skip)]
    pub max_time_scale: f32,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            allow_reverse: true,
            max_time_scale: 100.0,
        }
    }
}

impl PlaybackOptions {
    /// Bring a requested scale into the accepted range.
    ///
    /// Returns `None` for non-finite input, which callers ignore. A
    /// non-finite `max_time_scale` falls back to the default cap.
    #[must_use]
    pub fn sanitize(&self, scale: f32) -> Option<f32> {
        if !scale.is_finite() {
            return None;
        }
        let limit =
            finite_or(self.max_time_scale, Self::default().max_time_scale).abs();
        let lo = if self.allow_reverse { -limit } else { 0.0 };
        Some(scale.clamp(lo, limit))
    }
}

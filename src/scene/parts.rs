//! Named clock parts and their camera framing presets.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ClockError, PartNotFoundReason};

/// A labeled sub-assembly of the clock model that has a framing preset.
///
/// The `snake_case` name doubles as the scene node name in the model.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ClockPart {
    /// Hour wheel.
    GearHours,
    /// Pendulum bob and rod.
    Pendulum,
    /// Escapement anchor.
    Anchor,
    /// Escape wheel.
    EscapeWheel,
    /// Mainspring barrel.
    MovementSpring,
}

/// Camera framing for inspecting a part: orbit angles in radians and the
/// zoom distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartPreset {
    /// Horizontal orbit angle.
    pub horizontal: f32,
    /// Vertical orbit angle.
    pub vertical: f32,
    /// Distance from the part.
    pub zoom: f32,
}

impl PartPreset {
    const fn new(horizontal: f32, vertical: f32, zoom: f32) -> Self {
        Self {
            horizontal,
            vertical,
            zoom,
        }
    }
}

impl ClockPart {
    /// Every part with a preset, in menu order.
    pub const ALL: [ClockPart; 5] = [
        ClockPart::GearHours,
        ClockPart::Pendulum,
        ClockPart::Anchor,
        ClockPart::EscapeWheel,
        ClockPart::MovementSpring,
    ];

    /// Scene node name for this part.
    #[must_use]
    pub const fn node_name(self) -> &'static str {
        match self {
            Self::GearHours => "gear_hours",
            Self::Pendulum => "pendulum",
            Self::Anchor => "anchor",
            Self::EscapeWheel => "escape_wheel",
            Self::MovementSpring => "movement_spring",
        }
    }

    /// Framing used when the camera jumps to this part.
    #[must_use]
    pub const fn preset(self) -> PartPreset {
        match self {
            Self::GearHours => PartPreset::new(PI, 0.0, 16.0),
            Self::Pendulum => PartPreset::new(0.61, 0.05, 7.0),
            Self::Anchor => PartPreset::new(-2.8, 0.0, 5.0),
            Self::EscapeWheel => PartPreset::new(PI, 0.0, 6.2),
            Self::MovementSpring => PartPreset::new(0.58, 0.34, 11.0),
        }
    }
}

impl fmt::Display for ClockPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.node_name())
    }
}

impl FromStr for ClockPart {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|part| part.node_name() == s)
            .ok_or_else(|| {
                ClockError::part_not_found(s, PartNotFoundReason::UnknownPart)
            })
    }
}

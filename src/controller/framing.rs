//! Named-part framing.

use super::{SceneController, SceneState};
use crate::error::{ClockError, PartNotFoundReason};
use crate::scene::{ClockPart, Mechanics, SceneRoot};

impl<M: Mechanics> SceneController<M> {
    /// Frame the part called `part_id` (e.g. `"gear_hours"`).
    ///
    /// Fails with [`ClockError::PartNotFound`] if the model has not loaded,
    /// the name has no preset, or the model has no node of that name. On
    /// failure the camera is left untouched.
    pub fn look_at_part(&mut self, part_id: &str) -> Result<(), ClockError> {
        if !self.is_loaded() {
            return Err(ClockError::part_not_found(
                part_id,
                PartNotFoundReason::SceneNotLoaded,
            ));
        }
        let part = part_id.parse::<ClockPart>()?;
        self.look_at(part)
    }

    /// Typed form of [`look_at_part`](Self::look_at_part).
    ///
    /// Points the camera at the part's node and applies its preset angles
    /// and zoom.
    pub fn look_at(&mut self, part: ClockPart) -> Result<(), ClockError> {
        let SceneState::Loaded { root, .. } = &self.state else {
            return Err(ClockError::part_not_found(
                part.node_name(),
                PartNotFoundReason::SceneNotLoaded,
            ));
        };
        let position = root.find_by_name(part.node_name()).ok_or_else(|| {
            ClockError::part_not_found(
                part.node_name(),
                PartNotFoundReason::MissingNode,
            )
        })?;

        let preset = part.preset();
        log::debug!("framing {part} at {position}");
        self.camera.set_look_at(position);
        self.camera.set_orientation(preset.horizontal, preset.vertical);
        self.camera.set_zoom(preset.zoom);
        Ok(())
    }
}

//! Input dispatch for SceneController

use super::{CameraCommand, SceneController};
use crate::input::InputEvent;
use crate::scene::Mechanics;

impl<M: Mechanics> SceneController<M> {
    /// Process a platform-agnostic input event.
    ///
    /// Primary-button drags rotate the camera (or pan it while shift is
    /// held); the wheel zooms regardless of drag state. Other buttons are
    /// ignored.
    ///
    /// # Example
    ///
    /// ```ignore
    /// controller.handle_input(InputEvent::PointerMove { x, y, shift });
    /// controller.handle_input(InputEvent::Wheel { delta_y: 120.0 });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) {
        if let Some(command) = self.input.handle_event(event) {
            self.execute(command);
        }
    }

    /// Apply a camera command.
    pub fn execute(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::Grab => self.camera.hold(true),
            CameraCommand::Release => self.camera.hold(false),
            CameraCommand::Rotate {
                delta_horizontal,
                delta_vertical,
            } => self.camera.rotate(delta_horizontal, delta_vertical),
            CameraCommand::Pan { delta_x, delta_y } => {
                self.camera.pan(delta_x, delta_y);
            }
            CameraCommand::Zoom { delta } => self.camera.zoom_camera(delta),
            CameraCommand::ToggleAutoRotate => {
                let on = self.camera.toggle_auto_rotate();
                log::debug!("auto-rotate {}", if on { "on" } else { "off" });
            }
        }
    }
}

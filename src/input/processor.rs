//! Converts raw pointer and wheel events into camera commands.
//!
//! The `InputProcessor` owns the transient drag state and the sensitivity
//! multipliers. It is the only thing that sits between raw window events
//! and the controller's camera.

use super::drag::DragState;
use super::event::{InputEvent, MouseButton};
use crate::controller::CameraCommand;
use crate::options::InputOptions;

/// Converts raw input events into [`CameraCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     controller.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    drag: DragState,
    options: InputOptions,
}

impl InputProcessor {
    /// Create a processor with default sensitivities.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom sensitivities.
    #[must_use]
    pub fn with_options(options: InputOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Whether a primary-button drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Current sensitivities.
    #[must_use]
    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    /// Replace the sensitivities.
    pub fn set_options(&mut self, options: InputOptions) {
        self.options = options;
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<CameraCommand> {
        match event {
            InputEvent::PointerDown { button, x, y } => {
                if button != MouseButton::Primary {
                    return None;
                }
                log::debug!("drag start at ({x}, {y})");
                self.drag.press(x, y);
                Some(CameraCommand::Grab)
            }
            InputEvent::PointerMove { x, y, shift } => {
                self.handle_pointer_move(x, y, shift)
            }
            InputEvent::PointerUp { button } => {
                if button != MouseButton::Primary || !self.drag.release() {
                    return None;
                }
                log::debug!("drag end");
                Some(CameraCommand::Release)
            }
            InputEvent::Wheel { delta_y } => Some(CameraCommand::Zoom {
                delta: delta_y * self.options.zoom_factor,
            }),
        }
    }

    /// Pointer moved: rotate, or pan when shift is held. Nothing while idle.
    fn handle_pointer_move(
        &mut self,
        x: i32,
        y: i32,
        shift: bool,
    ) -> Option<CameraCommand> {
        let (dx, dy) = self.drag.motion(x, y)?;
        let (dx, dy) = (dx as f32, dy as f32);

        if shift {
            let factor = self.options.pan_factor;
            Some(CameraCommand::Pan {
                delta_x: -dx * factor,
                delta_y: dy * factor,
            })
        } else {
            let factor = self.options.rotate_factor;
            Some(CameraCommand::Rotate {
                delta_horizontal: dx * factor,
                delta_vertical: dy * factor,
            })
        }
    }
}

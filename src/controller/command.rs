//! The controller's complete interactive vocabulary.
//!
//! Raw pointer events become [`CameraCommand`]s through the
//! [`InputProcessor`](crate::input::InputProcessor); everything the host
//! feeds the controller arrives as a [`SceneEvent`].

use super::load::LoadId;
use crate::input::InputEvent;

/// A camera operation produced by input or issued programmatically.
///
/// ```ignore
/// controller.execute(CameraCommand::Zoom { delta: 0.1 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// The user started dragging.
    Grab,
    /// The user stopped dragging.
    Release,
    /// Orbit by the given angles (radians).
    Rotate {
        /// Added to the horizontal angle.
        delta_horizontal: f32,
        /// Added to the vertical angle (then clamped).
        delta_vertical: f32,
    },
    /// Move the target in the view plane, relative to zoom distance.
    Pan {
        /// Along camera right.
        delta_x: f32,
        /// Along camera up.
        delta_y: f32,
    },
    /// Log-scale zoom (positive = farther).
    Zoom {
        /// Exponent applied to the zoom distance.
        delta: f32,
    },
    /// Toggle turntable auto-rotation.
    ToggleAutoRotate,
}

/// Everything the host event loop can deliver to the controller.
///
/// Events are processed strictly in arrival order by
/// [`SceneController::handle_event`](super::SceneController::handle_event).
#[derive(Debug)]
pub enum SceneEvent<R> {
    /// Raw pointer or wheel input.
    Input(InputEvent),
    /// The viewport changed size.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// The asset loader finished.
    LoadComplete {
        /// Which load request this answers.
        load: LoadId,
        /// The loaded clock model.
        root: R,
    },
    /// The asset loader gave up.
    LoadFailed {
        /// Which load request this answers.
        load: LoadId,
        /// Loader-provided description.
        message: String,
    },
}

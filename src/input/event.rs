/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`CameraCommand`](crate::controller::CameraCommand)
/// values. Coordinates are integer client-area pixels.
///
/// # Example
///
/// ```ignore
/// controller.handle_input(InputEvent::PointerDown {
///     button: MouseButton::Primary,
///     x: 100,
///     y: 200,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed.
    PointerDown {
        /// Which button changed.
        button: MouseButton,
        /// Horizontal position in pixels.
        x: i32,
        /// Vertical position in pixels (down is positive).
        y: i32,
    },
    /// Pointer moved to an absolute position.
    PointerMove {
        /// Horizontal position in pixels.
        x: i32,
        /// Vertical position in pixels (down is positive).
        y: i32,
        /// Whether the pan modifier (shift) is held.
        shift: bool,
    },
    /// Mouse button released.
    PointerUp {
        /// Which button changed.
        button: MouseButton,
    },
    /// Scroll wheel (positive = scroll down = zoom out).
    Wheel {
        /// Vertical wheel delta in the platform's units.
        delta_y: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (usually left) mouse button.
    Primary,
    /// Secondary (usually right) mouse button.
    Secondary,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any other button, by platform index.
    Other(u16),
}

impl From<u16> for MouseButton {
    /// DOM `MouseEvent.button` numbering.
    fn from(button: u16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Primary,
            winit::event::MouseButton::Right => Self::Secondary,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back => Self::Other(3),
            winit::event::MouseButton::Forward => Self::Other(4),
            winit::event::MouseButton::Other(n) => Self::Other(n),
        }
    }
}

//! Input handling: event types, the drag state machine, and the input
//! processor that converts raw pointer events into camera commands.

/// Drag state machine.
pub(crate) mod drag;
/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into camera commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;

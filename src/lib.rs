// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbit-camera interaction and frame orchestration for an animated 3D
//! mechanical clock.
//!
//! The crate turns raw pointer and wheel input into orbit-camera motion,
//! keeps the camera's look-at target inside the clock's bounds, frames named
//! parts of the movement, and drives the clock's mechanism simulation at a
//! user-controlled speed. Rendering, asset parsing, and the gear simulation
//! itself are supplied by the host through the traits in [`scene`].
//!
//! # Key entry points
//!
//! - [`controller::SceneController`] - owns camera, model, and mechanism
//! - [`camera::OrbitCamera`] - spherical-coordinate camera with clamping
//! - [`input::InputProcessor`] - drag state machine and sensitivities
//! - [`options::Options`] - TOML-backed runtime configuration
//!
//! # Architecture
//!
//! Everything runs on the host's event-loop thread. Input, resize, and
//! load-completion events are delivered in order as
//! [`controller::SceneEvent`]s; each frame the host calls
//! [`update`](controller::SceneController::update) then
//! [`render`](controller::SceneController::render). The asset load is the
//! only asynchronous boundary and is tracked with a cancellable
//! [`controller::LoadToken`].

pub mod camera;
pub mod controller;
pub mod error;
pub mod input;
pub mod lighting;
pub mod options;
pub mod scene;
pub mod util;

pub use controller::{CameraCommand, SceneController, SceneEvent};
pub use error::{ClockError, PartNotFoundReason};

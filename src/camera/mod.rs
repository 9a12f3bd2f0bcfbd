//! Camera system for viewing the clock.
//!
//! Provides a spherical-coordinate orbit camera with rotation, panning,
//! zoom, target restriction, and optional idle behaviors.

/// Axis-aligned bounding boxes for target restriction.
pub mod bounds;
/// Orbit camera managing angles, zoom, target, and restriction.
pub mod controller;
/// Core camera struct and renderer uniform types.
pub mod core;

pub use bounds::Aabb;
pub use controller::OrbitCamera;
pub use self::core::{Camera, CameraUniform};

//! Scene-side collaborators of the controller.
//!
//! The controller never parses assets, simulates gears, or draws
//! triangles. It talks to those subsystems through the traits here:
//!
//! - [`SceneRoot`] - the loaded clock model, queried by node name
//! - [`Mechanics`] - the gear/escapement simulation bound to a root
//! - [`Renderer`] - draws a [`Frame`]
//! - [`AssetLoader`] - starts an asynchronous model load
//!
//! [`NodeTable`] is a small in-memory [`SceneRoot`] for hosts that build
//! their scene graph elsewhere and only need name lookup here.

mod nodes;
pub mod parts;

use glam::Vec3;
pub use nodes::{NodeTable, SceneNode};
pub use parts::{ClockPart, PartPreset};

use crate::camera::bounds::Aabb;
use crate::camera::core::{Camera, CameraUniform};
use crate::controller::LoadRequest;
use crate::lighting::LightingRig;

/// The loaded clock model.
pub trait SceneRoot {
    /// World-space position of the node called `name`, if any.
    fn find_by_name(&self, name: &str) -> Option<Vec3>;

    /// Box enclosing the whole model, or `None` if it has no extent.
    fn bounds(&self) -> Option<Aabb>;
}

/// The clock's mechanical simulation.
///
/// Implementations own the mapping from elapsed time to part rotations.
/// The controller only feeds it time.
pub trait Mechanics {
    /// Scene root type this simulation animates.
    type Root: SceneRoot;

    /// Build a simulation driving the parts of `root`.
    fn bind(root: &Self::Root) -> Self;

    /// Advance by `dt` seconds of already-scaled simulation time.
    fn update(&mut self, dt: f32);

    /// Current playback multiplier.
    fn time_scale(&self) -> f32;

    /// Replace the playback multiplier.
    fn set_time_scale(&mut self, scale: f32);
}

/// Everything a renderer needs to draw one frame.
pub struct Frame<'a, R> {
    /// Loaded model, or `None` while the asset is still loading.
    pub scene: Option<&'a R>,
    /// Camera parameters for this frame.
    pub camera: &'a Camera,
    /// Precomputed view-projection snapshot.
    pub uniform: CameraUniform,
    /// Camera-following light rig.
    pub lighting: &'a LightingRig,
}

/// Draws frames. Assumed infallible from the controller's perspective.
pub trait Renderer<R> {
    /// Draw `frame`.
    fn render(&mut self, frame: &Frame<'_, R>);
}

/// Starts asynchronous model loads.
///
/// The loader must eventually hand the host either a root or an error
/// tagged with the request's token; the host forwards that to the
/// controller as [`SceneEvent::LoadComplete`] or
/// [`SceneEvent::LoadFailed`]. Loaders may poll
/// [`LoadToken::is_cancelled`] to skip abandoned work.
///
/// [`SceneEvent::LoadComplete`]: crate::controller::SceneEvent::LoadComplete
/// [`SceneEvent::LoadFailed`]: crate::controller::SceneEvent::LoadFailed
/// [`LoadToken::is_cancelled`]: crate::controller::LoadToken::is_cancelled
pub trait AssetLoader {
    /// Begin loading `request.path`.
    fn load(&mut self, request: LoadRequest);
}

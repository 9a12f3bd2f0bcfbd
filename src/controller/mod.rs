//! Scene controller: owns the orbit camera, the loaded clock model, and the
//! mechanism simulation, and drives the per-frame loop.

mod command;
mod framing;
mod input;
mod lifecycle;
mod load;

pub use command::{CameraCommand, SceneEvent};
pub use load::{LoadId, LoadRequest, LoadToken};

use crate::camera::controller::OrbitCamera;
use crate::error::ClockError;
use crate::input::InputProcessor;
use crate::lighting::LightingRig;
use crate::options::Options;
use crate::scene::{Frame, Mechanics, Renderer};

/// Whether the clock model has arrived.
///
/// Every operation that needs the model matches on this, so the
/// not-yet-loaded case is always handled explicitly.
enum SceneState<M: Mechanics> {
    /// Waiting for (or never started) the asset load.
    Unloaded {
        /// Token of the outstanding load, if one was started.
        pending: Option<LoadToken>,
        /// Speed requested before the mechanism existed; applied on load.
        pending_time_scale: f32,
    },
    /// Model and mechanism are live.
    Loaded {
        /// The clock model.
        root: M::Root,
        /// Simulation bound to `root`.
        mechanics: M,
    },
}

/// Interactive controller for the clock viewer.
///
/// # Frame loop
///
/// Each frame, call [`update`](Self::update) with the elapsed seconds and
/// then [`render`](Self::render). Call [`resize`](Self::resize) when the
/// viewport changes. Pointer input is forwarded via
/// [`handle_input`](Self::handle_input), or everything at once through
/// [`handle_event`](Self::handle_event).
///
/// # Loading
///
/// [`begin_load`](Self::begin_load) issues a [`LoadRequest`] for the host's
/// asset loader. When the loader finishes, the host delivers
/// [`SceneEvent::LoadComplete`]; the controller then binds the mechanism,
/// restricts the camera target to the model's (depth-stretched) bounds, and
/// frames the default part. Until then, mechanism updates are skipped and
/// part framing fails with [`ClockError::PartNotFound`].
pub struct SceneController<M: Mechanics> {
    camera: OrbitCamera,
    input: InputProcessor,
    lighting: LightingRig,
    state: SceneState<M>,
    options: Options,
    viewport: (u32, u32),
    next_load_id: u64,
}

impl<M: Mechanics> SceneController<M> {
    /// Controller with default options for a `width` × `height` viewport.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_options(Options::default(), width, height)
    }

    /// Controller with custom options.
    #[must_use]
    pub fn with_options(options: Options, width: u32, height: u32) -> Self {
        let camera = OrbitCamera::new(&options.camera, aspect(width, height));
        let pending_time_scale = options
            .playback
            .sanitize(options.playback.time_scale)
            .unwrap_or(1.0);
        Self {
            camera,
            input: InputProcessor::with_options(options.input.clone()),
            lighting: LightingRig::new(&options.lighting),
            state: SceneState::Unloaded {
                pending: None,
                pending_time_scale,
            },
            options,
            viewport: (width, height),
            next_load_id: 0,
        }
    }

    /// Advance one frame: camera idle behavior, light rig, and (once
    /// loaded) the mechanism by `dt` times its time scale.
    pub fn update(&mut self, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("ignoring invalid frame delta {dt}");
            return;
        }
        self.camera.update(dt);
        self.lighting.follow_camera(self.camera.orientation());
        if let SceneState::Loaded { mechanics, .. } = &mut self.state {
            let scaled = dt * mechanics.time_scale();
            mechanics.update(scaled);
        }
    }

    /// Hand the current frame to `renderer`.
    pub fn render<Rd: Renderer<M::Root>>(&self, renderer: &mut Rd) {
        let frame = Frame {
            scene: self.scene(),
            camera: self.camera.camera(),
            uniform: self.camera.uniform(),
            lighting: &self.lighting,
        };
        renderer.render(&frame);
    }

    /// Set the mechanism's playback speed.
    ///
    /// Zero pauses and negative values run backwards (unless
    /// `playback.allow_reverse` is off, in which case they pause). The
    /// magnitude is capped at `playback.max_time_scale` and non-finite
    /// values are ignored. Before the model loads, the value is remembered
    /// and applied to the mechanism when it is created.
    pub fn set_speed(&mut self, scale: f32) {
        let Some(scale) = self.options.playback.sanitize(scale) else {
            log::warn!("ignoring non-finite time scale");
            return;
        };
        match &mut self.state {
            SceneState::Loaded { mechanics, .. } => {
                mechanics.set_time_scale(scale);
            }
            SceneState::Unloaded {
                pending_time_scale, ..
            } => {
                log::debug!("deferring time scale {scale} until load");
                *pending_time_scale = scale;
            }
        }
    }

    /// Effective time scale: the mechanism's once loaded, otherwise the
    /// pending value.
    #[must_use]
    pub fn time_scale(&self) -> f32 {
        match &self.state {
            SceneState::Loaded { mechanics, .. } => mechanics.time_scale(),
            SceneState::Unloaded {
                pending_time_scale, ..
            } => *pending_time_scale,
        }
    }

    /// Record the new viewport size and update the camera aspect ratio.
    /// A zero height is treated as one pixel; a zero width keeps the
    /// previous aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.camera.set_aspect(aspect(width, height));
    }

    /// Process one host event.
    ///
    /// Only [`SceneEvent::LoadFailed`] produces an error, and it is
    /// non-fatal: the controller stays unloaded.
    pub fn handle_event(
        &mut self,
        event: SceneEvent<M::Root>,
    ) -> Result<(), ClockError> {
        match event {
            SceneEvent::Input(input) => {
                self.handle_input(input);
                Ok(())
            }
            SceneEvent::Resize { width, height } => {
                self.resize(width, height);
                Ok(())
            }
            SceneEvent::LoadComplete { load, root } => {
                self.on_load_complete(load, root);
                Ok(())
            }
            SceneEvent::LoadFailed { load, message } => {
                self.on_load_failed(load, message)
            }
        }
    }

    // -- Accessors --

    /// The orbit camera.
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Mutable access to the orbit camera for programmatic control.
    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    /// The camera-following light rig.
    #[must_use]
    pub fn lighting(&self) -> &LightingRig {
        &self.lighting
    }

    /// The input processor (drag state, sensitivities).
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Options the controller was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Last viewport size passed to [`resize`](Self::resize) or the
    /// constructor.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Whether the clock model has loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, SceneState::Loaded { .. })
    }

    /// The loaded clock model.
    #[must_use]
    pub fn scene(&self) -> Option<&M::Root> {
        match &self.state {
            SceneState::Loaded { root, .. } => Some(root),
            SceneState::Unloaded { .. } => None,
        }
    }

    /// The mechanism simulation.
    #[must_use]
    pub fn mechanics(&self) -> Option<&M> {
        match &self.state {
            SceneState::Loaded { mechanics, .. } => Some(mechanics),
            SceneState::Unloaded { .. } => None,
        }
    }
}

impl<M: Mechanics> Drop for SceneController<M> {
    fn drop(&mut self) {
        self.cancel_load();
    }
}

fn aspect(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

use std::f32::consts::TAU;

use glam::{Mat4, Quat, Vec2, Vec3};

use crate::camera::bounds::Aabb;
use crate::camera::core::{Camera, CameraUniform};
use crate::options::{finite_or, CameraOptions};

/// Below this angular speed (rad/s) inertia stops.
const INERTIA_REST_SPEED: f32 = 1e-4;

/// Spherical-coordinate camera orbiting a movable look-at target.
///
/// The eye sits at `target + zoom * (cos v · sin h, sin v, cos v · cos h)`
/// where `h`/`v` are the horizontal and vertical angles. The vertical angle
/// is kept strictly inside `(-π/2, π/2)` so the view never flips, the zoom
/// distance stays inside a strictly positive range, and when a bounding
/// restriction is installed the target never leaves it.
///
/// Every mutation is total: out-of-range values are clamped and non-finite
/// values are ignored.
pub struct OrbitCamera {
    horizontal: f32,
    vertical: f32,
    distance: f32,
    target: Vec3,
    restriction: Option<Aabb>,

    camera: Camera,

    min_zoom: f32,
    max_zoom: f32,
    vertical_limit: f32,

    auto_rotate: bool,
    auto_rotate_speed: f32,

    /// Inertia decay rate; zero disables inertia.
    damping: f32,
    /// Whether the user is currently dragging.
    held: bool,
    /// Rotation applied by input since the last `update`.
    pending_rotation: Vec2,
    /// Coasting angular velocity (horizontal, vertical) in rad/s.
    angular_velocity: Vec2,
}

impl OrbitCamera {
    /// Camera looking at the origin from `options.initial_zoom` along +Z.
    ///
    /// Non-finite option values are replaced with their defaults.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let defaults = CameraOptions::default();
        let (min_zoom, max_zoom) = options.zoom_range();
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        let distance = finite_or(options.initial_zoom, defaults.initial_zoom)
            .clamp(min_zoom, max_zoom);

        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: finite_or(options.fovy, defaults.fovy),
            znear: finite_or(options.znear, defaults.znear),
            zfar: finite_or(options.zfar, defaults.zfar),
        };

        let mut orbit = Self {
            horizontal: 0.0,
            vertical: 0.0,
            distance,
            target: Vec3::ZERO,
            restriction: None,
            camera,
            min_zoom,
            max_zoom,
            vertical_limit: options.vertical_limit(),
            auto_rotate: false,
            auto_rotate_speed: finite_or(
                options.auto_rotate_speed,
                defaults.auto_rotate_speed,
            ),
            damping: options.damping.max(0.0),
            held: false,
            pending_rotation: Vec2::ZERO,
            angular_velocity: Vec2::ZERO,
        };
        orbit.update_camera_pos();
        orbit
    }

    fn update_camera_pos(&mut self) {
        let orientation = self.orientation();
        self.camera.eye =
            self.target + orientation * Vec3::Z * self.distance;
        self.camera.target = self.target;
        self.camera.up = orientation * Vec3::Y;
    }

    fn clamp_vertical(&self, v: f32) -> f32 {
        v.clamp(-self.vertical_limit, self.vertical_limit)
    }

    fn restrict(&self, p: Vec3) -> Vec3 {
        self.restriction.map_or(p, |b| b.clamp(p))
    }

    fn apply_rotation(&mut self, delta: Vec2) {
        self.horizontal += delta.x;
        self.vertical = self.clamp_vertical(self.vertical + delta.y);
    }

    // -- Mutation --

    /// Orbit by the given angles in radians. The horizontal angle is
    /// unbounded; the vertical angle is clamped to the inversion-safe range.
    pub fn rotate(&mut self, delta_horizontal: f32, delta_vertical: f32) {
        if !all_finite(&[delta_horizontal, delta_vertical]) {
            log::warn!("ignoring non-finite camera rotation");
            return;
        }
        let delta = Vec2::new(delta_horizontal, delta_vertical);
        self.apply_rotation(delta);
        self.pending_rotation += delta;
        self.update_camera_pos();
    }

    /// Move the target in the camera's right/up plane by `delta` times the
    /// zoom distance, so panning speed is independent of zoom.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        if !all_finite(&[delta_x, delta_y]) {
            log::warn!("ignoring non-finite camera pan");
            return;
        }
        let orientation = self.orientation();
        let right = orientation * Vec3::X;
        let up = orientation * Vec3::Y;
        let translation = (right * delta_x + up * delta_y) * self.distance;
        self.target = self.restrict(self.target + translation);
        self.update_camera_pos();
    }

    /// Zoom relative to the current distance: `distance *= exp(delta)`.
    /// Positive deltas move away from the target.
    pub fn zoom_camera(&mut self, delta: f32) {
        if !delta.is_finite() {
            log::warn!("ignoring non-finite camera zoom");
            return;
        }
        self.set_zoom(self.distance * delta.exp());
    }

    /// Set the zoom distance, clamped to the configured range.
    pub fn set_zoom(&mut self, distance: f32) {
        if distance.is_nan() {
            log::warn!("ignoring NaN zoom distance");
            return;
        }
        self.distance = distance.clamp(self.min_zoom, self.max_zoom);
        self.update_camera_pos();
    }

    /// Set the target, clamped into the bounding restriction if one is
    /// installed.
    pub fn set_look_at(&mut self, point: Vec3) {
        if !point.is_finite() {
            log::warn!("ignoring non-finite look-at target");
            return;
        }
        self.target = self.restrict(point);
        self.update_camera_pos();
    }

    /// Set both orbit angles. The vertical angle is clamped.
    pub fn set_orientation(&mut self, horizontal: f32, vertical: f32) {
        if !all_finite(&[horizontal, vertical]) {
            log::warn!("ignoring non-finite camera orientation");
            return;
        }
        self.horizontal = horizontal;
        self.vertical = self.clamp_vertical(vertical);
        self.angular_velocity = Vec2::ZERO;
        self.update_camera_pos();
    }

    /// Confine the target to `bounds`, snapping the current target into it.
    pub fn restrict_look_at(&mut self, bounds: Aabb) {
        self.restriction = Some(bounds);
        self.target = bounds.clamp(self.target);
        self.update_camera_pos();
    }

    /// Remove the bounding restriction.
    pub fn clear_restriction(&mut self) {
        self.restriction = None;
    }

    /// Set the viewport aspect ratio. Non-positive values are ignored.
    pub fn set_aspect(&mut self, aspect: f32) {
        if !aspect.is_finite() || aspect <= 0.0 {
            log::warn!("ignoring invalid aspect ratio {aspect}");
            return;
        }
        self.camera.aspect = aspect;
    }

    /// Mark whether the user is dragging. Inertia only coasts while
    /// released.
    pub fn hold(&mut self, held: bool) {
        self.held = held;
        if held {
            self.angular_velocity = Vec2::ZERO;
        }
    }

    /// Turn turntable auto-rotation on or off.
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    /// Flip turntable auto-rotation. Returns the new state.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }

    /// Advance idle behavior by `dt` seconds: turntable rotation and drag
    /// inertia. Both are off by default, making this a no-op.
    ///
    /// Whenever either one moves the camera, the horizontal angle is
    /// wrapped into `[0, 2π)` so long sessions keep full precision.
    pub fn update(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let mut coasting = false;

        if self.auto_rotate {
            self.horizontal += self.auto_rotate_speed * dt;
            coasting = true;
        }

        if self.damping > 0.0 {
            if self.held {
                self.angular_velocity = self.pending_rotation / dt;
            } else if self.angular_velocity.length() > INERTIA_REST_SPEED {
                self.apply_rotation(self.angular_velocity * dt);
                self.angular_velocity *= (-self.damping * dt).exp();
                coasting = true;
            } else {
                self.angular_velocity = Vec2::ZERO;
            }
        }
        self.pending_rotation = Vec2::ZERO;

        if coasting {
            self.horizontal = self.horizontal.rem_euclid(TAU);
        }

        self.update_camera_pos();
    }

    // -- Read accessors --

    /// Horizontal orbit angle in radians.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }

    /// Vertical orbit angle in radians.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.vertical
    }

    /// Largest allowed magnitude of the vertical angle.
    #[must_use]
    pub fn vertical_limit(&self) -> f32 {
        self.vertical_limit
    }

    /// Distance from eye to target.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.distance
    }

    /// Allowed zoom range.
    #[must_use]
    pub fn zoom_range(&self) -> (f32, f32) {
        (self.min_zoom, self.max_zoom)
    }

    /// Current look-at target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Installed bounding restriction, if any.
    #[must_use]
    pub fn restriction(&self) -> Option<Aabb> {
        self.restriction
    }

    /// Viewport aspect ratio.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.camera.aspect
    }

    /// Whether turntable auto-rotation is on.
    #[must_use]
    pub fn is_auto_rotating(&self) -> bool {
        self.auto_rotate
    }

    /// Rotation taking camera-local axes to world axes (local +Z points
    /// from the target toward the eye).
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.horizontal)
            * Quat::from_rotation_x(-self.vertical)
    }

    /// Eye position in world space.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.camera.eye
    }

    /// Camera parameters derived from the orbit state.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.build_view()
    }

    /// Projection matrix for the current aspect ratio.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.camera.build_projection()
    }

    /// Renderer-facing snapshot of the current camera.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&self.camera);
        uniform
    }
}

fn all_finite(values: &[f32]) -> bool {
    values.iter().all(|v| v.is_finite())
}

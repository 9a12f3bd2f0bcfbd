//! Camera-following light rig.
//!
//! The rig holds an ambient term and one directional key light defined in
//! its own local frame. Every frame the controller copies the camera
//! orientation onto the rig (headlamp mode), so the model is always lit
//! from the same side relative to the viewer.

use glam::{Quat, Vec3};

use crate::options::LightingOptions;

/// GPU-ready lighting snapshot.
///
/// WGSL layout (auto-padded):
///   key_dir: vec3<f32>        (offset 0,  align 16)
///   key_intensity: f32        (offset 12)
///   key_color: vec3<f32>      (offset 16, align 16)
///   _pad1: f32                (offset 28)
///   ambient: vec3<f32>        (offset 32, align 16)
///   _pad2: f32                (offset 44)
///   Total: 48 bytes
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// World-space unit vector pointing toward the key light.
    pub key_dir: [f32; 3],
    /// Key light intensity.
    pub key_intensity: f32,
    /// Key light colour.
    pub key_color: [f32; 3],
    pub(crate) _pad1: f32,
    /// Ambient colour.
    pub ambient: [f32; 3],
    pub(crate) _pad2: f32,
}

/// Ambient plus one directional light, rotated with the camera.
#[derive(Debug, Clone, PartialEq)]
pub struct LightingRig {
    rotation: Quat,
    ambient: Vec3,
    key_color: Vec3,
    key_intensity: f32,
    /// Unit vector toward the key light in the rig's local frame.
    key_local_dir: Vec3,
}

impl LightingRig {
    /// Build a rig from lighting options, with identity orientation.
    #[must_use]
    pub fn new(options: &LightingOptions) -> Self {
        let key_local_dir = Vec3::from_array(options.key_position)
            .try_normalize()
            .unwrap_or(Vec3::Z);
        Self {
            rotation: Quat::IDENTITY,
            ambient: Vec3::from_array(options.ambient_color),
            key_color: Vec3::from_array(options.key_color),
            key_intensity: options.key_intensity,
            key_local_dir,
        }
    }

    /// Copy the camera's orientation onto the rig.
    pub fn follow_camera(&mut self, orientation: Quat) {
        self.rotation = orientation;
    }

    /// Current rig orientation.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// World-space unit vector pointing toward the key light.
    #[must_use]
    pub fn key_direction(&self) -> Vec3 {
        self.rotation * self.key_local_dir
    }

    /// Ambient colour.
    #[must_use]
    pub fn ambient(&self) -> Vec3 {
        self.ambient
    }

    /// Snapshot for upload.
    #[must_use]
    pub fn uniform(&self) -> LightingUniform {
        LightingUniform {
            key_dir: self.key_direction().to_array(),
            key_intensity: self.key_intensity,
            key_color: self.key_color.to_array(),
            _pad1: 0.0,
            ambient: self.ambient.to_array(),
            _pad2: 0.0,
        }
    }
}

impl Default for LightingRig {
    fn default() -> Self {
        Self::new(&LightingOptions::default())
    }
}

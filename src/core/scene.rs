use super::constants::{CAMERA_Z, LANDSCAPE_SCALE};
use super::params::{ParamSettings, Uniform};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Vertical offset and opacity of one intro element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub offset_y: f32,
    pub alpha: f32,
}

impl Default for Reveal {
    fn default() -> Self {
        Self {
            offset_y: 0.0,
            alpha: 1.0,
        }
    }
}

/// Every animated output the stage writes: mesh transform, shader uniforms,
/// progress line, camera distance and intro element states.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneValues {
    pub rotation: Vec3,
    pub scale: f32,
    pub uniforms: [f32; 6],
    pub line_scale: f32,
    pub camera_z: f32,
    pub reveals: Vec<Reveal>,
}

impl SceneValues {
    pub fn new(settings: &ParamSettings, reveal_count: usize) -> Self {
        Self {
            rotation: Vec3::ZERO,
            scale: LANDSCAPE_SCALE,
            uniforms: settings.initial_uniforms(),
            line_scale: settings.line.start,
            camera_z: CAMERA_Z,
            reveals: vec![Reveal::default(); reveal_count],
        }
    }

    #[inline]
    pub fn uniform(&self, uniform: Uniform) -> f32 {
        self.uniforms[uniform.index()]
    }

    #[inline]
    pub fn set_uniform(&mut self, uniform: Uniform, value: f32) {
        self.uniforms[uniform.index()] = value;
    }

    /// Object-to-world transform of the mesh (XYZ Euler order, uniform scale).
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rotation, Vec3::ZERO)
    }
}

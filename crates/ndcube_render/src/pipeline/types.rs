//! GPU-compatible data types for the line pipeline
//!
//! These types are designed to match the shader layouts in `line.wgsl`
//! exactly. All types derive Pod and Zeroable for safe buffer uploads.

use bytemuck::{Pod, Zeroable};

/// A projected vertex with color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in 3D space (x, y, z)
    pub position: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    /// Convert a projected f64 point
    pub fn from_point(point: [f64; 3], color: [f32; 4]) -> Self {
        Self {
            position: [point[0] as f32, point[1] as f32, point[2] as f32],
            color,
        }
    }
}

const IDENTITY: [[f32; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Uniforms for the line pass
/// Layout: 144 bytes total (must match line.wgsl LineUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineUniforms {
    /// Projection · view, column-major (64 bytes)
    pub view_proj: [[f32; 4]; 4],
    /// Spin of the projected object, column-major (64 bytes)
    pub model: [[f32; 4]; 4],
    /// Multiplier on vertex alpha
    pub opacity: f32,
    /// Uniform scale applied to positions before the view transform
    pub model_scale: f32,
    pub _padding: [f32; 2],
}

impl Default for LineUniforms {
    fn default() -> Self {
        Self {
            view_proj: IDENTITY,
            model: IDENTITY,
            opacity: 0.8,
            model_scale: 1.0,
            _padding: [0.0; 2],
        }
    }
}

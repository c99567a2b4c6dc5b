//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Position at location 0, color at location 1
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    /// Per-vertex buffer layout for a render pipeline
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Convert an RGBA8 color to normalized floats
#[inline]
pub fn rgba8_to_f32(color: [u8; 4]) -> [f32; 4] {
    color.map(|c| c as f32 / 255.0)
}

/// Colors for scene elements
pub mod colors {
    /// Night sky behind the stars
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.08, 1.0];
    /// Same background as RGB8 for software surfaces
    pub const BACKGROUND_RGB8: [u8; 3] = [5, 5, 20];
}

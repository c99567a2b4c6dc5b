//! Quad generation for GPU hosts

use glam::Vec2;

use super::vertex::{Vertex, rgba8_to_f32};
use super::{PixelRect, Surface};

/// Generate two triangles covering an axis-aligned rectangle
pub fn quad(min: Vec2, max: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Map a pixel position (top-left origin) to clip space (center origin, y up)
#[inline]
pub fn pixel_to_clip(p: Vec2, surface_size: Vec2) -> Vec2 {
    Vec2::new(
        p.x / surface_size.x * 2.0 - 1.0,
        1.0 - p.y / surface_size.y * 2.0,
    )
}

/// A [`Surface`] that collects fills as clip-space triangles for a vertex buffer
#[derive(Debug, Clone)]
pub struct QuadBatch {
    size: Vec2,
    vertices: Vec<Vertex>,
}

impl QuadBatch {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Vec2::new(width.max(1) as f32, height.max(1) as f32),
            vertices: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = Vec2::new(width.max(1) as f32, height.max(1) as f32);
    }

    /// Layout of the buffer filled from [`QuadBatch::as_bytes`]
    pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
        Vertex::desc()
    }

    /// Vertices queued this frame, for `draw(0..count, 0..1)`
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex data ready for `queue.write_buffer`
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Start a new frame
    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

impl Surface for QuadBatch {
    fn fill_rect(&mut self, rect: PixelRect, color: [u8; 4]) {
        let min = pixel_to_clip(Vec2::new(rect.x as f32, rect.y as f32), self.size);
        let max = pixel_to_clip(
            Vec2::new(rect.right() as f32, rect.bottom() as f32),
            self.size,
        );
        self.vertices
            .extend_from_slice(&quad(min, max, rgba8_to_f32(color)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_clip_corners() {
        let size = Vec2::new(200.0, 100.0);
        assert_eq!(pixel_to_clip(Vec2::ZERO, size), Vec2::new(-1.0, 1.0));
        assert_eq!(pixel_to_clip(size, size), Vec2::new(1.0, -1.0));
        assert_eq!(pixel_to_clip(Vec2::new(100.0, 50.0), size), Vec2::ZERO);
    }

    #[test]
    fn test_quad_batch_emits_six_vertices_per_fill() {
        let mut batch = QuadBatch::new(16, 16);
        batch.fill_rect(PixelRect::new(0, 0, 8, 8), [255, 255, 255, 255]);
        batch.fill_rect(PixelRect::new(8, 8, 8, 8), [255, 255, 255, 0]);
        assert_eq!(batch.vertices().len(), 12);
        assert_eq!(batch.vertices()[0].position, [-1.0, 1.0]);
        assert_eq!(batch.vertices()[11].position, [1.0, -1.0]);
        assert_eq!(batch.vertices()[6].color[3], 0.0);
        assert_eq!(batch.as_bytes().len(), 12 * std::mem::size_of::<Vertex>());

        batch.clear();
        assert!(batch.vertices().is_empty());
    }

    #[test]
    fn test_vertex_layout_matches_uploaded_bytes() {
        let mut batch = QuadBatch::new(8, 8);
        batch.fill_rect(PixelRect::new(0, 0, 8, 8), [255, 255, 255, 255]);
        let layout = QuadBatch::vertex_layout();
        assert_eq!(
            batch.as_bytes().len() as u64,
            layout.array_stride * batch.vertex_count() as u64
        );
    }

    #[test]
    fn test_resize_changes_clip_mapping() {
        let mut batch = QuadBatch::new(16, 16);
        batch.resize(32, 32);
        batch.fill_rect(PixelRect::new(0, 0, 16, 16), [255, 255, 255, 255]);
        // Half the surface now ends at the clip-space center
        assert_eq!(batch.vertices()[5].position, [0.0, 0.0]);
    }
}

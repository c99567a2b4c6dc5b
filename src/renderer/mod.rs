//! Drawing targets for the starfield
//!
//! Everything the field draws goes through [`Surface`]: hard-edged,
//! axis-aligned filled rectangles with an RGBA8 color. Hosts provide the
//! surface; the field never owns one.

pub mod frame_loop;
pub mod pixel_buffer;
pub mod shapes;
pub mod vertex;

pub use frame_loop::FrameLoop;
pub use pixel_buffer::PixelBuffer;
pub use shapes::QuadBatch;
pub use vertex::Vertex;

/// Axis-aligned rectangle in surface pixels (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Exclusive bottom edge
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

/// A 2D drawing target owned by the host
pub trait Surface {
    /// Fill `rect` with `color` (RGBA8, straight alpha), no edge smoothing
    fn fill_rect(&mut self, rect: PixelRect, color: [u8; 4]);
}

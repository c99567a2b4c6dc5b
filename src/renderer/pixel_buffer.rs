//! Software RGBA8 surface for headless rendering

use super::{PixelRect, Surface};

/// Source-over blend of one channel, `alpha` in 0..=255
#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u16) -> u8 {
    let result = src as u16 * alpha + dst as u16 * (255 - alpha);
    ((result + 127) / 255) as u8
}

/// Row-major RGBA8 pixel buffer
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Fill the whole buffer with an opaque color
    pub fn clear(&mut self, rgb: [u8; 3]) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
    }

    /// RGBA at (x, y), None when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.pixels[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Resize, discarding contents
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width as usize * height as usize * 4];
    }
}

impl Surface for PixelBuffer {
    fn fill_rect(&mut self, rect: PixelRect, color: [u8; 4]) {
        let x0 = rect.x.clamp(0, self.width as i32) as usize;
        let y0 = rect.y.clamp(0, self.height as i32) as usize;
        let x1 = rect.right().clamp(0, self.width as i32) as usize;
        let y1 = rect.bottom().clamp(0, self.height as i32) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let [r, g, b, a] = color;
        let alpha = a as u16;
        let stride = self.width as usize * 4;
        for y in y0..y1 {
            let row = &mut self.pixels[y * stride + x0 * 4..y * stride + x1 * 4];
            for px in row.chunks_exact_mut(4) {
                px[0] = blend_channel(r, px[0], alpha);
                px[1] = blend_channel(g, px[1], alpha);
                px[2] = blend_channel(b, px[2], alpha);
                px[3] = a.max(px[3]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_opaque() {
        let mut buf = PixelBuffer::new(16, 16);
        buf.fill_rect(PixelRect::new(8, 0, 8, 8), [255, 255, 255, 255]);
        assert_eq!(buf.pixel(8, 0), Some([255, 255, 255, 255]));
        assert_eq!(buf.pixel(15, 7), Some([255, 255, 255, 255]));
        assert_eq!(buf.pixel(7, 0), Some([0, 0, 0, 0]));
        assert_eq!(buf.pixel(8, 8), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_fill_blends_over_background() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.clear([0, 0, 0]);
        buf.fill_rect(PixelRect::new(0, 0, 4, 4), [255, 255, 255, 128]);
        assert_eq!(buf.pixel(1, 1), Some([128, 128, 128, 255]));
    }

    #[test]
    fn test_fill_clips_to_bounds() {
        let mut buf = PixelBuffer::new(10, 10);
        buf.fill_rect(PixelRect::new(8, 8, 16, 16), [255, 0, 0, 255]);
        assert_eq!(buf.pixel(9, 9), Some([255, 0, 0, 255]));
        assert_eq!(buf.pixel(10, 10), None);

        // Entirely outside: no panic, no change
        buf.fill_rect(PixelRect::new(-20, 40, 8, 8), [0, 255, 0, 255]);
        assert_eq!(buf.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_resize_discards_contents() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.clear([9, 9, 9]);
        buf.resize(8, 2);
        assert_eq!((buf.width(), buf.height()), (8, 2));
        assert_eq!(buf.pixels().len(), 8 * 2 * 4);
        assert_eq!(buf.pixel(7, 1), Some([0, 0, 0, 0]));
        assert_eq!(buf.pixel(0, 2), None);
    }
}

//! Pixel Stars - a twinkling pixel-art starfield
//!
//! Core modules:
//! - `sim`: Star field state, per-frame twinkle update, signal board
//! - `renderer`: Drawing surfaces (software pixel buffer, GPU quad batch) and the frame loop
//! - `settings`: Serializable configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use renderer::{FrameLoop, PixelBuffer, PixelRect, Surface};
pub use settings::{QualityPreset, Settings};
pub use sim::{FieldConfig, FrameRequest, SignalBoard, Star, StarField};

/// Starfield configuration constants
pub mod consts {
    /// Grid cell size in pixels for the blocky retro look
    pub const PIXEL_SIZE: u32 = 8;
    /// Largest accepted grid cell size
    pub const MAX_PIXEL_SIZE: u32 = 256;
    /// Stars per field
    pub const STAR_COUNT: usize = 40;

    /// Brightness ceiling; reaching it flips the star to dimming
    pub const ALPHA_MAX: f32 = 1.0;
    /// Brightness floor; reaching it flips the star to brightening
    pub const ALPHA_MIN: f32 = 0.1;

    /// Twinkle speed range (alpha per frame), half-open
    pub const TWINKLE_SPEED_MIN: f32 = 0.005;
    pub const TWINKLE_SPEED_MAX: f32 = 0.020;

    /// Star color (opaque white, alpha comes from brightness)
    pub const STAR_RGB: [u8; 3] = [255, 255, 255];
}

/// Snap a non-negative coordinate down to the nearest multiple of `cell`.
///
/// The division truncates toward zero, so `snap_to_grid(13.0, 8) == 8`.
#[inline]
pub fn snap_to_grid(coord: f32, cell: u32) -> i32 {
    let cell = cell.clamp(1, consts::MAX_PIXEL_SIZE) as i32;
    (coord / cell as f32) as i32 * cell
}

/// Convert a normalized brightness to an 8-bit alpha channel value
#[inline]
pub fn alpha_to_u8(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

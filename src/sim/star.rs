//! A single twinkling star and its per-frame update

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ALPHA_MAX, ALPHA_MIN, MAX_PIXEL_SIZE, STAR_RGB};
use crate::renderer::PixelRect;
use crate::{alpha_to_u8, snap_to_grid};

/// One animated particle in the field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Position in surface pixels, fixed at creation
    pub pos: Vec2,
    /// Size class (1 or 2) in grid cells
    pub size: u8,
    /// Brightness in [ALPHA_MIN, ALPHA_MAX] once animating
    pub alpha: f32,
    /// Signed alpha step per frame
    pub alpha_speed: f32,
}

impl Star {
    pub fn new(pos: Vec2, size: u8, alpha: f32, alpha_speed: f32) -> Self {
        Self {
            pos,
            size,
            alpha,
            alpha_speed,
        }
    }

    /// Grid-snapped square this star covers; `cell` is capped at `MAX_PIXEL_SIZE`
    pub fn snapped_rect(&self, cell: u32) -> PixelRect {
        let cell = cell.clamp(1, MAX_PIXEL_SIZE);
        let side = (self.size as u32).saturating_mul(cell);
        PixelRect::new(
            snap_to_grid(self.pos.x, cell),
            snap_to_grid(self.pos.y, cell),
            side,
            side,
        )
    }

    /// RGBA8 fill color for the current brightness
    pub fn color(&self) -> [u8; 4] {
        let [r, g, b] = STAR_RGB;
        [r, g, b, alpha_to_u8(self.alpha)]
    }
}

/// Advance a star's brightness by one frame.
///
/// Overshooting the ceiling clamps to exactly `ALPHA_MAX` and turns the star
/// dimming; undershooting the floor clamps to exactly `ALPHA_MIN` and turns it
/// brightening. The floor and ceiling are intentionally asymmetric.
pub fn advance(mut star: Star) -> Star {
    star.alpha += star.alpha_speed;
    if star.alpha > ALPHA_MAX {
        star.alpha = ALPHA_MAX;
        star.alpha_speed = -star.alpha_speed.abs();
    } else if star.alpha < ALPHA_MIN {
        star.alpha = ALPHA_MIN;
        star.alpha_speed = star.alpha_speed.abs();
    }
    star
}

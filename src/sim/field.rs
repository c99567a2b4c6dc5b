//! The star field: a fixed-size set of stars confined to the surface

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::star::{Star, advance};
use crate::consts::{MAX_PIXEL_SIZE, PIXEL_SIZE, STAR_COUNT, TWINKLE_SPEED_MAX, TWINKLE_SPEED_MIN};
use crate::renderer::Surface;

/// Field-wide configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConfig {
    /// Grid cell size in pixels
    pub cell_size: u32,
    /// Stars generated on every reset
    pub star_count: usize,
    /// Advance brightness each frame (off = frozen stars)
    pub twinkle: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            cell_size: PIXEL_SIZE,
            star_count: STAR_COUNT,
            twinkle: true,
        }
    }
}

/// Lifecycle of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPhase {
    /// Surface size unknown, no stars yet
    Uninitialized,
    /// Stars present, frame loop running
    Animating,
}

/// Returned by [`StarField::render_frame`]; the host schedules the next
/// frame on its own refresh mechanism.
#[must_use = "the host must schedule the next frame"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// Call `render_frame` again on the next display refresh
    NextFrame,
}

/// Largest `f32` strictly below the integer `extent` (> 0)
pub(crate) fn coord_limit(extent: i32) -> f32 {
    let rounded = extent as f32;
    if rounded as f64 >= extent as f64 {
        f32::from_bits(rounded.to_bits() - 1)
    } else {
        rounded
    }
}

/// Twinkling pixel-star field
#[derive(Debug, Clone)]
pub struct StarField {
    config: FieldConfig,
    stars: Vec<Star>,
    rng: Pcg32,
    /// Last accepted surface size
    size: Option<(u32, u32)>,
}

impl StarField {
    /// Create an empty field with a seeded generator
    pub fn new(mut config: FieldConfig, seed: u64) -> Self {
        config.cell_size = config.cell_size.clamp(1, MAX_PIXEL_SIZE);
        Self {
            config,
            stars: Vec::with_capacity(config.star_count),
            rng: Pcg32::seed_from_u64(seed),
            size: None,
        }
    }

    /// Create an empty field with a randomly seeded generator
    pub fn with_random_seed(config: FieldConfig) -> Self {
        Self::new(config, rand::random())
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Last accepted surface size
    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }

    pub fn phase(&self) -> FieldPhase {
        if self.size.is_some() {
            FieldPhase::Animating
        } else {
            FieldPhase::Uninitialized
        }
    }

    /// Host reports the drawable area. Non-positive sizes are ignored;
    /// otherwise the whole field is regenerated.
    pub fn on_surface_size_known(&mut self, width: i32, height: i32) {
        if width <= 0 || height <= 0 {
            log::debug!("Ignoring surface size {}x{}", width, height);
            return;
        }

        // Sample in f64 so the bound stays exact for widths f32 cannot represent
        let (x_max, y_max) = (coord_limit(width), coord_limit(height));
        self.stars.clear();
        for _ in 0..self.config.star_count {
            let x = self.rng.random_range(0.0..width as f64) as f32;
            let y = self.rng.random_range(0.0..height as f64) as f32;
            let pos = Vec2::new(x.min(x_max), y.min(y_max));
            let size = self.rng.random_range(1..=2u8);
            let alpha: f32 = self.rng.random();
            let speed = self.rng.random_range(TWINKLE_SPEED_MIN..TWINKLE_SPEED_MAX);
            self.stars.push(Star::new(pos, size, alpha, speed));
        }
        self.size = Some((width as u32, height as u32));

        log::debug!(
            "Star field reset for {}x{} ({} stars)",
            width,
            height,
            self.stars.len()
        );
    }

    /// Advance every star one frame and draw it snapped to the grid.
    ///
    /// Always asks for another frame; the loop only ends when the host stops
    /// calling.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameRequest {
        let cell = self.config.cell_size;
        for star in &mut self.stars {
            if self.config.twinkle {
                *star = advance(*star);
            }
            surface.fill_rect(star.snapped_rect(cell), star.color());
        }
        FrameRequest::NextFrame
    }
}

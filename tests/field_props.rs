//! Property tests for star generation and twinkle bounds

use pixel_stars::consts::{ALPHA_MAX, ALPHA_MIN, STAR_COUNT, TWINKLE_SPEED_MAX, TWINKLE_SPEED_MIN};
use pixel_stars::renderer::{PixelRect, Surface};
use pixel_stars::sim::{FieldConfig, Star, StarField, advance};
use pixel_stars::snap_to_grid;
use proptest::prelude::*;

/// Surface that drops every fill
struct NullSurface;

impl Surface for NullSurface {
    fn fill_rect(&mut self, _rect: PixelRect, _color: [u8; 4]) {}
}

proptest! {
    #[test]
    fn generated_stars_within_bounds(seed in any::<u64>(), w in 1i32..2000, h in 1i32..2000) {
        let mut field = StarField::new(FieldConfig::default(), seed);
        field.on_surface_size_known(w, h);

        prop_assert_eq!(field.stars().len(), STAR_COUNT);
        for star in field.stars() {
            prop_assert!(star.pos.x >= 0.0 && star.pos.x < w as f32);
            prop_assert!(star.pos.y >= 0.0 && star.pos.y < h as f32);
            prop_assert!(star.size == 1 || star.size == 2);
            prop_assert!(star.alpha >= 0.0 && star.alpha < 1.0);
            prop_assert!(star.alpha_speed >= TWINKLE_SPEED_MIN && star.alpha_speed < TWINKLE_SPEED_MAX);
        }
    }

    #[test]
    fn non_positive_size_is_ignored(seed in any::<u64>(), bad in -50i32..=0, good in 1i32..500, width_first in any::<bool>()) {
        let mut field = StarField::new(FieldConfig::default(), seed);
        field.on_surface_size_known(good, good);
        let before = field.stars().to_vec();

        if width_first {
            field.on_surface_size_known(bad, good);
        } else {
            field.on_surface_size_known(good, bad);
        }
        prop_assert_eq!(field.stars(), &before[..]);
    }

    #[test]
    fn reset_always_yields_star_count(seed in any::<u64>(), sizes in prop::collection::vec((1i32..800, 1i32..800), 1..8)) {
        let mut field = StarField::new(FieldConfig::default(), seed);
        for (w, h) in sizes {
            field.on_surface_size_known(w, h);
            prop_assert_eq!(field.stars().len(), STAR_COUNT);
            for star in field.stars() {
                prop_assert!(star.pos.x < w as f32 && star.pos.y < h as f32);
            }
        }
    }

    #[test]
    fn alpha_stays_bounded(
        alpha in 0.0f32..1.0,
        speed in TWINKLE_SPEED_MIN..TWINKLE_SPEED_MAX,
        steps in 1usize..2000,
    ) {
        let mut star = Star::new(Default::default(), 1, alpha, speed);
        for _ in 0..steps {
            let prev = star;
            star = advance(star);
            prop_assert!(star.alpha >= ALPHA_MIN && star.alpha <= ALPHA_MAX);
            if prev.alpha + prev.alpha_speed > ALPHA_MAX {
                prop_assert_eq!(star.alpha, ALPHA_MAX);
                prop_assert!(star.alpha_speed < 0.0);
            } else if prev.alpha + prev.alpha_speed < ALPHA_MIN {
                prop_assert_eq!(star.alpha, ALPHA_MIN);
                prop_assert!(star.alpha_speed > 0.0);
            }
        }
    }

    #[test]
    fn snapped_coordinates_are_grid_aligned(x in 0u32..4096, cell in 1u32..32) {
        let x = x as f32;
        let snapped = snap_to_grid(x, cell);
        prop_assert_eq!(snapped % cell as i32, 0);
        prop_assert!(snapped as f32 <= x);
        prop_assert!(x - (snapped as f32) < cell as f32);
    }

    #[test]
    fn frames_never_change_star_count(seed in any::<u64>(), frames in 0usize..300) {
        let mut field = StarField::new(FieldConfig::default(), seed);
        field.on_surface_size_known(64, 64);
        for _ in 0..frames {
            let _ = field.render_frame(&mut NullSurface);
        }
        prop_assert_eq!(field.stars().len(), STAR_COUNT);
    }
}

//! Pixel Stars entry point
//!
//! Native mode runs the starfield headless and writes the last frame as PNG:
//!
//! `pixel-stars [WIDTH HEIGHT FRAMES OUT.png [SETTINGS.json]]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    native::run(std::env::args().skip(1).collect())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive the library directly
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, bail};

    use pixel_stars::renderer::vertex::colors;
    use pixel_stars::{FrameLoop, PixelBuffer, Settings, StarField};

    const DEFAULT_WIDTH: u32 = 320;
    const DEFAULT_HEIGHT: u32 = 240;
    const DEFAULT_FRAMES: u64 = 120;
    const DEFAULT_OUT: &str = "stars.png";

    struct Args {
        width: u32,
        height: u32,
        frames: u64,
        out: PathBuf,
        settings: Option<PathBuf>,
    }

    fn parse_args(args: &[String]) -> anyhow::Result<Args> {
        if args.len() > 5 {
            bail!("usage: pixel-stars [WIDTH HEIGHT FRAMES OUT.png [SETTINGS.json]]");
        }
        let width = match args.first() {
            Some(s) => s.parse().with_context(|| format!("invalid width {s:?}"))?,
            None => DEFAULT_WIDTH,
        };
        let height = match args.get(1) {
            Some(s) => s.parse().with_context(|| format!("invalid height {s:?}"))?,
            None => DEFAULT_HEIGHT,
        };
        let frames = match args.get(2) {
            Some(s) => s.parse().with_context(|| format!("invalid frame count {s:?}"))?,
            None => DEFAULT_FRAMES,
        };
        if width == 0 || height == 0 {
            bail!("surface must be at least 1x1, got {width}x{height}");
        }
        Ok(Args {
            width,
            height,
            frames,
            out: PathBuf::from(args.get(3).map(String::as_str).unwrap_or(DEFAULT_OUT)),
            settings: args.get(4).map(PathBuf::from),
        })
    }

    pub fn run(args: Vec<String>) -> anyhow::Result<()> {
        let args = parse_args(&args)?;
        log::info!("Pixel Stars (native) starting...");

        let settings = match &args.settings {
            Some(path) => Settings::load_from(path),
            None => Settings::default(),
        };
        let config = settings.field_config();
        let mut field = match settings.seed {
            Some(seed) => StarField::new(config, seed),
            None => StarField::with_random_seed(config),
        };

        let width = i32::try_from(args.width).context("width out of range")?;
        let height = i32::try_from(args.height).context("height out of range")?;
        field.on_surface_size_known(width, height);

        let mut buffer = PixelBuffer::new(args.width, args.height);
        let mut frame_loop = FrameLoop::new();
        let rendered = frame_loop.run_for(args.frames, &mut field, &mut buffer, |buf| {
            buf.clear(colors::BACKGROUND_RGB8)
        });
        log::info!(
            "Rendered {} frames of {} stars ({}x{}, cell {})",
            rendered,
            field.stars().len(),
            args.width,
            args.height,
            config.cell_size
        );

        let image = image::RgbaImage::from_raw(args.width, args.height, buffer.into_pixels())
            .context("pixel buffer does not match image size")?;
        image
            .save(&args.out)
            .with_context(|| format!("failed to write {}", args.out.display()))?;
        log::info!("Wrote {}", args.out.display());
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn strings(args: &[&str]) -> Vec<String> {
            args.iter().map(|s| s.to_string()).collect()
        }

        #[test]
        fn test_parse_defaults() {
            let args = parse_args(&[]).unwrap();
            assert_eq!((args.width, args.height), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
            assert_eq!(args.frames, DEFAULT_FRAMES);
            assert_eq!(args.out, PathBuf::from(DEFAULT_OUT));
            assert!(args.settings.is_none());
        }

        #[test]
        fn test_parse_rejects_bad_input() {
            assert!(parse_args(&strings(&["wide"])).is_err());
            assert!(parse_args(&strings(&["0", "10"])).is_err());
        }

        #[test]
        fn test_parse_full() {
            let args = parse_args(&strings(&["64", "48", "3", "out.png", "s.json"])).unwrap();
            assert_eq!((args.width, args.height, args.frames), (64, 48, 3));
            assert_eq!(args.settings, Some(PathBuf::from("s.json")));
        }
    }
}

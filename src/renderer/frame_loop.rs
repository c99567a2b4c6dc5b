//! Host-side frame driver
//!
//! Calls [`StarField::render_frame`] once per display refresh for as long as
//! the field keeps requesting frames and the host stays attached.

use super::Surface;
use crate::sim::{FrameRequest, StarField};

/// Nominal refresh interval used by [`FrameLoop::run_for`] (60 Hz)
pub const REFRESH_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// Frame driver with FPS tracking
#[derive(Debug, Clone)]
pub struct FrameLoop {
    /// A frame has been requested and not yet rendered
    pending: bool,
    /// Host detached; no more frames
    detached: bool,
    frames_rendered: u64,
    // FPS tracking over the last 60 frames
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    /// A loop with the first frame already requested
    pub fn new() -> Self {
        Self {
            pending: true,
            detached: false,
            frames_rendered: 0,
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn is_running(&self) -> bool {
        self.pending && !self.detached
    }

    /// Host surface went away; later refreshes are ignored
    pub fn detach(&mut self) {
        if !self.detached {
            log::debug!("Frame loop detached after {} frames", self.frames_rendered);
        }
        self.detached = true;
    }

    /// Display refresh callback. Returns true if a frame was rendered.
    pub fn on_display_refresh<S: Surface + ?Sized>(
        &mut self,
        time_ms: f64,
        field: &mut StarField,
        surface: &mut S,
    ) -> bool {
        if !self.is_running() {
            return false;
        }

        self.pending = false;
        match field.render_frame(surface) {
            FrameRequest::NextFrame => self.pending = true,
        }
        self.frames_rendered += 1;

        // Track frame times for FPS
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % 60;

        // Oldest sample is the next slot to be overwritten; 60 samples span 59 intervals
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time_ms - oldest_time;
            if elapsed > 0.0 {
                self.fps = (59_000.0 / elapsed).round() as u32;
            }
        }

        true
    }

    /// Drive `frames` refreshes at a nominal 60 Hz, calling `before_frame`
    /// on the surface ahead of each one (e.g. to clear it).
    pub fn run_for<S, F>(
        &mut self,
        frames: u64,
        field: &mut StarField,
        surface: &mut S,
        mut before_frame: F,
    ) -> u64
    where
        S: Surface,
        F: FnMut(&mut S),
    {
        let mut rendered = 0;
        for _ in 0..frames {
            if !self.is_running() {
                break;
            }
            let time_ms = (self.frames_rendered + 1) as f64 * REFRESH_INTERVAL_MS;
            before_frame(surface);
            if self.on_display_refresh(time_ms, field, surface) {
                rendered += 1;
            }
        }
        rendered
    }
}

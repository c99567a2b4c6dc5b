//! Starfield and board state
//!
//! Pure state, no platform or GPU dependencies:
//! - Seeded RNG per field
//! - Drawing only through the `Surface` trait
//! - The host owns scheduling; `render_frame` just asks for the next frame

pub mod field;
pub mod signals;
pub mod star;

pub use field::{FieldConfig, FieldPhase, FrameRequest, StarField};
pub use signals::{
    BoardEvent, BoardPhase, COMPLETION_HOLD_SECS, SignalBoard, SignalKind, SoundCue, SoundRequest,
    TOTAL_SIGNALS, TapOutcome,
};
pub use star::{Star, advance};

//! Signal board: six icons that must each be tapped once
//!
//! Every first tap plays the icon's sound cue and dims the icon. The sixth
//! distinct tap completes the board, which holds the success message for
//! [`COMPLETION_HOLD_SECS`] before asking the host to show the restored screen.

use serde::{Deserialize, Serialize};

/// Number of icons on the board
pub const TOTAL_SIGNALS: usize = 6;

/// Seconds the success message stays up before the restored screen
pub const COMPLETION_HOLD_SECS: f32 = 1.0;

/// Opacity of a dimmed (already tapped) icon
pub const DIMMED_ALPHA: f32 = 0.2;
/// Color saturation of a dimmed icon (grayscale)
pub const DIMMED_SATURATION: f32 = 0.0;

/// Status line shown once every icon is dimmed
pub const RESTORED_TEXT: &str = "SILENCED RESTORED.";

/// The tappable icons, in board order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    Mobile,
    Mail,
    Message,
    Megaphone,
    Bell,
    Tv,
}

impl SignalKind {
    pub const ALL: [SignalKind; TOTAL_SIGNALS] = [
        SignalKind::Mobile,
        SignalKind::Mail,
        SignalKind::Message,
        SignalKind::Megaphone,
        SignalKind::Bell,
        SignalKind::Tv,
    ];

    /// Sound played on the first tap
    pub fn cue(&self) -> SoundCue {
        match self {
            SignalKind::Mobile => SoundCue::Phone,
            SignalKind::Mail => SoundCue::Email,
            SignalKind::Message => SoundCue::Message,
            SignalKind::Megaphone => SoundCue::Megaphone,
            SignalKind::Bell => SoundCue::Bell,
            SignalKind::Tv => SoundCue::Tv,
        }
    }

    #[inline]
    fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

/// Sound assets, one per icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    Bell,
    Email,
    Megaphone,
    Message,
    Phone,
    Tv,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Bell => "bell",
            SoundCue::Email => "email",
            SoundCue::Megaphone => "megaphone",
            SoundCue::Message => "message",
            SoundCue::Phone => "phone",
            SoundCue::Tv => "tv",
        }
    }

    /// Asset path relative to the host's resource root
    pub fn asset_path(&self) -> String {
        format!("raw/{}", self.as_str())
    }
}

/// A cue for the host's sound player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundRequest {
    pub cue: SoundCue,
    /// Playback volume (0.0 - 1.0)
    pub volume: f32,
}

/// Result of tapping an icon
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapOutcome {
    /// Icon already dimmed (or board finished); nothing happens
    Ignored,
    /// Icon dimmed; play `sound`
    Dimmed { sound: SoundRequest, remaining: usize },
    /// Last icon dimmed; play `sound` and show the success message
    Completed { sound: SoundRequest },
}

/// Events emitted while the board is updated over time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// Dismiss the board and present the restored screen
    ShowRestored,
}

/// Board lifecycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardPhase {
    /// Waiting for taps
    Active,
    /// All icons dimmed, holding the success message
    Completing { hold_secs: f32 },
    /// Restored screen requested
    Restored,
}

/// Tap-to-dim game state
#[derive(Debug, Clone)]
pub struct SignalBoard {
    /// Bitset of dimmed icons
    dimmed: u8,
    phase: BoardPhase,
    volume: f32,
}

impl Default for SignalBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalBoard {
    pub fn new() -> Self {
        Self::with_volume(1.0)
    }

    /// Board whose cues play at `volume` (clamped to 0.0 - 1.0)
    pub fn with_volume(volume: f32) -> Self {
        Self {
            dimmed: 0,
            phase: BoardPhase::Active,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn phase(&self) -> BoardPhase {
        self.phase
    }

    pub fn is_dimmed(&self, kind: SignalKind) -> bool {
        self.dimmed & kind.bit() != 0
    }

    /// Icons still waiting for a tap
    pub fn remaining(&self) -> usize {
        TOTAL_SIGNALS - self.dimmed.count_ones() as usize
    }

    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    /// Tap an icon
    pub fn tap(&mut self, kind: SignalKind) -> TapOutcome {
        if self.phase != BoardPhase::Active || self.is_dimmed(kind) {
            return TapOutcome::Ignored;
        }

        self.dimmed |= kind.bit();
        let sound = SoundRequest {
            cue: kind.cue(),
            volume: self.volume,
        };
        let remaining = self.remaining();
        log::debug!("Dimmed {:?} ({} remaining)", kind, remaining);

        if remaining == 0 {
            log::info!("All signals dimmed");
            self.phase = BoardPhase::Completing {
                hold_secs: COMPLETION_HOLD_SECS,
            };
            TapOutcome::Completed { sound }
        } else {
            TapOutcome::Dimmed { sound, remaining }
        }
    }

    /// Advance the completion hold by `dt` seconds
    pub fn update(&mut self, dt: f32) -> Option<BoardEvent> {
        if let BoardPhase::Completing { hold_secs } = self.phase {
            let hold_secs = hold_secs - dt;
            if hold_secs <= 0.0 {
                self.phase = BoardPhase::Restored;
                return Some(BoardEvent::ShowRestored);
            }
            self.phase = BoardPhase::Completing { hold_secs };
        }
        None
    }

    /// Footer status line
    pub fn status_text(&self) -> String {
        if self.is_complete() {
            RESTORED_TEXT.to_string()
        } else {
            format!("{} SIGNALS TO DIM", self.remaining())
        }
    }

    /// Icon opacity for rendering
    pub fn icon_alpha(&self, kind: SignalKind) -> f32 {
        if self.is_dimmed(kind) { DIMMED_ALPHA } else { 1.0 }
    }

    /// Icon color saturation for rendering
    pub fn icon_saturation(&self, kind: SignalKind) -> f32 {
        if self.is_dimmed(kind) {
            DIMMED_SATURATION
        } else {
            1.0
        }
    }
}

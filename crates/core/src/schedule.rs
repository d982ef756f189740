//! Frame-indexed input scheduling policies.
//!
//! A policy maps the frame counter to the button mask that should be live
//! for the following frame. Policies are pure functions of the counter:
//! identical counter sequences always yield identical input sequences, which
//! keeps automated runs reproducible. Swapping or disabling the policy never
//! touches the control loop itself.

use crate::input::{Button, ButtonMask};

/// Simulated frame rate of the console (frames per second).
pub const FRAMES_PER_SECOND: u64 = 60;

/// A deterministic mapping from frame counter to button mask.
pub trait InputSchedule {
    /// The mask that should be live after `frame` completed frames.
    ///
    /// Must depend on nothing but `frame` and the policy's own
    /// configuration.
    fn mask_for_frame(&self, frame: u64) -> ButtonMask;
}

/// Policy that never presses anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Idle;

impl InputSchedule for Idle {
    fn mask_for_frame(&self, _frame: u64) -> ButtonMask {
        ButtonMask::NONE
    }
}

/// Holds a single button on a fixed cadence once a warm-up period has
/// passed.
///
/// For `frame < warmup_frames` the mask is empty; afterwards `button` is
/// pressed exactly on frames where `frame % period == phase`. The default
/// configuration taps A once a second after a 15 second warm-up, long
/// enough for a typical title screen to settle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PressAfterWarmup {
    /// Number of frames to wait before any press.
    pub warmup_frames: u64,
    /// Cadence of the press, in frames.
    pub period: u64,
    /// Offset within the cadence at which the button is held.
    pub phase: u64,
    /// The button to press.
    pub button: Button,
}

impl Default for PressAfterWarmup {
    fn default() -> Self {
        Self {
            warmup_frames: 15 * FRAMES_PER_SECOND,
            period: FRAMES_PER_SECOND,
            phase: 2,
            button: Button::A,
        }
    }
}

impl InputSchedule for PressAfterWarmup {
    fn mask_for_frame(&self, frame: u64) -> ButtonMask {
        if self.period != 0 && frame >= self.warmup_frames && frame % self.period == self.phase {
            ButtonMask::NONE.with(self.button)
        } else {
            ButtonMask::NONE
        }
    }
}

//! Control loop driving a console session to completion.
//!
//! One run is a strict sequence per iteration: liveness check, step,
//! interaction flush, input policy, pacing. The loop owns no state beyond
//! the frame counter and the last mask it applied; everything else lives
//! behind the [`Console`] seam.

use crate::input::ButtonMask;
use crate::schedule::InputSchedule;
use crate::session::Console;

/// Frames between progress lines at debug verbosity (10 s at 60 Hz).
const PROGRESS_INTERVAL: u64 = 600;

/// Outcome of one completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of frames stepped; equals the number of loop iterations.
    pub frames: u64,
}

/// Drives `console` until it reports completion.
///
/// Per iteration, in order: query liveness (exit when done), step one
/// frame, flush interaction, advance the frame counter by exactly one,
/// evaluate `schedule` at the new counter and apply the mask when it
/// differs from the one already live, then pace to real time. The mask
/// applied after frame `n` is the one consumed by frame `n + 1`.
///
/// A console that faults internally reports done through the liveness
/// query, so this function has no error path: a finished run and a crashed
/// console look the same from here.
pub fn run<C: Console, S: InputSchedule>(console: &mut C, schedule: &S) -> RunSummary {
    let mut frame: u64 = 0;
    let mut applied: Option<ButtonMask> = None;

    tracing::info!("run started");
    while !console.is_done() {
        console.step();
        console.flush_interaction();
        frame += 1;

        let mask = schedule.mask_for_frame(frame);
        if applied != Some(mask) {
            tracing::debug!(frame, input = %mask, "input changed");
            console.set_input(mask);
            applied = Some(mask);
        }

        if frame % PROGRESS_INTERVAL == 0 {
            tracing::debug!(frame, "still running");
        }

        console.pace();
    }
    tracing::info!(frames = frame, "run finished");

    RunSummary { frames: frame }
}

//! Unit tests for the control loop.
//!
//! Driven against [`ScriptedConsole`], which records every call the loop
//! makes; the tests pin the per-iteration sequencing, the frame counter,
//! and which mask was live for which step.

use nesdrive_core::{Button, ButtonMask, Console, Idle, PressAfterWarmup, run};

use crate::common::{Call, ScriptedConsole};

#[test]
fn frame_counter_matches_iteration_count() {
    for frames in [0, 1, 5, 100] {
        let mut console = ScriptedConsole::new(frames);
        let summary = run(&mut console, &Idle);
        assert_eq!(summary.frames, frames, "counter after {frames} iterations");
        assert_eq!(console.steps() as u64, frames, "one step per iteration");
    }
}

#[test]
fn liveness_is_checked_before_every_step_and_last() {
    let mut console = ScriptedConsole::new(3);
    let _ = run(&mut console, &Idle);

    let done_checks = console
        .calls
        .iter()
        .filter(|c| **c == Call::DoneCheck)
        .count();
    assert_eq!(done_checks, 4, "one check per step plus the terminal one");
    assert_eq!(
        console.calls.last(),
        Some(&Call::DoneCheck),
        "nothing is issued after the console reports done"
    );
}

#[test]
fn iteration_sequencing_is_fixed() {
    let mut console = ScriptedConsole::new(1);
    let _ = run(&mut console, &Idle);

    assert_eq!(
        console.calls,
        vec![
            Call::DoneCheck,
            Call::Step,
            Call::Flush,
            Call::SetInput(0),
            Call::Pace,
            Call::DoneCheck,
        ]
    );
}

#[test]
fn unchanged_mask_is_applied_once() {
    let mut console = ScriptedConsole::new(5);
    let _ = run(&mut console, &Idle);

    let applications: Vec<&Call> = console
        .calls
        .iter()
        .filter(|c| matches!(c, Call::SetInput(_)))
        .collect();
    assert_eq!(
        applications,
        vec![&Call::SetInput(0)],
        "an idle schedule settles after the first application"
    );
}

#[test]
fn scheduled_press_reaches_the_following_step() {
    // Press A on every even frame from the start.
    let policy = PressAfterWarmup {
        warmup_frames: 0,
        period: 2,
        phase: 0,
        button: Button::A,
    };
    let mut console = ScriptedConsole::new(4);
    let _ = run(&mut console, &policy);

    let applied: Vec<u8> = console
        .calls
        .iter()
        .filter_map(|c| match c {
            Call::SetInput(mask) => Some(*mask),
            _ => None,
        })
        .collect();
    assert_eq!(applied, vec![0x00, 0x01, 0x00, 0x01]);

    // The mask applied after frame n is the one live during frame n + 1.
    assert_eq!(console.mask_per_step, vec![0x00, 0x00, 0x01, 0x00]);
}

#[test]
fn default_policy_presses_after_warmup_only() {
    let mut console = ScriptedConsole::new(1000);
    let summary = run(&mut console, &PressAfterWarmup::default());
    assert_eq!(summary.frames, 1000);

    assert!(
        console.mask_per_step[..902].iter().all(|m| *m == 0),
        "no input during warm-up"
    );
    // Frames 902 and 962 carry the press; it is live for the step after.
    assert_eq!(console.mask_per_step[902], Button::A.bit());
    assert_eq!(console.mask_per_step[962], Button::A.bit());
    let presses = console.mask_per_step.iter().filter(|m| **m != 0).count();
    assert_eq!(presses, 2);
}

#[test]
fn done_query_is_stable_without_a_step() {
    let mut finished = ScriptedConsole::new(0);
    assert!(finished.is_done());
    assert!(finished.is_done(), "repeat query must agree");

    let mut running = ScriptedConsole::new(2);
    assert!(!running.is_done());
    assert!(!running.is_done(), "repeat query must agree");
}

#[test]
fn zeroed_mask_overrides_prior_input() {
    let mut console = ScriptedConsole::new(1);
    console.set_input([Button::A, Button::Start].into_iter().collect());
    console.set_input(ButtonMask::NONE);
    console.step();

    assert_eq!(
        console.mask_per_step,
        vec![0x00],
        "last write wins; the step sees no buttons pressed"
    );
}

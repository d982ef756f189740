//! Control harness for a native NES console module.
//!
//! This crate drives a pre-built emulator core (a shared library exposing a
//! fixed C ABI) through one complete interactive run. It implements the
//! following:
//! 1. **FFI:** Loading the console module and resolving its entry points into
//!    a read-only capability table.
//! 2. **Session:** Ownership of one live console handle, with typed wrappers
//!    for stepping, input, interaction flushing, and frame pacing.
//! 3. **Input:** The 8-button NES controller state as a fixed-layout bitmask.
//! 4. **Scheduling:** Declarative frame-indexed input policies for synthetic
//!    button presses.
//! 5. **Runner:** The run-to-completion control loop sequencing the above.
//!
//! The emulator itself (CPU/PPU/APU, ROM handling, rendering, audio) lives
//! entirely inside the loaded module; this crate only issues commands to it.

/// Error taxonomy for module loading and session creation.
pub mod error;
/// Raw console ABI and the process-wide capability table.
pub mod ffi;
/// Controller buttons and the 8-bit input mask.
pub mod input;
/// Control loop driving a console session to completion.
pub mod runner;
/// Frame-indexed input scheduling policies.
pub mod schedule;
/// Ownership and typed wrappers for one live console session.
pub mod session;

/// Fatal harness errors; all surface before the first frame is stepped.
pub use crate::error::DriverError;
/// Capability table over the console module's exported entry points.
pub use crate::ffi::ConsoleApi;
/// Controller button identities and bitmask encoding.
pub use crate::input::{Button, ButtonMask};
/// The control loop and its result summary.
pub use crate::runner::{RunSummary, run};
/// Input policies; `PressAfterWarmup::default()` is the reference behavior.
pub use crate::schedule::{Idle, InputSchedule, PressAfterWarmup};
/// The console capability seam and its live FFI-backed implementation.
pub use crate::session::{Console, Session};

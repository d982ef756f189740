//! Ownership and typed wrappers for one live console session.
//!
//! [`Session`] is the only place a raw console handle exists: it is checked
//! non-null exactly once at creation, after which every command forwards it
//! through the capability table unchecked. The [`Console`] trait is the seam
//! between the control loop and the foreign session, so the loop can also be
//! driven against scripted stand-ins in tests.

use std::ffi::CString;
use std::fmt;
use std::path::Path;

use crate::error::DriverError;
use crate::ffi::{ConsoleApi, RawConsole};
use crate::input::ButtonMask;

/// The capability set the control loop drives.
///
/// Call contract, per iteration: [`is_done`](Self::is_done) before every
/// [`step`](Self::step); [`flush_interaction`](Self::flush_interaction)
/// after the step; [`pace`](Self::pace) last. [`set_input`](Self::set_input)
/// replaces the whole controller state, last write wins.
pub trait Console {
    /// Whether the session has reached a terminal state.
    ///
    /// Safe to call any number of times; two calls without an intervening
    /// step return the same answer.
    fn is_done(&mut self) -> bool;

    /// Advances the session by exactly one frame.
    ///
    /// Must not be called once [`is_done`](Self::is_done) reports true.
    fn step(&mut self);

    /// Delivers pending host-side interaction to the session.
    fn flush_interaction(&mut self);

    /// Replaces the controller state consumed by the next step.
    fn set_input(&mut self, mask: ButtonMask);

    /// Blocks until wall-clock time catches up with the frame rate.
    ///
    /// The only intended blocking point in a run.
    fn pace(&mut self);
}

/// One live console session, exclusively owned for the duration of a run.
///
/// Holds the handle together with a borrow of the capability table, so the
/// console module cannot be unloaded while the session is alive. Dropping
/// the session invokes the module's teardown entry point when one exists.
pub struct Session<'api> {
    api: &'api ConsoleApi,
    handle: RawConsole,
    closed: bool,
}

impl<'api> Session<'api> {
    /// Creates a session for the program image at `image_path`.
    ///
    /// The path is handed to the console as a NUL-terminated byte string.
    ///
    /// # Errors
    ///
    /// [`DriverError::SessionCreation`] when the console returns a null
    /// handle (missing or incompatible image) or the path cannot be encoded
    /// as a C string. Creation failure is fatal: no other operation may be
    /// attempted for this run.
    pub fn create(api: &'api ConsoleApi, image_path: &Path) -> Result<Self, DriverError> {
        let creation_failed = || DriverError::SessionCreation {
            path: image_path.to_path_buf(),
        };

        let c_path = CString::new(image_path.as_os_str().as_encoded_bytes())
            .map_err(|_| creation_failed())?;

        let handle = api.create(&c_path);
        if handle.is_null() {
            return Err(creation_failed());
        }

        tracing::info!(image = %image_path.display(), "console session created");
        Ok(Self {
            api,
            handle,
            closed: false,
        })
    }

    /// Tears the session down early.
    ///
    /// Equivalent to dropping it; a no-op when the module exports no
    /// teardown entry point.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        // SAFETY: `handle` was checked non-null at creation and is not used
        // again after this call.
        unsafe { self.api.destroy(self.handle) };
    }
}

impl Console for Session<'_> {
    fn is_done(&mut self) -> bool {
        // SAFETY: `handle` is non-null (checked at creation) and live until
        // drop; `Session` is not `Clone`, so no other caller can have
        // destroyed it.
        unsafe { self.api.done(self.handle) }
    }

    fn step(&mut self) {
        // SAFETY: as in `is_done`; the loop checks liveness before every
        // step.
        unsafe { self.api.step_frame(self.handle) }
    }

    fn flush_interaction(&mut self) {
        // SAFETY: as in `is_done`.
        unsafe { self.api.handle_interaction(self.handle) }
    }

    fn set_input(&mut self, mask: ButtonMask) {
        // SAFETY: as in `is_done`.
        unsafe { self.api.update_buttons(self.handle, mask.bits()) }
    }

    fn pace(&mut self) {
        // SAFETY: as in `is_done`.
        unsafe { self.api.frame_limit(self.handle) }
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

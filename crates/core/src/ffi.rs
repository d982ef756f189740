//! Raw console ABI and the capability table built over it.
//!
//! The console module is an opaque shared library with a fixed C surface:
//! 1. **Creation:** `CreateInteractiveConsole` takes a NUL-terminated image
//!    path and returns an opaque handle, null on failure.
//! 2. **Queries:** `Done` reports whether the session reached a terminal
//!    state (program exit or internal fault, indistinguishable here).
//! 3. **Commands:** `StepFrame`, `HandleInteraction`, `UpdateButtons`, and
//!    `FrameLimit` each take the handle and act on the session.
//!
//! All entry points are resolved eagerly when the library is loaded and
//! collected into [`ConsoleApi`], which is initialized once per process and
//! never mutated afterwards. Dropping the table unloads the library, so the
//! table must outlive every session created from it; the borrow held by
//! [`Session`](crate::session::Session) enforces this.

use std::ffi::{CStr, c_char, c_void};
use std::fmt;
use std::path::Path;

use libloading::Library;

use crate::error::DriverError;

/// Opaque console handle owned by the loaded module.
///
/// Only ever produced by the create entry point and passed back verbatim;
/// the harness never inspects or dereferences it.
pub type RawConsole = *mut c_void;

type CreateFn = unsafe extern "C" fn(*const c_char) -> RawConsole;
type DoneFn = unsafe extern "C" fn(RawConsole) -> bool;
type CommandFn = unsafe extern "C" fn(RawConsole);
type ButtonsFn = unsafe extern "C" fn(RawConsole, u8);

/// Read-only table of the console module's entry points.
///
/// Holds the loaded [`Library`] alongside the function pointers resolved
/// from it, keeping the pointers valid for the table's whole lifetime.
pub struct ConsoleApi {
    create: CreateFn,
    done: DoneFn,
    step_frame: CommandFn,
    handle_interaction: CommandFn,
    update_buttons: ButtonsFn,
    frame_limit: CommandFn,
    destroy: Option<CommandFn>,
    _library: Library,
}

impl ConsoleApi {
    /// Loads the console module at `path` and resolves its entry points.
    ///
    /// Every required symbol is resolved up front so that an ABI mismatch
    /// surfaces here rather than mid-run. The teardown entry point
    /// (`DestroyInteractiveConsole`) is optional: the observed module never
    /// needs an explicit close, but when one is exported it is used.
    ///
    /// # Errors
    ///
    /// [`DriverError::LibraryLoad`] when the library cannot be loaded, and
    /// [`DriverError::MissingSymbol`] when a required export is absent.
    pub fn load(path: &Path) -> Result<Self, DriverError> {
        // SAFETY: loading a shared library runs its platform initializers.
        // The console module is trusted the same way a linked dependency
        // would be; the caller chose it.
        let library = unsafe { Library::new(path) }.map_err(|source| DriverError::LibraryLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let api = Self {
            create: resolve::<CreateFn>(&library, "CreateInteractiveConsole")?,
            done: resolve::<DoneFn>(&library, "Done")?,
            step_frame: resolve::<CommandFn>(&library, "StepFrame")?,
            handle_interaction: resolve::<CommandFn>(&library, "HandleInteraction")?,
            update_buttons: resolve::<ButtonsFn>(&library, "UpdateButtons")?,
            frame_limit: resolve::<CommandFn>(&library, "FrameLimit")?,
            destroy: resolve::<CommandFn>(&library, "DestroyInteractiveConsole").ok(),
            _library: library,
        };

        tracing::debug!(module = %path.display(), teardown = api.destroy.is_some(), "console module loaded");
        Ok(api)
    }

    /// Whether the module exports an explicit teardown entry point.
    pub fn has_teardown(&self) -> bool {
        self.destroy.is_some()
    }

    /// Requests a new session for the image at `path`.
    ///
    /// Returns a null handle when the console rejects the image.
    pub(crate) fn create(&self, path: &CStr) -> RawConsole {
        // SAFETY: `path` is NUL-terminated and outlives the call; the
        // console copies what it needs before returning.
        unsafe { (self.create)(path.as_ptr()) }
    }

    /// Queries whether the session reached a terminal state.
    ///
    /// # Safety
    ///
    /// `console` must be a non-null handle from [`Self::create`] that has
    /// not been destroyed.
    pub(crate) unsafe fn done(&self, console: RawConsole) -> bool {
        // SAFETY: upheld by the caller.
        unsafe { (self.done)(console) }
    }

    /// Advances the session by exactly one frame.
    ///
    /// # Safety
    ///
    /// Same handle contract as [`Self::done`]; additionally the session
    /// must not already be done.
    pub(crate) unsafe fn step_frame(&self, console: RawConsole) {
        // SAFETY: upheld by the caller.
        unsafe { (self.step_frame)(console) }
    }

    /// Delivers pending host-side interaction to the session.
    ///
    /// # Safety
    ///
    /// Same handle contract as [`Self::done`].
    pub(crate) unsafe fn handle_interaction(&self, console: RawConsole) {
        // SAFETY: upheld by the caller.
        unsafe { (self.handle_interaction)(console) }
    }

    /// Replaces the session's controller state with `buttons`.
    ///
    /// # Safety
    ///
    /// Same handle contract as [`Self::done`].
    pub(crate) unsafe fn update_buttons(&self, console: RawConsole, buttons: u8) {
        // SAFETY: upheld by the caller.
        unsafe { (self.update_buttons)(console, buttons) }
    }

    /// Blocks until wall-clock time catches up with the frame rate.
    ///
    /// # Safety
    ///
    /// Same handle contract as [`Self::done`].
    pub(crate) unsafe fn frame_limit(&self, console: RawConsole) {
        // SAFETY: upheld by the caller.
        unsafe { (self.frame_limit)(console) }
    }

    /// Destroys the session if the module exports a teardown entry point.
    ///
    /// # Safety
    ///
    /// Same handle contract as [`Self::done`]; the handle must not be used
    /// again afterwards.
    pub(crate) unsafe fn destroy(&self, console: RawConsole) {
        if let Some(destroy) = self.destroy {
            // SAFETY: upheld by the caller.
            unsafe { destroy(console) }
        }
    }
}

impl fmt::Debug for ConsoleApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleApi")
            .field("teardown", &self.destroy.is_some())
            .finish_non_exhaustive()
    }
}

/// Resolves `name` from `library` as a function pointer of type `T`.
///
/// `T` must be the exact foreign signature of the export; the console ABI is
/// fixed, so the signatures are agreed upon at compile time.
fn resolve<T: Copy>(library: &Library, name: &'static str) -> Result<T, DriverError> {
    // SAFETY: the caller supplies the signature matching the fixed ABI of
    // the named export. A wrong `name`/`T` pairing here would be a bug in
    // this module, not in the caller.
    unsafe { library.get::<T>(name.as_bytes()) }
        .map(|symbol| *symbol)
        .map_err(|source| DriverError::MissingSymbol { name, source })
}

//! Harness error definitions.
//!
//! Every variant is fatal: each one is raised before the first frame is
//! stepped, and the run is abandoned. Once a session exists, stepping and
//! pacing are assumed to succeed; a console that faults internally reports
//! itself as done through the liveness query instead of returning an error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while bringing up a console module or session.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The console shared library could not be loaded at all.
    #[error("failed to load console module {}", path.display())]
    LibraryLoad {
        /// Path to the shared library that was passed to the loader.
        path: PathBuf,
        /// Loader error reported by the platform.
        #[source]
        source: libloading::Error,
    },

    /// The library loaded but does not export a required entry point.
    #[error("console module does not export `{name}`")]
    MissingSymbol {
        /// Name of the missing export.
        name: &'static str,
        /// Loader error reported by the platform.
        #[source]
        source: libloading::Error,
    },

    /// The console refused to create a session for the given image.
    ///
    /// Covers a missing or unreadable image file, an incompatible image
    /// format, and image paths that cannot be encoded as a C string.
    #[error("console could not start a session for image {}", path.display())]
    SessionCreation {
        /// Path to the program image handed to the console.
        path: PathBuf,
    },
}

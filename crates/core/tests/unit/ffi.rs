//! Unit tests for module loading failures and error rendering.
//!
//! Success paths need a real console module and live outside the unit
//! suite; what is pinned here is that a bad module path can never reach
//! the stepping phase.

use std::io::Write;
use std::path::PathBuf;

use nesdrive_core::{ConsoleApi, DriverError};

#[test]
fn missing_module_fails_to_load() {
    let path = PathBuf::from("/nonexistent/libconsole.so");
    let err = match ConsoleApi::load(&path) {
        Err(err) => err,
        Ok(_) => panic!("loading a nonexistent module must fail"),
    };
    assert!(matches!(err, DriverError::LibraryLoad { .. }));
    assert!(err.to_string().contains("/nonexistent/libconsole.so"));
}

#[test]
fn non_library_file_fails_to_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"this is not a shared library").unwrap();

    let err = match ConsoleApi::load(file.path()) {
        Err(err) => err,
        Ok(_) => panic!("loading a garbage file must fail"),
    };
    assert!(matches!(err, DriverError::LibraryLoad { .. }));
}

#[test]
fn load_failure_carries_a_cause() {
    let err = match ConsoleApi::load(&PathBuf::from("/nonexistent/libconsole.so")) {
        Err(err) => err,
        Ok(_) => panic!("loading a nonexistent module must fail"),
    };
    assert!(
        std::error::Error::source(&err).is_some(),
        "the platform loader error is preserved as the cause"
    );
}

#[test]
fn session_creation_error_names_the_image() {
    let err = DriverError::SessionCreation {
        path: PathBuf::from("roms/missing.nes"),
    };
    assert!(err.to_string().contains("roms/missing.nes"));
}

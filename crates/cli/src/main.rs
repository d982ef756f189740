//! NES console harness CLI.
//!
//! This binary runs one console session to completion. It performs:
//! 1. **Load:** Open the console shared library and resolve its control ABI.
//! 2. **Create:** Start a session for the given ROM image.
//! 3. **Drive:** Step frames, flush interaction, apply the input schedule,
//!    and pace to 60 Hz until the console reports completion.
//!
//! Exit code 0 when the session finishes on its own; 1 when the module or
//! the session cannot be brought up. Set `RUST_LOG` for frame-level detail.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nesdrive_core::{ConsoleApi, DriverError, Idle, PressAfterWarmup, Session, run};

#[derive(Parser, Debug)]
#[command(
    name = "nesdrive",
    version,
    about = "Drive a native NES console module through one interactive run",
    long_about = "Loads the console module (a shared library exposing the interactive-console ABI),\n\
                  starts a session for the ROM image, and steps it at 60 Hz until the console exits.\n\n\
                  By default a warm-up of 15 seconds passes untouched, then the A button is tapped\n\
                  once a second to advance past title screens.\n\n\
                  Examples:\n  nesdrive ./libconsole.so game.nes\n  RUST_LOG=debug nesdrive ./libconsole.so game.nes --idle"
)]
struct Cli {
    /// Path to the console module (shared library).
    module: PathBuf,

    /// Path to the ROM image handed to the console at session creation.
    image: PathBuf,

    /// Disable the input schedule; the run receives no synthetic presses.
    #[arg(long)]
    idle: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = drive(&cli) {
        eprintln!("Error: {e}");
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        process::exit(1);
    }
}

/// Loads the module, creates the session, and runs the control loop.
///
/// Any error here is fatal and happens before the first frame is stepped.
fn drive(cli: &Cli) -> Result<(), DriverError> {
    let api = ConsoleApi::load(&cli.module)?;
    let mut session = Session::create(&api, &cli.image)?;

    let summary = if cli.idle {
        run(&mut session, &Idle)
    } else {
        run(&mut session, &PressAfterWarmup::default())
    };
    session.close();

    println!("[*] console finished after {} frames", summary.frames);
    Ok(())
}

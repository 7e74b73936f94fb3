//! fb2k-package CLI - build layout setup and component packaging
//!
//! Binaries:
//! - `fb2k-setup` - Create the `_result` output layout before building
//! - `fb2k-pack` - Package a built DLL into a `.fb2k-component` archive

pub mod args;
pub mod logging;
pub mod output;
pub mod pack;
pub mod setup;

use std::process::ExitCode;

/// Run a command, printing any failure as a single `ERROR:` line.
pub fn exit_with(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::FAILURE
        }
    }
}

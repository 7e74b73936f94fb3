//! Creates the `_result/<platform>_<configuration>/bin` directories for all
//! four build targets. Run once before building.

use clap::Parser;
use fb2k_package_cli::args::SetupArgs;
use fb2k_package_cli::{exit_with, logging, setup};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = SetupArgs::parse();
    logging::init();

    exit_with(setup::run(&args))
}

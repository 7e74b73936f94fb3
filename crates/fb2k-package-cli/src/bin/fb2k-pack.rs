//! Packages the component DLL of one build target into
//! `_result/<component>.fb2k-component`.

use clap::Parser;
use fb2k_package_cli::args::PackArgs;
use fb2k_package_cli::{exit_with, logging, pack};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = PackArgs::parse();
    logging::init();

    exit_with(pack::run(&args))
}

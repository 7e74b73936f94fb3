//! Setup command implementation

use crate::args::SetupArgs;
use crate::output::created_line;
use anyhow::{Context, Result};

/// Run the setup command
pub fn run(args: &SetupArgs) -> Result<()> {
    let workspace = args.workspace.workspace()?;

    let dirs = workspace.ensure_output_layout().with_context(|| {
        format!(
            "Failed to create output layout under {}",
            workspace.root().display()
        )
    })?;

    for dir in &dirs {
        println!("{}", created_line(dir));
    }
    println!("Setup complete.");

    Ok(())
}

//! Pack command implementation

use crate::args::PackArgs;
use crate::output::packaged_line;
use anyhow::{Context, Result};
use fb2k_package::{PackageReader, Packager};

/// Run the pack command
pub fn run(args: &PackArgs) -> Result<()> {
    let workspace = args.workspace.workspace()?;
    let component = args.component(&workspace)?;
    let target = args.target();

    let report = Packager::new(&workspace, &component).pack(&target)?;

    if args.verify {
        PackageReader::open(&report.path)
            .and_then(|mut reader| reader.verify(&component, &report.artifact_sha256))
            .with_context(|| format!("Failed to verify package: {}", report.path.display()))?;
        tracing::info!(package = %report.path.display(), "package verified");
    }

    println!("{}", packaged_line(&report));
    Ok(())
}

//! Package creation.
//!
//! The [`Packager`] turns the DLL of one build target into the workspace's
//! `.fb2k-component` archive.

use crate::{BuildTarget, Component, PackageError, PackageResult, Workspace};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Permissions recorded for the packaged DLL.
const ENTRY_PERMISSIONS: u32 = 0o644;

/// Writes component packages for a workspace.
///
/// # Example
///
/// ```no_run
/// use fb2k_package::{BuildTarget, Component, Packager, Workspace};
///
/// let workspace = Workspace::new(".");
/// let component = Component::default();
/// let report = Packager::new(&workspace, &component).pack(&BuildTarget::new("Win32", "Debug"))?;
/// assert_eq!(report.path, workspace.package_path(&component));
/// # Ok::<(), fb2k_package::PackageError>(())
/// ```
#[derive(Debug)]
pub struct Packager<'a> {
    workspace: &'a Workspace,
    component: &'a Component,
}

/// Outcome of a successful [`Packager::pack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    /// Path of the written package.
    pub path: PathBuf,
    /// Size of the package file in bytes.
    pub size: u64,
    /// Build target the DLL was taken from.
    pub target: BuildTarget,
    /// Size of the packaged DLL in bytes.
    pub artifact_size: u64,
    /// Hex SHA-256 of the packaged DLL.
    pub artifact_sha256: String,
}

impl<'a> Packager<'a> {
    /// Create a packager for `component` in `workspace`.
    #[must_use]
    pub fn new(workspace: &'a Workspace, component: &'a Component) -> Self {
        Self {
            workspace,
            component,
        }
    }

    /// Package the DLL built for `target`.
    ///
    /// The DLL must exist before anything is written: if it is missing this
    /// returns [`PackageError::MissingArtifact`] and an existing package is
    /// left untouched. Otherwise the package is replaced with an archive
    /// holding a single deflated entry named after the component.
    pub fn pack(&self, target: &BuildTarget) -> PackageResult<PackageReport> {
        if !target.is_known() {
            tracing::warn!(
                platform = target.platform(),
                configuration = target.configuration(),
                "build target is not one of the known platforms/configurations"
            );
        }

        let artifact_path = self.workspace.artifact_path(target, self.component);
        tracing::debug!(artifact = %artifact_path.display(), "resolved artifact path");

        if !artifact_path.is_file() {
            return Err(PackageError::MissingArtifact {
                path: artifact_path,
            });
        }

        let contents = fs::read(&artifact_path)?;
        let artifact_sha256 = compute_sha256(&contents);

        let package_path = self.workspace.package_path(self.component);
        write_archive(&package_path, &self.component.entry_name(), &contents)?;

        let size = fs::metadata(&package_path)?.len();
        let report = PackageReport {
            path: package_path,
            size,
            target: target.clone(),
            artifact_size: contents.len() as u64,
            artifact_sha256,
        };

        tracing::info!(
            package = %report.path.display(),
            size = report.size,
            build_target = %report.target,
            artifact_size = report.artifact_size,
            sha256 = %report.artifact_sha256,
            "component packaged"
        );

        Ok(report)
    }
}

/// Write a zip archive at `path` holding `contents` as its only entry.
///
/// The entry timestamp and permissions are fixed so that packaging the same
/// DLL twice gives identical archives.
fn write_archive(path: &Path, entry_name: &str, contents: &[u8]) -> PackageResult<()> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(ENTRY_PERMISSIONS);

    zip.start_file(entry_name, options)?;
    zip.write_all(contents)?;

    let mut file = zip.finish()?;
    file.flush()?;

    Ok(())
}

/// Compute SHA256 hash of data and return as hex string.
pub fn compute_sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

//! Workspace paths and the output layout.
//!
//! The [`Workspace`] knows where every build target writes its DLL and where
//! the package goes. [`Workspace::ensure_output_layout`] creates the
//! directories the build expects before it runs.

use crate::{BIN_DIR, BuildTarget, CONFIG_FILE, Component, PackageResult, RESULT_DIR};
use std::fs;
use std::path::{Path, PathBuf};

/// A component workspace rooted at a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Create a workspace rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Derive the workspace from the location of an installed tool.
    ///
    /// Tools live one directory below the root (e.g., `<root>/scripts/tool`),
    /// so the root is two levels above the executable itself. Returns `None`
    /// if the path is too shallow.
    #[must_use]
    pub fn from_executable(exe: &Path) -> Option<Self> {
        exe.parent()?.parent().map(Self::new)
    }

    /// The workspace root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/_result`
    #[must_use]
    pub fn result_dir(&self) -> PathBuf {
        self.root.join(RESULT_DIR)
    }

    /// `<root>/_result/<platform>_<configuration>/bin`
    #[must_use]
    pub fn bin_dir(&self, target: &BuildTarget) -> PathBuf {
        self.result_dir().join(target.dir_name()).join(BIN_DIR)
    }

    /// Where the build leaves the component DLL for `target`.
    #[must_use]
    pub fn artifact_path(&self, target: &BuildTarget, component: &Component) -> PathBuf {
        self.bin_dir(target).join(component.artifact_name())
    }

    /// Where the package is written. Independent of the build target.
    #[must_use]
    pub fn package_path(&self, component: &Component) -> PathBuf {
        self.result_dir().join(component.package_name())
    }

    /// Default location of the component config file.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Make sure the `bin` directory of every known build target exists.
    ///
    /// Missing ancestors are created too, and directories that already exist
    /// are left alone, so running this again is harmless. Returns the ensured
    /// directories in layout order.
    pub fn ensure_output_layout(&self) -> PackageResult<Vec<PathBuf>> {
        let mut ensured = Vec::new();

        for target in BuildTarget::known() {
            let dir = self.bin_dir(&target);
            fs::create_dir_all(&dir)?;
            tracing::debug!(build_target = %target, dir = %dir.display(), "ensured output directory");
            ensured.push(dir);
        }

        Ok(ensured)
    }
}

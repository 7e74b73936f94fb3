//! Packaging for foobar2000 components
//!
//! This crate provides types and utilities for preparing the build output
//! layout of a component and for turning the compiled DLL into a
//! `.fb2k-component` archive that foobar2000 can install.
//!
//! # Workspace Layout
//!
//! ```text
//! <root>/
//! ├── fb2k-component.toml            # optional component config
//! └── _result/
//!     ├── x64_Release/bin/
//!     ├── x64_Debug/bin/
//!     ├── Win32_Release/bin/
//!     ├── Win32_Debug/bin/
//!     └── foo_monthly_stats.fb2k-component
//! ```
//!
//! The package is a zip archive with a single deflated entry,
//! `foo_monthly_stats.dll`, no matter which build target produced it.
//!
//! # Example
//!
//! ```no_run
//! use fb2k_package::{BuildTarget, Component, Packager, Workspace};
//!
//! let workspace = Workspace::new("/path/to/foo_monthly_stats");
//! workspace.ensure_output_layout()?;
//!
//! let component = Component::default();
//! let report = Packager::new(&workspace, &component).pack(&BuildTarget::default())?;
//! println!("{} ({} bytes)", report.path.display(), report.size);
//! # Ok::<(), fb2k_package::PackageError>(())
//! ```

mod component;
mod error;
mod target;

pub mod layout;
pub mod packager;
pub mod reader;

pub use component::Component;
pub use error::PackageError;
pub use layout::Workspace;
pub use packager::{PackageReport, Packager, compute_sha256};
pub use reader::{EntryInfo, PackageReader};
pub use target::{BuildTarget, Configuration, Platform};

/// Result type for packaging operations.
pub type PackageResult<T> = Result<T, PackageError>;

/// Directory under the workspace root that holds all build output.
pub const RESULT_DIR: &str = "_result";

/// Directory inside each build target directory that holds the binaries.
pub const BIN_DIR: &str = "bin";

/// Default component config file name, relative to the workspace root.
pub const CONFIG_FILE: &str = "fb2k-component.toml";

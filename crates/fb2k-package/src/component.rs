//! Component identity and its config file

use crate::{PackageError, PackageResult};
use serde::Deserialize;
use std::path::Path;

/// Name of the component shipped from this workspace.
pub const DEFAULT_NAME: &str = "foo_monthly_stats";

/// Extension foobar2000 expects for installable component archives.
pub const DEFAULT_EXTENSION: &str = "fb2k-component";

/// The component being packaged.
///
/// Every file name the packager touches is derived from here, so the archive
/// entry never depends on which build target produced the DLL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
    extension: String,
}

/// `fb2k-component.toml` file structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    component: ComponentSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ComponentSection {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    extension: Option<String>,
}

impl Component {
    /// Create a component with an explicit name and package extension.
    pub fn new(name: impl Into<String>, extension: impl Into<String>) -> PackageResult<Self> {
        let component = Self {
            name: name.into(),
            extension: extension.into(),
        };
        component.validate()?;
        Ok(component)
    }

    /// Load the component from a config file.
    pub fn from_file(path: impl AsRef<Path>) -> PackageResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PackageError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        Self::from_toml_str(&content)
    }

    /// Load the component from a config file, or use the defaults if there is none.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> PackageResult<Self> {
        let path = path.as_ref();
        if path.is_file() {
            tracing::debug!(config = %path.display(), "loading component config");
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse the component from TOML. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> PackageResult<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| PackageError::Config(e.to_string()))?;

        Self::new(
            file.component.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            file.component
                .extension
                .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
        )
    }

    /// Validate the component name and extension.
    pub fn validate(&self) -> PackageResult<()> {
        if self.name.is_empty() {
            return Err(PackageError::Config(
                "component name cannot be empty".to_string(),
            ));
        }
        if is_path_like(&self.name) {
            return Err(PackageError::Config(format!(
                "component name must be a plain file name: {}",
                self.name
            )));
        }

        if self.extension.is_empty() {
            return Err(PackageError::Config(
                "package extension cannot be empty".to_string(),
            ));
        }
        if self.extension.starts_with('.') || is_path_like(&self.extension) {
            return Err(PackageError::Config(format!(
                "package extension must not start with '.' or contain path separators: {}",
                self.extension
            )));
        }

        Ok(())
    }

    /// The component name (e.g., "foo_monthly_stats").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The package extension without the leading dot.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// File name of the compiled DLL in each build target's `bin` directory.
    #[must_use]
    pub fn artifact_name(&self) -> String {
        format!("{}.dll", self.name)
    }

    /// Name of the single entry inside the package.
    ///
    /// foobar2000 refuses components whose DLL was renamed, so this is always
    /// the bare artifact file name.
    #[must_use]
    pub fn entry_name(&self) -> String {
        self.artifact_name()
    }

    /// File name of the package written to `_result`.
    #[must_use]
    pub fn package_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }
}

impl Default for Component {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

fn is_path_like(value: &str) -> bool {
    value.contains('/') || value.contains('\\') || value.contains("..")
}

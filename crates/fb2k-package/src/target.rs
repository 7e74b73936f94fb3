//! Build target identification.

use std::fmt;

/// Platforms the component is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// 32-bit Windows.
    Win32,
    /// 64-bit Windows.
    X64,
}

impl Platform {
    /// Get the platform identifier as used by the build (e.g., "x64").
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Win32 => "Win32",
            Self::X64 => "x64",
        }
    }

    /// Parse a platform from its identifier. Matching is exact.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Win32" => Some(Self::Win32),
            "x64" => Some(Self::X64),
            _ => None,
        }
    }

    /// Get all known platforms.
    #[must_use]
    pub fn all() -> &'static [Platform] {
        &[Self::X64, Self::Win32]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Build configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Configuration {
    Debug,
    Release,
}

impl Configuration {
    /// Get the configuration identifier as used by the build (e.g., "Release").
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Release => "Release",
        }
    }

    /// Parse a configuration from its identifier. Matching is exact.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Debug" => Some(Self::Debug),
            "Release" => Some(Self::Release),
            _ => None,
        }
    }

    /// Get all known configurations.
    #[must_use]
    pub fn all() -> &'static [Configuration] {
        &[Self::Release, Self::Debug]
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A `(platform, configuration)` pair naming one build variant.
///
/// Both halves are free-form: a target is not required to name a known
/// [`Platform`] or [`Configuration`]. The values are only ever joined into a
/// directory name, so an unknown value simply points at a directory the build
/// never wrote to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildTarget {
    platform: String,
    configuration: String,
}

impl BuildTarget {
    /// Create a build target from arbitrary identifiers.
    pub fn new(platform: impl Into<String>, configuration: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            configuration: configuration.into(),
        }
    }

    /// The platform identifier.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// The configuration identifier.
    #[must_use]
    pub fn configuration(&self) -> &str {
        &self.configuration
    }

    /// Directory name for this target under `_result` (e.g., "x64_Release").
    #[must_use]
    pub fn dir_name(&self) -> String {
        format!("{}_{}", self.platform, self.configuration)
    }

    /// Returns true if both halves name a known platform and configuration.
    #[must_use]
    pub fn is_known(&self) -> bool {
        Platform::parse(&self.platform).is_some()
            && Configuration::parse(&self.configuration).is_some()
    }

    /// The four targets of the output layout, 64-bit first, Release before Debug.
    #[must_use]
    pub fn known() -> Vec<BuildTarget> {
        Platform::all()
            .iter()
            .flat_map(|&platform| {
                Configuration::all()
                    .iter()
                    .map(move |&configuration| BuildTarget::from((platform, configuration)))
            })
            .collect()
    }
}

impl Default for BuildTarget {
    fn default() -> Self {
        Self::from((Platform::X64, Configuration::Release))
    }
}

impl From<(Platform, Configuration)> for BuildTarget {
    fn from((platform, configuration): (Platform, Configuration)) -> Self {
        Self::new(platform.as_str(), configuration.as_str())
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.platform, self.configuration)
    }
}

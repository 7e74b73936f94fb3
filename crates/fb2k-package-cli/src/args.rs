//! Command-line arguments shared by both tools

use anyhow::{Context, Result};
use clap::{Args, Parser};
use fb2k_package::{BuildTarget, Component, Workspace};
use std::path::{Path, PathBuf};

/// Options that locate the workspace.
#[derive(Debug, Clone, Args)]
pub struct WorkspaceArgs {
    /// Workspace root (default: two directories above this executable)
    #[arg(long, env = "FB2K_WORKSPACE_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// `fb2k-setup` arguments
#[derive(Debug, Parser)]
#[command(name = "fb2k-setup")]
#[command(version, about = "Create the output directories the component build expects", long_about = None)]
pub struct SetupArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

/// `fb2k-pack` arguments
#[derive(Debug, Parser)]
#[command(name = "fb2k-pack")]
#[command(version, about = "Package the component DLL into a .fb2k-component file", long_about = None)]
pub struct PackArgs {
    /// Target platform (Win32 or x64)
    #[arg(long, default_value = "x64")]
    pub platform: String,

    /// Build configuration (Debug or Release)
    #[arg(long, default_value = "Release")]
    pub configuration: String,

    /// Re-open the written package and check its contents
    #[arg(long)]
    pub verify: bool,

    /// Component config file (default: <root>/fb2k-component.toml, if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

impl PackArgs {
    /// The build target named on the command line. Not validated.
    pub fn target(&self) -> BuildTarget {
        BuildTarget::new(self.platform.clone(), self.configuration.clone())
    }

    /// Load the component, from `--config` if given, else from the workspace default.
    pub fn component(&self, workspace: &Workspace) -> Result<Component> {
        let component = match &self.config {
            Some(path) => Component::from_file(path)?,
            None => Component::from_file_or_default(workspace.config_path())?,
        };
        Ok(component)
    }
}

impl WorkspaceArgs {
    /// Resolve the workspace, made absolute so reported paths are too.
    pub fn workspace(&self) -> Result<Workspace> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => {
                let exe = std::env::current_exe()
                    .context("Failed to locate the running executable")?;
                Workspace::from_executable(&exe)
                    .with_context(|| {
                        format!("Cannot derive workspace root from {}", exe.display())
                    })?
                    .root()
                    .to_path_buf()
            }
        };

        let root = absolute(&root)?;
        tracing::debug!(root = %root.display(), "resolved workspace root");
        Ok(Workspace::new(root))
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .with_context(|| format!("Failed to resolve workspace root: {}", path.display()))
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn PackArgs___no_flags___defaults_to_x64_release() {
        let args = PackArgs::try_parse_from(["fb2k-pack", "--root", "/ws"]).unwrap();

        assert_eq!(args.target(), BuildTarget::default());
        assert!(!args.verify);
    }

    #[test]
    fn PackArgs___explicit_target___is_taken_verbatim() {
        let args = PackArgs::try_parse_from([
            "fb2k-pack",
            "--platform",
            "Win32",
            "--configuration",
            "Debug",
        ])
        .unwrap();

        assert_eq!(args.target().dir_name(), "Win32_Debug");
    }

    #[test]
    fn PackArgs___unknown_platform___is_accepted() {
        let args = PackArgs::try_parse_from(["fb2k-pack", "--platform", "x86"]).unwrap();

        assert_eq!(args.target().platform(), "x86");
    }

    #[test]
    fn SetupArgs___positional_argument___is_rejected() {
        let result = SetupArgs::try_parse_from(["fb2k-setup", "extra"]);

        assert!(result.is_err());
    }

    #[test]
    fn WorkspaceArgs___explicit_root___is_made_absolute() {
        let temp_dir = TempDir::new().unwrap();
        let args = WorkspaceArgs {
            root: Some(temp_dir.path().to_path_buf()),
        };

        let workspace = args.workspace().unwrap();

        assert!(workspace.root().is_absolute());
        assert_eq!(workspace.root(), temp_dir.path());
    }

    #[test]
    fn WorkspaceArgs___no_root___derives_from_executable() {
        let args = WorkspaceArgs { root: None };

        let workspace = args.workspace().unwrap();

        let exe = std::env::current_exe().unwrap();
        assert!(exe.starts_with(workspace.root()));
    }

    #[test]
    fn PackArgs___component___reads_workspace_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("fb2k-component.toml"),
            "[component]\nname = \"foo_other\"\n",
        )
        .unwrap();
        let root = temp_dir.path().to_str().unwrap();
        let args = PackArgs::try_parse_from(["fb2k-pack", "--root", root]).unwrap();

        let workspace = args.workspace.workspace().unwrap();
        let component = args.component(&workspace).unwrap();

        assert_eq!(component.name(), "foo_other");
    }

    #[test]
    fn PackArgs___component___missing_explicit_config_fails() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_str().unwrap();
        let config = temp_dir.path().join("absent.toml");
        let args = PackArgs::try_parse_from([
            "fb2k-pack",
            "--root",
            root,
            "--config",
            config.to_str().unwrap(),
        ])
        .unwrap();

        let workspace = args.workspace.workspace().unwrap();

        assert!(args.component(&workspace).is_err());
    }
}

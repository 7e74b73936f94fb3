//! Package inspection.
//!
//! The [`PackageReader`] opens a written package to list or extract its
//! entries and to check it against what was packed.

use crate::packager::compute_sha256;
use crate::{Component, PackageError, PackageResult};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::{CompressionMethod, ZipArchive};

/// One entry of a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Name of the entry inside the archive.
    pub name: String,
    /// Uncompressed size in bytes.
    pub size: u64,
    /// Compression method the entry was stored with.
    pub compression: CompressionMethod,
}

/// Reader for component packages.
///
/// # Example
///
/// ```no_run
/// use fb2k_package::{Component, PackageReader};
///
/// let component = Component::default();
/// let mut reader = PackageReader::open("_result/foo_monthly_stats.fb2k-component")?;
/// let dll = reader.read_component(&component)?;
/// # Ok::<(), fb2k_package::PackageError>(())
/// ```
#[derive(Debug)]
pub struct PackageReader {
    path: PathBuf,
    archive: ZipArchive<File>,
}

impl PackageReader {
    /// Open a package file for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> PackageResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let archive = ZipArchive::new(file)?;

        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }

    /// Path the package was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List all entries in archive order.
    pub fn entries(&mut self) -> PackageResult<Vec<EntryInfo>> {
        let mut entries = Vec::with_capacity(self.archive.len());
        for index in 0..self.archive.len() {
            let entry = self.archive.by_index(index)?;
            entries.push(EntryInfo {
                name: entry.name().to_string(),
                size: entry.size(),
                compression: entry.compression(),
            });
        }
        Ok(entries)
    }

    /// Read the decompressed contents of an entry.
    pub fn read_entry(&mut self, name: &str) -> PackageResult<Vec<u8>> {
        let mut entry = self.archive.by_name(name)?;
        let mut contents = Vec::new();
        entry.read_to_end(&mut contents)?;
        Ok(contents)
    }

    /// Read the component DLL out of the package.
    pub fn read_component(&mut self, component: &Component) -> PackageResult<Vec<u8>> {
        self.read_entry(&component.entry_name())
    }

    /// Check that the package holds exactly the component DLL with the given checksum.
    pub fn verify(&mut self, component: &Component, expected_sha256: &str) -> PackageResult<()> {
        let entries = self.entries()?;
        let expected_name = component.entry_name();

        match entries.as_slice() {
            [entry] if entry.name == expected_name => {}
            [entry] => {
                return Err(PackageError::Verification(format!(
                    "expected entry {expected_name}, found {}",
                    entry.name
                )));
            }
            _ => {
                return Err(PackageError::Verification(format!(
                    "expected 1 entry, found {}",
                    entries.len()
                )));
            }
        }

        let actual = compute_sha256(&self.read_entry(&expected_name)?);
        if actual != expected_sha256 {
            return Err(PackageError::Verification(format!(
                "checksum mismatch for {expected_name}: expected {expected_sha256}, got {actual}"
            )));
        }

        Ok(())
    }
}

//! Artifact storage abstraction.
//!
//! The exporter must not touch the filesystem directly so that it can be
//! tested in isolation. This trait abstracts artifact writes so that
//! different implementations can be provided:
//! - `DirectoryStore` in the CLI crate (writes under the output directory)
//! - [`MemoryStore`] for tests (files kept in memory)

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// A place to put exported artifacts.
pub trait ArtifactStore {
    /// Write a complete artifact named `file_name`, returning its path.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the artifact cannot be written.
    fn write_artifact(&self, file_name: &str, contents: &[u8]) -> io::Result<PathBuf>;

    /// Remove a previously written artifact.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the artifact cannot be removed.
    fn remove_artifact(&self, path: &Path) -> io::Result<()>;
}

/// An in-memory store keyed by file name.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of all stored artifacts, sorted.
    #[must_use]
    pub fn file_names(&self) -> Vec<String> {
        self.files
            .borrow()
            .keys()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }

    /// Contents of an artifact as UTF-8 text.
    #[must_use]
    pub fn read_to_string(&self, file_name: &str) -> Option<String> {
        self.files
            .borrow()
            .get(Path::new(file_name))
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl ArtifactStore for MemoryStore {
    fn write_artifact(&self, file_name: &str, contents: &[u8]) -> io::Result<PathBuf> {
        let path = PathBuf::from(file_name);
        self.files
            .borrow_mut()
            .insert(path.clone(), contents.to_vec());
        Ok(path)
    }

    fn remove_artifact(&self, path: &Path) -> io::Result<()> {
        self.files
            .borrow_mut()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no artifact {}", path.display()),
                )
            })
    }
}

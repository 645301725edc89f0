//! File access capability.
//!
//! Every component that touches files takes a [`FileSystem`] so the
//! validation and catalog logic can run against [`InMemoryFs`] in tests and
//! [`LocalFs`] in production.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::{DashMap, DashSet};

use super::path::normalize;

pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Paths matching a glob pattern, sorted.
    fn glob(&self, pattern: &str) -> io::Result<Vec<PathBuf>>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn glob(&self, pattern: &str) -> io::Result<Vec<PathBuf>> {
        let entries = glob::glob(pattern)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => tracing::warn!("Skipping unreadable glob entry: {}", e),
            }
        }
        paths.sort();
        Ok(paths)
    }
}

/// In-memory backing store. Paths are normalised on the way in and out, so
/// `./p/a.md` and `p/a.md` name the same file.
#[derive(Debug, Default)]
pub struct InMemoryFs {
    files: DashMap<PathBuf, String>,
    dirs: DashSet<PathBuf>,
    exists_calls: AtomicUsize,
}

impl InMemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl AsRef<Path>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&self, path: impl AsRef<Path>, contents: impl Into<String>) {
        self.files.insert(normalize(path.as_ref()), contents.into());
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .get(&normalize(path.as_ref()))
            .map(|entry| entry.value().clone())
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        let path = normalize(path.as_ref());
        self.dirs.contains(&path)
            || self
                .files
                .iter()
                .any(|entry| entry.key() != &path && entry.key().starts_with(&path))
    }

    /// Number of [`FileSystem::exists`] calls served so far.
    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileSystem for InMemoryFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.contents(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file or directory: {}", path.display()),
            )
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_calls.fetch_add(1, Ordering::Relaxed);
        self.files.contains_key(&normalize(path)) || self.is_dir(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.insert(path, contents);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.dirs.insert(normalize(path));
        Ok(())
    }

    fn glob(&self, pattern: &str) -> io::Result<Vec<PathBuf>> {
        let pattern = glob::Pattern::new(&normalize(Path::new(pattern)).to_string_lossy())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
        let options = glob::MatchOptions {
            require_literal_separator: true,
            ..Default::default()
        };

        let mut paths: Vec<PathBuf> = self
            .files
            .iter()
            .filter(|entry| pattern.matches_path_with(entry.key(), options))
            .map(|entry| entry.key().clone())
            .collect();
        paths.sort();
        Ok(paths)
    }
}

//! Filesystem capability used by the renamer.
//!
//! The renamer only needs three things from a filesystem: list the names in
//! a directory, tell whether a path is a directory, and rename a path
//! without clobbering an existing one. [`LocalFs`] does this against the
//! real disk; [`MemoryFs`] keeps everything in memory so the transformation
//! can be exercised without touching a real directory.

use std::cell::RefCell;
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub trait DirectoryFs {
    /// Names of the entries directly inside `dir`, in whatever order the
    /// underlying listing yields them.
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<OsString>>;

    /// Whether `path` is a directory (following symlinks).
    fn is_dir(&self, path: &Path) -> bool;

    /// Rename `from` to `to`. Must fail with `ErrorKind::AlreadyExists`
    /// instead of replacing an existing `to`.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl DirectoryFs for LocalFs {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let entries = fs::read_dir(dir)?.map(|entry| entry.map(|e| e.file_name()));
        Ok(readable_names(dir, entries))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        // std::fs::rename silently replaces the target on Unix
        if fs::symlink_metadata(to).is_ok() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", to.display()),
            ));
        }
        fs::rename(from, to)
    }
}

/// Keep the names that could be read. Once the directory is open, a single
/// unreadable entry is logged and left out of the listing.
fn readable_names(
    dir: &Path,
    entries: impl IntoIterator<Item = io::Result<OsString>>,
) -> Vec<OsString> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::warn!(directory = %dir.display(), "skipping unreadable entry: {e}");
                None
            },
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoryEntry {
    name: OsString,
    is_dir: bool,
}

/// In-memory single directory.
///
/// Entries keep insertion order so callers can simulate an unsorted
/// listing. Renames can be made to fail for chosen names.
#[derive(Debug, Default)]
pub struct MemoryFs {
    root: PathBuf,
    entries: RefCell<Vec<MemoryEntry>>,
    denied: RefCell<HashSet<OsString>>,
}

impl MemoryFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: RefCell::default(),
            denied: RefCell::default(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn with_file(self, name: impl Into<OsString>) -> Self {
        self.add_entry(name.into(), false);
        self
    }

    pub fn with_dir(self, name: impl Into<OsString>) -> Self {
        self.add_entry(name.into(), true);
        self
    }

    /// Make every rename of `name` fail with `PermissionDenied`.
    pub fn deny_rename(self, name: impl Into<OsString>) -> Self {
        self.denied.borrow_mut().insert(name.into());
        self
    }

    /// Current names in listing order.
    pub fn names(&self) -> Vec<OsString> {
        self.entries
            .borrow()
            .iter()
            .map(|e| e.name.clone())
            .collect()
    }

    /// Current names that are valid UTF-8, sorted. Handy for assertions.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .borrow()
            .iter()
            .filter_map(|e| e.name.to_str().map(str::to_string))
            .collect();
        names.sort();
        names
    }

    fn add_entry(&self, name: OsString, is_dir: bool) {
        self.entries.borrow_mut().push(MemoryEntry { name, is_dir });
    }

    fn child_name<'a>(&self, path: &'a Path) -> io::Result<&'a OsStr> {
        match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) if parent == self.root => Ok(name),
            _ => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is outside {}", path.display(), self.root.display()),
            )),
        }
    }
}

impl DirectoryFs for MemoryFs {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        if dir != self.root {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", dir.display()),
            ));
        }
        Ok(self.names())
    }

    fn is_dir(&self, path: &Path) -> bool {
        let Ok(name) = self.child_name(path) else {
            return false;
        };
        self.entries
            .borrow()
            .iter()
            .any(|e| e.name == name && e.is_dir)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let from_name = self.child_name(from)?;
        let to_name = self.child_name(to)?;

        if self.denied.borrow().contains(from_name) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }

        let mut entries = self.entries.borrow_mut();
        if entries.iter().any(|e| e.name == to_name) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", to.display()),
            ));
        }

        let entry = entries
            .iter_mut()
            .find(|e| e.name == from_name)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} not found", from.display()),
                )
            })?;
        entry.name = to_name.to_os_string();
        Ok(())
    }
}

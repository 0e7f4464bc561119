//! Filesystem abstraction used by the tree builder.
//!
//! The builder only ever reads whole descriptor files. [`RealFileSystem`] goes
//! to disk; [`MockFileSystem`] keeps files in memory.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

/// Read access to descriptor files.
pub trait FileSystem {
    /// Read the full contents of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// [`FileSystem`] backed by the real disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// In-memory [`FileSystem`].
#[derive(Debug, Default, Clone)]
pub struct MockFileSystem {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MockFileSystem {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `content` at `path`, replacing anything already there.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: &str) {
        self.files
            .insert(path.as_ref().to_path_buf(), content.as_bytes().to_vec());
    }

    /// Builder-style variant of [`add_file`](Self::add_file).
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        self.add_file(path, content);
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )
        })
    }
}
